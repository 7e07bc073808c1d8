use clap::Parser;
use foredeck::chart::{DEFAULT_STAR_MARKER, render_chart, render_legend};
use foredeck::config::{load_config, load_config_from, save_config};
use foredeck::{ForedeckResult, Galaxy, GalaxyConfig, NamePool};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(name = "foredeck")]
#[command(about = "Generate and print a Foredeck star chart")]
struct Args {
    /// Galaxy config file (TOML). Defaults to the saved user config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plane width in chart columns
    #[arg(long)]
    width: Option<u32>,

    /// Plane height in chart rows
    #[arg(long)]
    height: Option<u32>,

    /// Minimum distance between any two stars
    #[arg(long)]
    min_star_dist: Option<f64>,

    /// Maximum distance for a star connection (also the sector size)
    #[arg(long)]
    max_conn_dist: Option<f64>,

    /// Star count below which the galaxy is reported as sparse
    #[arg(long)]
    min_stars: Option<u32>,

    /// Hard ceiling on the star count
    #[arg(long)]
    max_stars: Option<u32>,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Star name list, one name per line
    #[arg(long)]
    names: Option<PathBuf>,

    /// Character used to mark stars on the chart
    #[arg(long, default_value_t = DEFAULT_STAR_MARKER)]
    marker: char,

    /// Print every star with its name and position
    #[arg(long)]
    legend: bool,

    /// Print the travel lanes between stars
    #[arg(long)]
    lanes: bool,

    /// Save the resulting config as the user default
    #[arg(long)]
    save_config: bool,
}

impl Args {
    /// Command line values take precedence over the config file
    fn apply_overrides(&self, mut config: GalaxyConfig) -> GalaxyConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(dist) = self.min_star_dist {
            config.shape.min_star_dist = dist;
        }
        if let Some(dist) = self.max_conn_dist {
            config.shape.max_star_conn_dist = dist;
        }
        if let Some(min_stars) = self.min_stars {
            config.min_stars = min_stars;
        }
        if let Some(max_stars) = self.max_stars {
            config.max_stars = max_stars;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

fn main() -> ForedeckResult<()> {
    let args = Args::parse();

    let base_config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let config = args.apply_overrides(base_config);
    config.check()?;

    let names = match &args.names {
        Some(path) => NamePool::from_file(path)?,
        None => NamePool::builtin(),
    };

    let mut rng = Pcg64::seed_from_u64(config.seed);
    let galaxy = Galaxy::generate(&config, names, &mut rng)?;

    println!("{}", render_chart(&galaxy, args.marker));
    print_galaxy_summary(&galaxy, &config);

    if args.legend {
        println!("\nStars:");
        println!("{}", render_legend(&galaxy));
    }

    if args.lanes {
        print_lanes(&galaxy);
    }

    if args.save_config {
        let path = save_config(&config)?;
        println!("\nConfig saved to: {}", path.display());
    }

    Ok(())
}

fn print_galaxy_summary(galaxy: &Galaxy, config: &GalaxyConfig) {
    println!("\nGalaxy summary:");
    println!(
        "  Plane: {}x{} ({}x{} sectors)",
        galaxy.width(),
        galaxy.height(),
        galaxy.sectors().dimensions().0,
        galaxy.sectors().dimensions().1
    );
    println!("  Seed: {}", config.seed);
    println!(
        "  Stars: {} (target {}-{})",
        galaxy.total_stars(),
        galaxy.min_stars(),
        galaxy.max_stars()
    );
    println!(
        "  Spacing: min {} / connection {}",
        galaxy.shape().min_star_dist,
        galaxy.shape().max_star_conn_dist
    );

    if !galaxy.meets_minimum() {
        println!(
            "Warning: Galaxy ran out of room {} stars short of the minimum",
            galaxy.min_stars() as usize - galaxy.total_stars()
        );
    }
}

fn print_lanes(galaxy: &Galaxy) {
    let lanes = galaxy.lanes();
    println!("\nLanes ({}):", lanes.len());
    for (from, to) in lanes {
        let (Some(from), Some(to)) = (galaxy.star(from), galaxy.star(to)) else {
            continue;
        };
        println!(
            "  {} - {} ({:.2})",
            from.display_name,
            to.display_name,
            from.distance_to(to.x, to.y)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let args = Args::parse_from([
            "foredeck",
            "--width",
            "40",
            "--max-conn-dist",
            "8.5",
            "--seed",
            "9",
        ]);
        let config = args.apply_overrides(GalaxyConfig::default());

        assert_eq!(config.width, 40);
        assert_eq!(config.height, 30);
        assert_eq!(config.shape.max_star_conn_dist, 8.5);
        assert_eq!(config.shape.min_star_dist, 4.0);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["foredeck"]);
        assert_eq!(args.marker, '*');
        assert!(!args.legend);
        assert_eq!(
            args.apply_overrides(GalaxyConfig::default()),
            GalaxyConfig::default()
        );
    }

    #[test]
    fn test_main_integration() {
        let args = Args::parse_from([
            "foredeck",
            "--seed",
            "5",
            "--max-stars",
            "20",
            "--min-stars",
            "5",
        ]);
        let config = args.apply_overrides(GalaxyConfig::default());
        config.check().unwrap();

        let mut rng = Pcg64::seed_from_u64(config.seed);
        let galaxy = Galaxy::generate(&config, NamePool::builtin(), &mut rng).unwrap();
        assert!(galaxy.total_stars() <= 20);

        let chart = render_chart(&galaxy, args.marker);
        assert_eq!(chart.lines().count(), 30);
    }
}
