pub mod growth;
pub mod placement;
pub mod random;
pub mod registry;
pub mod ring;
pub mod sectors;

pub use growth::{GalaxyGenerator, GrowthPhase};
pub use random::RandomSource;
pub use registry::{Star, StarId, StarRegistry};
pub use ring::RingSample;
pub use sectors::SectorGrid;

use crate::game_logic::errors::{ForedeckError, ForedeckResult};
use crate::game_logic::names::NamePool;
use crate::resources::{GalaxyConfig, GalaxyShape};
use bevy::prelude::Resource;

/// A finished galaxy. Read-only once generation completes.
#[derive(Debug, Clone, Resource)]
pub struct Galaxy {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) shape: GalaxyShape,
    pub(crate) min_stars: u32,
    pub(crate) max_stars: u32,
    pub(crate) sectors: SectorGrid,
    pub(crate) stars: StarRegistry,
}

impl Galaxy {
    /// Generate a galaxy from a configuration, a name pool and an injected random source
    pub fn generate<R: RandomSource + ?Sized>(
        config: &GalaxyConfig,
        names: NamePool,
        rng: &mut R,
    ) -> ForedeckResult<Self> {
        GalaxyGenerator::new(config, names, rng)?.run()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn shape(&self) -> GalaxyShape {
        self.shape
    }

    pub fn min_stars(&self) -> u32 {
        self.min_stars
    }

    pub fn max_stars(&self) -> u32 {
        self.max_stars
    }

    pub fn total_stars(&self) -> usize {
        self.stars.len()
    }

    pub fn stars(&self) -> &StarRegistry {
        &self.stars
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.get(id)
    }

    pub fn star_named(&self, name: &str) -> Option<&Star> {
        self.stars.find_by_name(name)
    }

    pub fn sectors(&self) -> &SectorGrid {
        &self.sectors
    }

    /// Whether growth reached `min_stars` before running out of room
    pub fn meets_minimum(&self) -> bool {
        self.total_stars() >= self.min_stars as usize
    }

    /// Stars within connection distance of `id`, in id order
    pub fn stars_near(&self, id: StarId) -> ForedeckResult<Vec<StarId>> {
        let star = self.star(id).ok_or(ForedeckError::UnknownStar { id })?;
        let mut near: Vec<StarId> = self.connected(star).map(|other| other.id).collect();
        near.sort();
        Ok(near)
    }

    /// Travel lanes: every pair of stars within connection distance, each pair once
    pub fn lanes(&self) -> Vec<(StarId, StarId)> {
        let mut lanes: Vec<(StarId, StarId)> = self
            .stars
            .iter()
            .flat_map(|star| {
                self.connected(star)
                    .filter(move |other| star.id < other.id)
                    .map(move |other| (star.id, other.id))
            })
            .collect();
        lanes.sort();
        lanes
    }

    fn connected<'a>(&'a self, star: &'a Star) -> impl Iterator<Item = &'a Star> + 'a {
        let max_dist = self.shape.max_star_conn_dist;
        self.sectors
            .neighbors(star.x, star.y)
            .into_iter()
            .filter_map(move |id| self.stars.get(id))
            .filter(move |other| {
                other.id != star.id && other.distance_to(star.x, star.y) <= max_dist
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::collections::HashSet;

    const SEED: u64 = 1637233196;

    fn default_galaxy(seed: u64) -> Galaxy {
        let mut rng = Pcg64::seed_from_u64(seed);
        Galaxy::generate(&GalaxyConfig::default(), NamePool::builtin(), &mut rng)
            .expect("Default galaxy should generate")
    }

    fn sectors_adjacent(galaxy: &Galaxy, a: &Star, b: &Star) -> bool {
        let (ax, ay) = galaxy.sectors().sector_of(a.x, a.y).unwrap();
        let (bx, by) = galaxy.sectors().sector_of(b.x, b.y).unwrap();
        ax.abs_diff(bx) <= 1 && ay.abs_diff(by) <= 1
    }

    #[test]
    fn test_pairwise_distance_invariant() {
        for seed in [SEED, 1, 2, 3] {
            let galaxy = default_galaxy(seed);
            let stars: Vec<&Star> = galaxy.stars().iter().collect();
            assert!(!stars.is_empty());

            for (i, a) in stars.iter().enumerate() {
                for b in &stars[i + 1..] {
                    if sectors_adjacent(&galaxy, a, b) {
                        let dist = a.distance_to(b.x, b.y);
                        assert!(
                            dist >= 4.0,
                            "{} and {} are only {dist} apart (seed {seed})",
                            a.display_name,
                            b.display_name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_bounds_invariant() {
        let galaxy = default_galaxy(SEED);
        for star in galaxy.stars().iter() {
            assert!(star.x >= 0.0 && star.x < 30.0, "x out of bounds: {}", star.x);
            assert!(star.y >= 0.0 && star.y < 30.0, "y out of bounds: {}", star.y);
        }
    }

    #[test]
    fn test_uniqueness_and_consistency() {
        let galaxy = default_galaxy(SEED);

        let ids: HashSet<StarId> = galaxy.stars().ids().collect();
        let names: HashSet<&str> = galaxy
            .stars()
            .iter()
            .map(|star| star.display_name.as_str())
            .collect();
        assert_eq!(ids.len(), galaxy.total_stars());
        assert_eq!(names.len(), galaxy.total_stars());
        assert!(galaxy.total_stars() <= 50);

        // Grid and registry hold the same stars, each in the sector its coordinates give
        assert_eq!(galaxy.sectors().len(), galaxy.total_stars());
        for star in galaxy.stars().iter() {
            let (sx, sy) = galaxy.sectors().sector_of(star.x, star.y).unwrap();
            assert!(galaxy.sectors().cell(sx, sy).unwrap().contains(&star.id));
        }
    }

    #[test]
    fn test_reproducible_with_same_seed() {
        let first = default_galaxy(42);
        let second = default_galaxy(42);

        let first_stars: Vec<&Star> = first.stars().iter().collect();
        let second_stars: Vec<&Star> = second.stars().iter().collect();
        assert_eq!(first_stars, second_stars);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = default_galaxy(42);
        let second = default_galaxy(43);

        let first_stars: Vec<&Star> = first.stars().iter().collect();
        let second_stars: Vec<&Star> = second.stars().iter().collect();
        assert_ne!(first_stars, second_stars);
    }

    #[test]
    fn test_sparse_galaxy_is_not_an_error() {
        let config = GalaxyConfig {
            min_stars: 400,
            max_stars: 400,
            ..Default::default()
        };
        let names = NamePool::from_names((0..400).map(|i| format!("Star {i}")));
        let mut rng = Pcg64::seed_from_u64(SEED);

        let galaxy = Galaxy::generate(&config, names, &mut rng).unwrap();
        assert!(galaxy.total_stars() > 0);
        assert!(galaxy.total_stars() < 400);
        assert!(!galaxy.meets_minimum());
    }

    #[test]
    fn test_pool_exhaustion() {
        let config = GalaxyConfig {
            min_stars: 10,
            max_stars: 20,
            ..Default::default()
        };
        let names = NamePool::from_names(["Vega", "Altair", "Deneb"]);
        let mut rng = Pcg64::seed_from_u64(SEED);

        assert!(matches!(
            Galaxy::generate(&config, names, &mut rng),
            Err(ForedeckError::NamesExhausted { .. })
        ));
    }

    #[test]
    fn test_lanes_within_connection_distance() {
        let galaxy = default_galaxy(SEED);
        let lanes = galaxy.lanes();
        assert!(!lanes.is_empty());

        for (a, b) in &lanes {
            assert!(a < b);
            let a = galaxy.star(*a).unwrap();
            let b = galaxy.star(*b).unwrap();
            assert!(a.distance_to(b.x, b.y) <= 7.0);
        }

        let unique: HashSet<_> = lanes.iter().collect();
        assert_eq!(unique.len(), lanes.len());
    }

    #[test]
    fn test_every_grown_star_has_a_lane() {
        // Ring samples place stars within connection distance of their source
        let galaxy = default_galaxy(SEED);
        if galaxy.total_stars() < 2 {
            return;
        }
        // The first few ids may be blind bootstrap placements
        for star in galaxy.stars().iter().skip(5) {
            assert!(
                !galaxy.stars_near(star.id).unwrap().is_empty(),
                "{} has no neighbors",
                star.display_name
            );
        }
    }

    #[test]
    fn test_stars_near_unknown_star() {
        let galaxy = default_galaxy(SEED);
        assert!(matches!(
            galaxy.stars_near(StarId::from(10_000)),
            Err(ForedeckError::UnknownStar { .. })
        ));
    }

    #[test]
    fn test_star_named() {
        let galaxy = default_galaxy(SEED);
        let first = galaxy.stars().iter().next().unwrap();
        assert_eq!(
            galaxy.star_named(&first.display_name).map(|star| star.id),
            Some(first.id)
        );
    }

    #[test]
    fn test_tiny_spacing_on_largest_plane() {
        let config = GalaxyConfig {
            width: 2048,
            height: 2048,
            shape: GalaxyShape {
                min_star_dist: 0.01,
                max_star_conn_dist: 0.01,
            },
            ..Default::default()
        };
        assert!(config.check().is_ok());

        let mut rng = Pcg64::seed_from_u64(SEED);
        let galaxy = Galaxy::generate(&config, NamePool::builtin(), &mut rng).unwrap();
        assert!(galaxy.total_stars() > 0);
        assert!(galaxy.total_stars() <= 50);
        assert_eq!(galaxy.sectors().len(), galaxy.total_stars());
    }
}
