use crate::config::range_types::*;
use crate::game_logic::errors::{ForedeckError, ForedeckResult};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Seed used when a config file does not name one
pub const DEFAULT_SEED: u64 = 1637233196;

/// Everything needed to generate a galaxy
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[validate(schema(function = "validate_galaxy_config"))]
// NOTE: When adding new fields, keep `#[serde(default)]` so older config files still load
pub struct GalaxyConfig {
    #[validate(range(min = 1, max = 2048))]
    pub width: u32,
    #[validate(range(min = 1, max = 2048))]
    pub height: u32,
    pub min_stars: u32,
    pub max_stars: u32,
    #[serde(default = "default_seed")]
    pub seed: u64,
    // TOML tables must follow plain values
    #[validate(nested)]
    pub shape: GalaxyShape,
    #[serde(default)]
    pub growth: GrowthSettings,
}

/// Spacing rules for a flat galaxy
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Validate)]
pub struct GalaxyShape {
    /// Hard lower bound on the distance between any two stars
    #[validate(range(min = 0.01))]
    pub min_star_dist: f64,
    /// Sector size lower bound and outer radius of ring sampling
    #[validate(range(min = 0.01))]
    pub max_star_conn_dist: f64,
}

/// Retry budgets for the growth scheduler
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GrowthSettings {
    pub bootstrap_attempts: BootstrapAttempts,
    pub ring_tries: RingTries,
    pub ring_accept_cap: RingAcceptCap,
    pub ring_epsilon: RingEpsilon,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn validate_galaxy_config(config: &GalaxyConfig) -> Result<(), ValidationError> {
    if config.shape.min_star_dist > config.shape.max_star_conn_dist {
        let mut err = ValidationError::new("min_star_dist_above_conn_dist");
        err.message = Some(
            format!(
                "min_star_dist {} must not exceed max_star_conn_dist {}",
                config.shape.min_star_dist, config.shape.max_star_conn_dist
            )
            .into(),
        );
        return Err(err);
    }

    if config.min_stars > config.max_stars {
        let mut err = ValidationError::new("min_stars_above_max_stars");
        err.message = Some(
            format!(
                "min_stars {} must not exceed max_stars {}",
                config.min_stars, config.max_stars
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            min_stars: 30,
            max_stars: 50,
            seed: DEFAULT_SEED,
            shape: GalaxyShape::default(),
            growth: GrowthSettings::default(),
        }
    }
}

impl Default for GalaxyShape {
    fn default() -> Self {
        Self {
            min_star_dist: 4.0,
            max_star_conn_dist: 7.0,
        }
    }
}

impl GalaxyConfig {
    /// Validate and convert failures into a single readable error
    pub fn check(&self) -> ForedeckResult<()> {
        self.validate()
            .map_err(|validation_errors| ForedeckError::InvalidConfig {
                reason: validation_errors.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GalaxyConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.width, 30);
        assert_eq!(config.shape.min_star_dist, 4.0);
        assert_eq!(config.shape.max_star_conn_dist, 7.0);
        assert_eq!(config.growth.ring_tries.get(), 20);
    }

    #[test]
    fn test_min_dist_above_conn_dist_rejected() {
        let config = GalaxyConfig {
            shape: GalaxyShape {
                min_star_dist: 8.0,
                max_star_conn_dist: 7.0,
            },
            ..Default::default()
        };
        let err = config.check().unwrap_err();
        assert!(matches!(err, ForedeckError::InvalidConfig { .. }));
    }

    #[test]
    fn test_min_stars_above_max_stars_rejected() {
        let config = GalaxyConfig {
            min_stars: 60,
            max_stars: 50,
            ..Default::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = GalaxyConfig {
            width: 0,
            ..Default::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_nested_shape_validated() {
        let config = GalaxyConfig {
            shape: GalaxyShape {
                min_star_dist: 0.0,
                max_star_conn_dist: 7.0,
            },
            ..Default::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_growth_settings_optional_in_toml() {
        let config: GalaxyConfig = toml::from_str(
            r#"
            width = 40
            height = 20
            min_stars = 10
            max_stars = 20

            [shape]
            min_star_dist = 3.0
            max_star_conn_dist = 6.0
            "#,
        )
        .unwrap();

        assert_eq!(config.width, 40);
        assert_eq!(config.growth, GrowthSettings::default());
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_growth_settings_clamped_on_load() {
        let config: GalaxyConfig = toml::from_str(
            r#"
            width = 30
            height = 30
            min_stars = 1
            max_stars = 5

            [shape]
            min_star_dist = 4.0
            max_star_conn_dist = 7.0

            [growth]
            ring_tries = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.growth.ring_tries.get(), 1);
        assert_eq!(config.growth.ring_accept_cap.get(), 7);
    }
}
