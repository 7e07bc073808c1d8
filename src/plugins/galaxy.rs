use crate::galaxy::Galaxy;
use crate::game_logic::names::NamePool;
use crate::resources::GalaxyConfig;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Generates the galaxy at startup and shares it as a read-only resource
pub struct GalaxyPlugin {
    pub config: GalaxyConfig,
    pub names: NamePool,
}

impl GalaxyPlugin {
    pub fn new(config: GalaxyConfig) -> Self {
        Self {
            config,
            names: NamePool::builtin(),
        }
    }

    pub fn with_names(mut self, names: NamePool) -> Self {
        self.names = names;
        self
    }
}

impl Default for GalaxyPlugin {
    fn default() -> Self {
        Self::new(GalaxyConfig::default())
    }
}

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.names.clone())
            .add_systems(Startup, generate_galaxy);
    }
}

pub fn generate_galaxy(mut commands: Commands, config: Res<GalaxyConfig>, names: Res<NamePool>) {
    let mut rng = Pcg64::seed_from_u64(config.seed);

    match Galaxy::generate(&config, names.clone(), &mut rng) {
        Ok(galaxy) => {
            info!(
                "Galaxy ready: {} stars on a {}x{} plane (seed {})",
                galaxy.total_stars(),
                galaxy.width(),
                galaxy.height(),
                config.seed
            );
            commands.insert_resource(galaxy);
        }
        Err(err) => {
            error!("Failed to generate galaxy: {err}");
        }
    }
}
