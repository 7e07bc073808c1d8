pub mod range_types;

use crate::game_logic::errors::{ForedeckError, ForedeckResult};
use crate::resources::GalaxyConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// `<config dir>/foredeck/galaxy.toml`, creating the directory if needed
pub fn get_config_path() -> ForedeckResult<PathBuf> {
    let mut path = dirs::config_dir().ok_or(ForedeckError::ConfigDirNotFound)?;
    path.push("foredeck");
    fs::create_dir_all(&path)?;
    path.push("galaxy.toml");
    Ok(path)
}

/// Read and validate a galaxy config file
pub fn load_config_from<P: AsRef<Path>>(path: P) -> ForedeckResult<GalaxyConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ForedeckError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let config = toml::from_str::<GalaxyConfig>(&contents)?;
    config.check()?;
    Ok(config)
}

/// The user's saved config, or defaults when there is none or it cannot be read
pub fn load_config() -> GalaxyConfig {
    get_config_path()
        .and_then(load_config_from)
        .unwrap_or_default()
}

pub fn save_config_to<P: AsRef<Path>>(config: &GalaxyConfig, path: P) -> ForedeckResult<()> {
    config.check()?;
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

pub fn save_config(config: &GalaxyConfig) -> ForedeckResult<PathBuf> {
    let path = get_config_path()?;
    save_config_to(config, &path)?;
    Ok(path)
}
