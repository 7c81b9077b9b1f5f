/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub building: BuildingConfig,
    pub timing: TimingConfig,
}

#[derive(Deserialize, Clone)]
pub struct BuildingConfig {
    pub n_floors: i32,
    pub n_lifts: i32,
}

#[derive(Deserialize, Clone)]
pub struct TimingConfig {
    /// One global pause: both the per-floor travel time and the
    /// door-open window.
    pub pause_ms: u64,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, String> {
    let config_str =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    toml::from_str(&config_str).map_err(|e| format!("failed to parse {}: {}", path, e))
}
