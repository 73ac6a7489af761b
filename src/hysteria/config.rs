use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/hysteria/config.yaml";

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Config {
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}
