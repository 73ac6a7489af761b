use std::path::PathBuf;

pub const DEFAULT_LOG_PATH: &str = "/root/hy/auto-change-site.log";

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Config {
    pub path: PathBuf,
    /// Owner applied to the log directory and file when they are created.
    pub owner_uid: u32,
    pub owner_gid: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            owner_uid: 0,
            owner_gid: 0,
        }
    }
}
