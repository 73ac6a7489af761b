mod config;
mod manager;

pub use self::config::Config;
pub use manager::*;
