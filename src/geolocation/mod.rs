mod config;
mod locator;
mod models;

pub use self::config::Config;
pub use locator::*;
