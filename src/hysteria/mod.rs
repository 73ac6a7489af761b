mod config;
mod document;

pub use self::config::Config;
pub use document::*;
