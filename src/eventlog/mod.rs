mod config;
mod writer;

pub use self::config::Config;
pub use writer::*;
