pub mod common;
pub mod config;
pub mod eventlog;
pub mod geolocation;
pub mod hysteria;
pub mod pool;
pub mod service;
pub mod systemd;

pub use crate::config::*;
