use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{method} {url} failed: {source}"))]
    RequestError {
        url: String,
        method: String,
        source: ureq::Error,
    },
    #[snafu(display("{message}: {source}"))]
    ResponseError {
        message: String,
        source: Box<dyn std::error::Error>,
    },
    #[snafu(display("Invalid configuration for {prefix}: {message}"))]
    ConfigError { prefix: String, message: String },
    #[snafu(display("{path}: {message}"))]
    ConfigFormatError { path: String, message: String },
    #[snafu(display("Failed to {action} {path}: {source}"))]
    ConfigIoError {
        path: String,
        action: String,
        source: Box<dyn std::error::Error>,
    },
    #[snafu(display("Failed to restart {unit}: {message}"))]
    ServiceRestartError { unit: String, message: String },
    #[snafu(display("{message} {path}: {source}"))]
    LogBootstrapError {
        path: String,
        message: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to append to {path}: {source}"))]
    LogWriteError {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("{message}"))]
    PermissionError { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
