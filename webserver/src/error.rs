//! WebServer-specific error types

use dedupe::DedupeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {message}")]
    ServerStartup { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("Merge engine error: {0}")]
    Engine(#[from] DedupeError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type WebServerResult<T> = Result<T, WebServerError>;
