//! Activities Core — error taxonomy and server configuration.

pub mod config;
pub mod error;

pub use config::ServerConfig;
pub use error::{Error, Result};
