//! Shared application state.

use activities_core::ServerConfig;
use activities_directory::Directory;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub directory: Directory,
}

impl AppState {
    pub fn new(config: ServerConfig, directory: Directory) -> Self {
        Self { config, directory }
    }
}
