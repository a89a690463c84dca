//! Host State
//!
//! Shared state accessible by the health handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the compiled bundle's entry point exists
    pub fn bundle_present(&self) -> bool {
        self.config.static_dir.join("index.html").is_file()
    }
}
