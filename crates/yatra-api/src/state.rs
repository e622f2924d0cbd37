//! Application state shared across route handlers.

use std::sync::Arc;
use std::time::Instant;

use yatra_sites::SiteDirectory;
use yatra_translate::Translator;

/// Shared application state, cheap to clone across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Translation collaborator for localizing responses.
    pub translator: Arc<dyn Translator>,
    /// Static site directory.
    pub directory: Arc<SiteDirectory>,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(translator: Arc<dyn Translator>, directory: SiteDirectory) -> Self {
        Self {
            translator,
            directory: Arc::new(directory),
            start_time: Instant::now(),
        }
    }
}
