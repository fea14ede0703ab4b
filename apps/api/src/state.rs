use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::ResumeData;
use crate::persistence::{AutoSaver, ResumeRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The working resume. One logical editor, so a single lock serializes every mutation.
    pub workspace: Arc<Mutex<ResumeData>>,
    pub repository: ResumeRepository,
    pub autosaver: Arc<AutoSaver>,
    pub config: Config,
}

impl AppState {
    pub fn new(repository: ResumeRepository, initial: ResumeData, config: Config) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(initial)),
            autosaver: Arc::new(AutoSaver::new(repository.clone())),
            repository,
            config,
        }
    }
}
