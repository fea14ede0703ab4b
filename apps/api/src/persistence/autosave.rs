use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::ResumeData;
use crate::persistence::repository::{generate_resume_id, ResumeRepository};

/// Trailing-edge debounce for saves to the current-resume slot.
///
/// At most one save is pending at a time; scheduling again replaces it, so a
/// burst of edits produces a single write carrying the last snapshot.
pub struct AutoSaver {
    repository: ResumeRepository,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl AutoSaver {
    pub fn new(repository: ResumeRepository) -> Self {
        Self {
            repository,
            pending: Mutex::new(None),
        }
    }

    /// Schedules a save of `resume` after `delay`, cancelling any save still pending.
    ///
    /// The id is assigned here rather than in the deferred save, so the caller's
    /// copy already carries the id that ends up in storage.
    pub fn schedule(&self, resume: &mut ResumeData, delay: Duration) {
        if resume.id.is_none() {
            resume.id = Some(generate_resume_id());
        }
        let mut snapshot = resume.clone();
        let repository = self.repository.clone();

        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if repository.save(&mut snapshot).await {
                debug!("Auto-saved resume {:?}", snapshot.id);
            }
        }));
    }

    /// Drops the pending save, if any, without writing.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
