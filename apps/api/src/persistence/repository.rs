use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::{ResumeData, Template};
use crate::persistence::store::{KeyValueStore, StorageError};

pub const CURRENT_RESUME_KEY: &str = "resumeBuilder_current";
pub const TEMPLATES_KEY: &str = "resumeBuilder_templates";

/// Generates an opaque resume/template id: `resume_<unix millis>_<9 random hex chars>`.
pub fn generate_resume_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("resume_{}_{}", Utc::now().timestamp_millis(), &random[..9])
}

/// Current-resume slot and template collection over a key-value store.
///
/// Public operations never fail outright: storage problems are logged and
/// reported as `false` / `None` / empty, and the caller retries later.
#[derive(Clone)]
pub struct ResumeRepository {
    store: Arc<dyn KeyValueStore>,
    current_key: String,
    templates_key: String,
    /// Held across every read-modify-write of the template collection.
    templates_lock: Arc<Mutex<()>>,
}

impl ResumeRepository {
    #[cfg(test)]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_prefix(store, "")
    }

    pub fn with_prefix(store: Arc<dyn KeyValueStore>, prefix: &str) -> Self {
        Self {
            store,
            current_key: format!("{prefix}{CURRENT_RESUME_KEY}"),
            templates_key: format!("{prefix}{TEMPLATES_KEY}"),
            templates_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    // ────────────────────────────────────────────────────────────────────────
    // Current-resume slot
    // ────────────────────────────────────────────────────────────────────────

    /// Writes the resume to the current-resume slot.
    ///
    /// Assigns an id on first save and restamps `last_saved`. The caller's resume
    /// only receives the new metadata once the write has gone through.
    pub async fn save(&self, resume: &mut ResumeData) -> bool {
        match self.try_save(resume).await {
            Ok(()) => true,
            Err(e) => {
                error!("Error saving resume to {} store: {e}", self.backend());
                false
            }
        }
    }

    async fn try_save(&self, resume: &mut ResumeData) -> Result<(), StorageError> {
        let mut stamped = resume.clone();
        if stamped.id.is_none() {
            stamped.id = Some(generate_resume_id());
        }
        stamped.last_saved = Some(Utc::now());

        let json = serde_json::to_string(&stamped)?;
        self.store.set(&self.current_key, &json).await?;

        resume.id = stamped.id;
        resume.last_saved = stamped.last_saved;
        Ok(())
    }

    /// Reads the current-resume slot. Empty or unreadable content is `None`.
    pub async fn load(&self) -> Option<ResumeData> {
        let raw = match self.store.get(&self.current_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                error!("Error loading resume from {} store: {e}", self.backend());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(resume) => Some(resume),
            Err(e) => {
                warn!("Discarding corrupt current-resume record: {e}");
                None
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Templates
    // ────────────────────────────────────────────────────────────────────────

    /// Appends a named snapshot to the template collection. Names may repeat.
    ///
    /// Returns `false` without writing when the stored collection cannot be read.
    pub async fn save_as_template(&self, resume: &ResumeData, name: &str) -> bool {
        match self.try_save_template(resume, name).await {
            Ok((id, total)) => {
                info!("Saved template {id} ({total} total)");
                true
            }
            Err(e) => {
                error!("Error saving template: {e}");
                false
            }
        }
    }

    async fn try_save_template(
        &self,
        resume: &ResumeData,
        name: &str,
    ) -> Result<(String, usize), StorageError> {
        let _guard = self.templates_lock.lock().await;
        let mut entries = self.read_template_entries().await?;
        let template = Template::new(generate_resume_id(), name, resume);
        entries.push(serde_json::to_value(&template)?);
        self.write_template_entries(&entries).await?;
        Ok((template.id, entries.len()))
    }

    /// All stored templates in insertion order; empty when missing or unreadable.
    /// Entries that do not map onto a template are skipped.
    pub async fn list_templates(&self) -> Vec<Template> {
        let entries = match self.read_template_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error loading templates: {e}");
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Template>(entry) {
                Ok(template) => Some(template),
                Err(e) => {
                    warn!("Skipping unreadable template entry: {e}");
                    None
                }
            })
            .collect()
    }

    pub async fn find_template(&self, id: &str) -> Option<Template> {
        self.list_templates()
            .await
            .into_iter()
            .find(|template| template.id == id)
    }

    /// Removes the template with `id`. Deleting an id that is not stored succeeds
    /// without touching the collection; an unreadable collection is `false`.
    pub async fn delete_template(&self, id: &str) -> bool {
        match self.try_delete_template(id).await {
            Ok(true) => {
                info!("Deleted template {id}");
                true
            }
            Ok(false) => true,
            Err(e) => {
                error!("Error deleting template {id}: {e}");
                false
            }
        }
    }

    async fn try_delete_template(&self, id: &str) -> Result<bool, StorageError> {
        let _guard = self.templates_lock.lock().await;
        let mut entries = self.read_template_entries().await?;
        let before = entries.len();
        entries.retain(|entry| entry.get("id").and_then(Value::as_str) != Some(id));
        if entries.len() == before {
            return Ok(false);
        }
        self.write_template_entries(&entries).await?;
        Ok(true)
    }

    /// The stored collection as raw entries. Writers carry entries they cannot map
    /// through untouched; only a collection that is not a JSON array is an error.
    async fn read_template_entries(&self) -> Result<Vec<Value>, StorageError> {
        match self.store.get(&self.templates_key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write_template_entries(&self, entries: &[Value]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(&self.templates_key, &json).await
    }
}
