use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

/// A named, point-in-time copy of a resume kept apart from the current-resume slot.
///
/// Serialized as the resume's own fields plus `id`, `name` and `createdAt`.
/// Names are not unique; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub resume: ResumeData,
}

impl Template {
    pub fn new(id: String, name: &str, resume: &ResumeData) -> Self {
        let mut snapshot = resume.clone();
        // The template's own id is the only identity it carries.
        snapshot.id = None;
        Self {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
            resume: snapshot,
        }
    }

    /// The content sections only. Loading a template replaces the working
    /// resume wholesale, so the result carries no `id` or `lastSaved`.
    pub fn to_resume(&self) -> ResumeData {
        ResumeData {
            personal_info: self.resume.personal_info.clone(),
            education: self.resume.education.clone(),
            experience: self.resume.experience.clone(),
            skills: self.resume.skills.clone(),
            id: None,
            last_saved: None,
        }
    }
}
