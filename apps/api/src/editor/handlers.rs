//! Axum route handlers for the working resume and its field-level edits.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::editor::{EditError, EducationField, ExperienceField, PersonalField};
use crate::errors::AppError;
use crate::models::ResumeData;
use crate::notifications::Notice;
use crate::state::AppState;
use crate::validation::{validate_resume, ScoreCategory, ValidationReport};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The working resume together with its fresh validation report.
#[derive(Debug, Serialize)]
pub struct ResumeView {
    pub resume: ResumeData,
    pub report: ValidationReport,
    pub category: ScoreCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl ResumeView {
    pub fn of(resume: &ResumeData) -> Self {
        let report = validate_resume(resume);
        Self {
            resume: resume.clone(),
            category: report.category(),
            report,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct PersonalUpdate {
    pub field: PersonalField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct EducationUpdate {
    pub field: EducationField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceUpdate {
    pub field: ExperienceField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillUpdate {
    pub value: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared edit path
// ────────────────────────────────────────────────────────────────────────────

/// Applies one edit under the workspace lock, then schedules an auto-save once the
/// resume holds meaningful content.
async fn apply_edit<F>(state: &AppState, edit: F) -> Result<Json<ResumeView>, AppError>
where
    F: FnOnce(&mut ResumeData) -> Result<(), EditError>,
{
    let mut resume = state.workspace.lock().await;
    edit(&mut *resume)?;
    if resume.has_meaningful_content() {
        state
            .autosaver
            .schedule(&mut *resume, state.config.autosave_delay);
    }
    Ok(Json(ResumeView::of(&*resume)))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeView> {
    Json(ResumeView::of(&*state.workspace.lock().await))
}

/// PATCH /api/v1/resume/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Json(req): Json<PersonalUpdate>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| {
        resume.update_personal_info(req.field, req.value);
        Ok(())
    })
    .await
}

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| {
        resume.add_education();
        Ok(())
    })
    .await
}

/// PATCH /api/v1/resume/education/:index
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<EducationUpdate>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| {
        resume.update_education(index, req.field, req.value)
    })
    .await
}

/// DELETE /api/v1/resume/education/:index
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| resume.remove_education(index)).await
}

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| {
        resume.add_experience();
        Ok(())
    })
    .await
}

/// PATCH /api/v1/resume/experience/:index
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<ExperienceUpdate>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| {
        resume.update_experience(index, req.field, req.value)
    })
    .await
}

/// DELETE /api/v1/resume/experience/:index
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| resume.remove_experience(index)).await
}

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| {
        resume.add_skill();
        Ok(())
    })
    .await
}

/// PATCH /api/v1/resume/skills/:index
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<SkillUpdate>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| resume.update_skill(index, req.value)).await
}

/// DELETE /api/v1/resume/skills/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ResumeView>, AppError> {
    apply_edit(&state, |resume| resume.remove_skill(index)).await
}
