//! Axum route handlers for saving, templates, and JSON export/import.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::editor::handlers::ResumeView;
use crate::errors::AppError;
use crate::models::Template;
use crate::notifications::Notice;
use crate::persistence::transfer::{export_as_json, import_from_json};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveTemplateRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

// ────────────────────────────────────────────────────────────────────────────
// Current resume
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/save
pub async fn handle_save_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeView>, AppError> {
    let mut resume = state.workspace.lock().await;
    // The explicit write carries the newest state; a pending auto-save would only repeat it.
    state.autosaver.cancel();
    if !state.repository.save(&mut *resume).await {
        return Err(AppError::Storage("Failed to save resume".to_string()));
    }
    Ok(Json(
        ResumeView::of(&*resume).with_notice(Notice::success("Resume saved successfully!")),
    ))
}

/// POST /api/v1/resume/load
pub async fn handle_load_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeView>, AppError> {
    let saved = state
        .repository
        .load()
        .await
        .ok_or_else(|| AppError::NotFound("No saved resume found".to_string()))?;

    let mut resume = state.workspace.lock().await;
    state.autosaver.cancel();
    resume.replace_with(saved);
    Ok(Json(ResumeView::of(&*resume)))
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: state.repository.list_templates().await,
        notice: None,
    })
}

/// POST /api/v1/templates
pub async fn handle_save_template(
    State(state): State<AppState>,
    Json(req): Json<SaveTemplateRequest>,
) -> Result<(StatusCode, Json<TemplateListResponse>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a template name".to_string(),
        ));
    }

    let snapshot = state.workspace.lock().await.clone();
    if !state.repository.save_as_template(&snapshot, &req.name).await {
        return Err(AppError::Storage("Failed to save template".to_string()));
    }

    Ok((
        StatusCode::CREATED,
        Json(TemplateListResponse {
            templates: state.repository.list_templates().await,
            notice: Some(Notice::success("Template saved successfully!")),
        }),
    ))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    state
        .repository
        .find_template(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))
}

/// POST /api/v1/templates/:id/load
pub async fn handle_load_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeView>, AppError> {
    let template = state
        .repository
        .find_template(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))?;

    let mut resume = state.workspace.lock().await;
    // A save still pending for the replaced resume must not land afterwards.
    state.autosaver.cancel();
    resume.replace_with(template.to_resume());
    if resume.has_meaningful_content() {
        state
            .autosaver
            .schedule(&mut *resume, state.config.autosave_delay);
    }
    Ok(Json(ResumeView::of(&*resume)))
}

/// DELETE /api/v1/templates/:id
pub async fn handle_delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateListResponse>, AppError> {
    if !state.repository.delete_template(&id).await {
        return Err(AppError::Storage("Failed to delete template".to_string()));
    }
    Ok(Json(TemplateListResponse {
        templates: state.repository.list_templates().await,
        notice: Some(Notice::success("Template deleted successfully")),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// JSON export / import
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume/export
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let resume = state.workspace.lock().await.clone();
    let export = export_as_json(&resume).map_err(|e| AppError::Internal(e.into()))?;
    let disposition = format!("attachment; filename=\"{}\"", export.filename);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.contents,
    )
        .into_response())
}

/// POST /api/v1/resume/import
///
/// The raw request body is the uploaded file's contents.
pub async fn handle_import(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ResumeView>, AppError> {
    let imported = import_from_json(&body[..]).await.map_err(AppError::Import)?;

    let mut resume = state.workspace.lock().await;
    state.autosaver.cancel();
    resume.replace_with(imported);
    if resume.has_meaningful_content() {
        state
            .autosaver
            .schedule(&mut *resume, state.config.autosave_delay);
    }
    Ok(Json(
        ResumeView::of(&*resume).with_notice(Notice::success("Resume imported successfully!")),
    ))
}
