pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::editor::handlers as editor;
use crate::persistence::handlers as persistence;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::validation::handlers as validation;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Working resume
        .route("/api/v1/resume", get(editor::handle_get_resume))
        .route("/api/v1/resume/personal", patch(editor::handle_update_personal))
        .route("/api/v1/resume/education", post(editor::handle_add_education))
        .route(
            "/api/v1/resume/education/:index",
            patch(editor::handle_update_education).delete(editor::handle_remove_education),
        )
        .route("/api/v1/resume/experience", post(editor::handle_add_experience))
        .route(
            "/api/v1/resume/experience/:index",
            patch(editor::handle_update_experience).delete(editor::handle_remove_experience),
        )
        .route("/api/v1/resume/skills", post(editor::handle_add_skill))
        .route(
            "/api/v1/resume/skills/:index",
            patch(editor::handle_update_skill).delete(editor::handle_remove_skill),
        )
        // Validation & scoring
        .route(
            "/api/v1/resume/validation",
            get(validation::handle_validation),
        )
        .route("/api/v1/keywords", get(validation::handle_keywords))
        // Persistence
        .route("/api/v1/resume/save", post(persistence::handle_save_resume))
        .route("/api/v1/resume/load", post(persistence::handle_load_resume))
        .route("/api/v1/resume/export", get(persistence::handle_export))
        .route("/api/v1/resume/import", post(persistence::handle_import))
        .route(
            "/api/v1/templates",
            get(persistence::handle_list_templates).post(persistence::handle_save_template),
        )
        .route(
            "/api/v1/templates/:id",
            get(persistence::handle_get_template).delete(persistence::handle_delete_template),
        )
        .route(
            "/api/v1/templates/:id/load",
            post(persistence::handle_load_template),
        )
        // Document
        .route("/api/v1/resume/preview", get(render::handle_preview))
        .with_state(state)
}
