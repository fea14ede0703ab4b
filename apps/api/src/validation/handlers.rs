use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::validation::keywords::keyword_suggestions;
use crate::validation::{validate_resume, ScoreCategory, ValidationReport};

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub report: ValidationReport,
    pub category: ScoreCategory,
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KeywordResponse {
    pub keywords: Vec<&'static str>,
}

/// GET /api/v1/resume/validation
pub async fn handle_validation(State(state): State<AppState>) -> Json<ValidationResponse> {
    let report = validate_resume(&*state.workspace.lock().await);
    Json(ValidationResponse {
        category: report.category(),
        report,
    })
}

/// GET /api/v1/keywords?job_description=...
pub async fn handle_keywords(Query(params): Query<KeywordQuery>) -> Json<KeywordResponse> {
    Json(KeywordResponse {
        keywords: keyword_suggestions(params.job_description.as_deref()),
    })
}
