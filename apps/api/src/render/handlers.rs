use axum::{
    extract::State,
    http::HeaderName,
    response::{Html, IntoResponse},
};

use crate::render::{pdf_filename, render_resume_html};
use crate::state::AppState;

/// Suggested file name for the PDF the external pipeline produces from this document.
pub const PDF_FILENAME_HEADER: HeaderName = HeaderName::from_static("x-resume-pdf-filename");

/// GET /api/v1/resume/preview
pub async fn handle_preview(State(state): State<AppState>) -> impl IntoResponse {
    let resume = state.workspace.lock().await;
    let html = render_resume_html(&resume);
    let filename = pdf_filename(&resume.personal_info.name);
    ([(PDF_FILENAME_HEADER, filename)], Html(html))
}
