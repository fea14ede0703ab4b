// Validation & scoring engine: pure functions from a resume snapshot to findings and
// a 0–100 completeness score, plus advisory keyword hints.

pub mod handlers;
pub mod keywords;
pub mod rules;
pub mod scoring;

pub use rules::{validate_resume, ValidationReport};
pub use scoring::ScoreCategory;
