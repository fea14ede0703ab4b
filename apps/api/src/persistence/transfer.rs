//! JSON export/import of a single resume snapshot.

use serde_json::Value;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::models::ResumeData;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Failed to read file")]
    Read(#[from] std::io::Error),

    #[error("Invalid JSON file")]
    InvalidJson,

    #[error("Failed to serialize resume: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A ready-to-download JSON export.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonExport {
    pub filename: String,
    pub contents: String,
}

/// Serializes exactly the resume being viewed, metadata included, with 2-space indentation.
pub fn export_as_json(resume: &ResumeData) -> Result<JsonExport, TransferError> {
    Ok(JsonExport {
        filename: export_filename(&resume.personal_info.name),
        contents: serde_json::to_string_pretty(resume)?,
    })
}

/// `<sanitized name>_data.json`, or `Resume_data.json` for a blank name.
pub fn export_filename(name: &str) -> String {
    format!("{}_data.json", sanitize_file_stem(name))
}

/// Makes a person's name safe to use as a file name stem. Blank names become `Resume`.
pub fn sanitize_file_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.trim_matches(|c| c == '_' || c == '.').is_empty() {
        "Resume".to_string()
    } else {
        cleaned
    }
}

/// Reads UTF-8 JSON text and maps it onto a resume.
///
/// Only the parse is enforced: the top level must be a JSON object, and sections
/// that are missing or malformed are default-filled rather than rejected.
pub async fn import_from_json<R>(mut reader: R) -> Result<ResumeData, TransferError>
where
    R: AsyncRead + Unpin,
{
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;
    parse_resume_json(&text)
}

pub fn parse_resume_json(text: &str) -> Result<ResumeData, TransferError> {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => Ok(ResumeData::from_value(value)),
        _ => Err(TransferError::InvalidJson),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry};

    fn sample() -> ResumeData {
        let mut resume = ResumeData::default();
        resume.personal_info.name = "Ada Lovelace".to_string();
        resume.personal_info.email = "ada@example.com".to_string();
        resume.education = vec![EducationEntry {
            school: "University of London".to_string(),
            degree: "Mathematics".to_string(),
            year: "1843".to_string(),
        }];
        resume.experience.push(ExperienceEntry {
            company: "Analytical Engine Project".to_string(),
            ..Default::default()
        });
        resume.skills = vec!["Analysis".to_string(), String::new()];
        resume
    }

    #[test]
    fn test_export_is_two_space_pretty_json() {
        let export = export_as_json(&sample()).unwrap();
        assert_eq!(export.filename, "Ada Lovelace_data.json");
        assert!(export.contents.starts_with("{\n  \"personalInfo\": {\n    \"name\""));
    }

    #[test]
    fn test_export_includes_existing_metadata() {
        let mut resume = sample();
        resume.id = Some("resume_1_abcdef123".to_string());
        resume.last_saved = Some(Utc::now());
        let export = export_as_json(&resume).unwrap();
        assert!(export.contents.contains("\"id\": \"resume_1_abcdef123\""));
        assert!(export.contents.contains("\"lastSaved\""));
    }

    #[test]
    fn test_filename_fallback_and_sanitizing() {
        assert_eq!(export_filename(""), "Resume_data.json");
        assert_eq!(export_filename("   "), "Resume_data.json");
        assert_eq!(export_filename("../.."), "Resume_data.json");
        assert_eq!(export_filename("A/B: \"C\""), "A_B_ _C__data.json");
    }

    #[tokio::test]
    async fn test_export_then_import_round_trips() {
        let mut original = sample();
        original.id = Some("resume_1_abcdef123".to_string());
        original.last_saved = Some(Utc::now());
        let export = export_as_json(&original).unwrap();

        let imported = import_from_json(export.contents.as_bytes()).await.unwrap();
        assert_eq!(imported, original);
    }

    #[tokio::test]
    async fn test_import_rejects_unparseable_text() {
        let err = import_from_json("{\"personalInfo\":".as_bytes())
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::InvalidJson));
        assert_eq!(err.to_string(), "Invalid JSON file");
    }

    #[tokio::test]
    async fn test_import_rejects_non_object_top_level() {
        for text in ["[1, 2, 3]", "\"resume\"", "42", "null"] {
            assert!(matches!(
                import_from_json(text.as_bytes()).await,
                Err(TransferError::InvalidJson)
            ));
        }
    }

    #[tokio::test]
    async fn test_import_invalid_utf8_is_a_read_failure() {
        let bytes: &[u8] = &[0x7b, 0xff, 0xfe, 0x7d];
        let err = import_from_json(bytes).await.unwrap_err();
        assert!(matches!(err, TransferError::Read(_)));
        assert_eq!(err.to_string(), "Failed to read file");
    }

    #[tokio::test]
    async fn test_import_default_fills_missing_sections() {
        let imported = import_from_json(r#"{"personalInfo": {"name": "Grace"}}"#.as_bytes())
            .await
            .unwrap();
        assert_eq!(imported.personal_info.name, "Grace");
        assert_eq!(imported.education, vec![EducationEntry::default()]);
        assert_eq!(imported.experience, vec![ExperienceEntry::default()]);
        assert_eq!(imported.skills, vec![String::new()]);
    }
}
