use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub school: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

/// The canonical in-memory resume.
///
/// `id` is assigned on first save and never regenerated afterwards;
/// `last_saved` is restamped on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default = "default_education")]
    pub education: Vec<EducationEntry>,
    #[serde(default = "default_experience")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default = "default_skills", deserialize_with = "lenient_strings")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            education: default_education(),
            experience: default_experience(),
            skills: default_skills(),
            id: None,
            last_saved: None,
        }
    }
}

fn default_education() -> Vec<EducationEntry> {
    vec![EducationEntry::default()]
}

fn default_experience() -> Vec<ExperienceEntry> {
    vec![ExperienceEntry::default()]
}

fn default_skills() -> Vec<String> {
    vec![String::new()]
}

// ────────────────────────────────────────────────────────────────────────────
// Filled predicate
// ────────────────────────────────────────────────────────────────────────────

/// An entry counts as filled when at least one of its fields is non-blank after trimming.
/// Validation, scoring and rendering all go through this one predicate.
pub trait Filled {
    fn is_filled(&self) -> bool;
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Filled for EducationEntry {
    fn is_filled(&self) -> bool {
        [&self.school, &self.degree, &self.year]
            .iter()
            .any(|f| !is_blank(f))
    }
}

impl Filled for ExperienceEntry {
    fn is_filled(&self) -> bool {
        [
            &self.company,
            &self.position,
            &self.duration,
            &self.description,
        ]
        .iter()
        .any(|f| !is_blank(f))
    }
}

impl Filled for String {
    fn is_filled(&self) -> bool {
        !is_blank(self)
    }
}

/// Yields filled items paired with their 1-based position among *all* items.
pub fn filled_with_position<T: Filled>(items: &[T]) -> impl Iterator<Item = (usize, &T)> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_filled())
        .map(|(i, item)| (i + 1, item))
}

pub fn count_filled<T: Filled>(items: &[T]) -> usize {
    items.iter().filter(|item| item.is_filled()).count()
}

// ────────────────────────────────────────────────────────────────────────────
// Boundary mapping
// ────────────────────────────────────────────────────────────────────────────

impl ResumeData {
    /// Maps loosely-structured JSON onto a resume.
    ///
    /// Each section is mapped on its own: a section that is absent or has the
    /// wrong shape falls back to its default instead of failing the whole value.
    /// A non-object input yields the all-blank resume.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let skills = take_section::<LenientStrings>(&mut map, "skills")
            .map(|s| s.0)
            .unwrap_or_else(default_skills);

        Self {
            personal_info: take_section(&mut map, "personalInfo").unwrap_or_default(),
            education: take_section(&mut map, "education").unwrap_or_else(default_education),
            experience: take_section(&mut map, "experience").unwrap_or_else(default_experience),
            skills,
            id: map
                .remove("id")
                .and_then(|v| v.as_str().map(str::to_string)),
            last_saved: take_section(&mut map, "lastSaved"),
        }
    }

    /// Whether the resume holds enough input to be worth auto-saving:
    /// a name, or any section grown past its initial single blank row.
    pub fn has_meaningful_content(&self) -> bool {
        !self.personal_info.name.is_empty()
            || self.education.len() > 1
            || self.experience.len() > 1
            || self.skills.len() > 1
    }
}

fn take_section<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<T> {
    map.remove(key).and_then(|v| serde_json::from_value(v).ok())
}

#[derive(Deserialize)]
struct LenientStrings(#[serde(deserialize_with = "lenient_strings")] Vec<String>);

/// Accepts a string, `null`, or a scalar (e.g. a numeric year) where text is expected.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Value>::deserialize(deserializer)?;
    Ok(items.into_iter().map(scalar_to_string).collect())
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_has_one_blank_row_per_section() {
        let resume = ResumeData::default();
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.skills, vec![String::new()]);
        assert!(resume.id.is_none());
        assert!(!resume.has_meaningful_content());
    }

    #[test]
    fn test_whitespace_only_entry_is_not_filled() {
        let entry = EducationEntry {
            school: "   ".to_string(),
            degree: "\t".to_string(),
            year: String::new(),
        };
        assert!(!entry.is_filled());
    }

    #[test]
    fn test_single_field_makes_entry_filled() {
        let entry = ExperienceEntry {
            duration: "2019-2021".to_string(),
            ..Default::default()
        };
        assert!(entry.is_filled());
    }

    #[test]
    fn test_filled_positions_are_not_renumbered() {
        let skills = vec![
            String::new(),
            "Rust".to_string(),
            " ".to_string(),
            "SQL".to_string(),
        ];
        let positions: Vec<usize> = filled_with_position(&skills).map(|(n, _)| n).collect();
        assert_eq!(positions, vec![2, 4]);
        assert_eq!(count_filled(&skills), 2);
    }

    #[test]
    fn test_serializes_camel_case_and_omits_absent_metadata() {
        let value = serde_json::to_value(ResumeData::default()).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert!(value.get("id").is_none());
        assert!(value.get("lastSaved").is_none());
    }

    #[test]
    fn test_missing_sections_deserialize_to_defaults() {
        let resume: ResumeData =
            serde_json::from_str(r#"{"personalInfo": {"name": "Ada"}}"#).unwrap();
        assert_eq!(resume.personal_info.name, "Ada");
        assert_eq!(resume.personal_info.email, "");
        assert_eq!(resume.education, vec![EducationEntry::default()]);
        assert_eq!(resume.skills, vec![String::new()]);
    }

    #[test]
    fn test_null_and_numeric_fields_are_tolerated() {
        let resume: ResumeData = serde_json::from_str(
            r#"{"education": [{"school": null, "degree": "BSc", "year": 2020}], "skills": ["Go", null]}"#,
        )
        .unwrap();
        assert_eq!(resume.education[0].school, "");
        assert_eq!(resume.education[0].year, "2020");
        assert_eq!(resume.skills, vec!["Go".to_string(), String::new()]);
    }

    #[test]
    fn test_from_value_default_fills_bad_sections_independently() {
        let resume = ResumeData::from_value(json!({
            "personalInfo": {"name": "Grace", "email": "grace@navy.mil"},
            "education": "not a list",
            "skills": ["COBOL"],
            "id": "resume_1_abc",
        }));
        assert_eq!(resume.personal_info.name, "Grace");
        assert_eq!(resume.education, vec![EducationEntry::default()]);
        assert_eq!(resume.experience, vec![ExperienceEntry::default()]);
        assert_eq!(resume.skills, vec!["COBOL".to_string()]);
        assert_eq!(resume.id.as_deref(), Some("resume_1_abc"));
        assert!(resume.last_saved.is_none());
    }

    #[test]
    fn test_from_value_keeps_present_empty_sections() {
        let resume = ResumeData::from_value(json!({ "education": [], "skills": [] }));
        assert!(resume.education.is_empty());
        assert!(resume.skills.is_empty());
    }

    #[test]
    fn test_from_value_non_object_is_blank_resume() {
        assert_eq!(ResumeData::from_value(json!([1, 2])), ResumeData::default());
    }

    #[test]
    fn test_meaningful_content_after_adding_rows() {
        let mut resume = ResumeData::default();
        resume.skills.push(String::new());
        assert!(resume.has_meaningful_content());
    }
}
