//! Field-level update operations — the only sanctioned way to mutate a working resume.
//!
//! Each operation touches exactly one field, entry or skill and is all-or-nothing:
//! an out-of-range index returns an error and leaves the resume as it was.

pub mod handlers;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{EducationEntry, ExperienceEntry, ResumeData};

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("{section} entry {index} does not exist ({len} entries)")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    School,
    Degree,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

impl EducationEntry {
    fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::School => &mut self.school,
            EducationField::Degree => &mut self.degree,
            EducationField::Year => &mut self.year,
        }
    }
}

impl ExperienceEntry {
    fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Position => &mut self.position,
            ExperienceField::Duration => &mut self.duration,
            ExperienceField::Description => &mut self.description,
        }
    }
}

fn entry_mut<'a, T>(
    items: &'a mut [T],
    section: &'static str,
    index: usize,
) -> Result<&'a mut T, EditError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange {
            section,
            index,
            len,
        })
}

fn remove_at<T>(items: &mut Vec<T>, section: &'static str, index: usize) -> Result<(), EditError> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            section,
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    Ok(())
}

impl ResumeData {
    pub fn update_personal_info(&mut self, field: PersonalField, value: impl Into<String>) {
        let info = &mut self.personal_info;
        let target = match field {
            PersonalField::Name => &mut info.name,
            PersonalField::Email => &mut info.email,
            PersonalField::Phone => &mut info.phone,
            PersonalField::Address => &mut info.address,
        };
        *target = value.into();
    }

    pub fn update_education(
        &mut self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        *entry_mut(&mut self.education, "education", index)?.field_mut(field) = value.into();
        Ok(())
    }

    pub fn add_education(&mut self) {
        self.education.push(EducationEntry::default());
    }

    pub fn remove_education(&mut self, index: usize) -> Result<(), EditError> {
        remove_at(&mut self.education, "education", index)
    }

    pub fn update_experience(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        *entry_mut(&mut self.experience, "experience", index)?.field_mut(field) = value.into();
        Ok(())
    }

    pub fn add_experience(&mut self) {
        self.experience.push(ExperienceEntry::default());
    }

    pub fn remove_experience(&mut self, index: usize) -> Result<(), EditError> {
        remove_at(&mut self.experience, "experience", index)
    }

    pub fn update_skill(&mut self, index: usize, value: impl Into<String>) -> Result<(), EditError> {
        *entry_mut(&mut self.skills, "skills", index)? = value.into();
        Ok(())
    }

    pub fn add_skill(&mut self) {
        self.skills.push(String::new());
    }

    pub fn remove_skill(&mut self, index: usize) -> Result<(), EditError> {
        remove_at(&mut self.skills, "skills", index)
    }

    /// Wholesale replacement, reserved for loading a saved resume, a template, or an import.
    pub fn replace_with(&mut self, other: ResumeData) {
        *self = other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_personal_info_sets_one_field() {
        let mut resume = ResumeData::default();
        resume.update_personal_info(PersonalField::Email, "ada@example.com");
        assert_eq!(resume.personal_info.email, "ada@example.com");
        assert_eq!(resume.personal_info.name, "");
    }

    #[test]
    fn test_update_education_by_index() {
        let mut resume = ResumeData::default();
        resume.add_education();
        resume
            .update_education(1, EducationField::Degree, "BSc Mathematics")
            .unwrap();
        assert_eq!(resume.education[0].degree, "");
        assert_eq!(resume.education[1].degree, "BSc Mathematics");
    }

    #[test]
    fn test_out_of_range_update_leaves_resume_untouched() {
        let mut resume = ResumeData::default();
        let before = resume.clone();
        let err = resume
            .update_experience(3, ExperienceField::Company, "Acme")
            .unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                section: "experience",
                index: 3,
                len: 1
            }
        );
        assert_eq!(resume, before);
    }

    #[test]
    fn test_remove_experience_shifts_later_entries() {
        let mut resume = ResumeData::default();
        resume.add_experience();
        resume
            .update_experience(1, ExperienceField::Company, "Acme")
            .unwrap();
        resume.remove_experience(0).unwrap();
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].company, "Acme");
    }

    #[test]
    fn test_remove_can_empty_a_section() {
        let mut resume = ResumeData::default();
        resume.remove_education(0).unwrap();
        assert!(resume.education.is_empty());
        assert!(resume.remove_education(0).is_err());
    }

    #[test]
    fn test_skill_add_update_remove() {
        let mut resume = ResumeData::default();
        resume.update_skill(0, "Rust").unwrap();
        resume.add_skill();
        resume.update_skill(1, "Go").unwrap();
        resume.remove_skill(0).unwrap();
        assert_eq!(resume.skills, vec!["Go".to_string()]);
        assert!(resume.update_skill(5, "Zig").is_err());
    }

    #[test]
    fn test_field_names_deserialize_from_json_keys() {
        let field: ExperienceField = serde_json::from_str(r#""position""#).unwrap();
        assert_eq!(field, ExperienceField::Position);
        assert!(serde_json::from_str::<EducationField>(r#""gpa""#).is_err());
    }

    #[test]
    fn test_replace_with_swaps_whole_resume() {
        let mut resume = ResumeData::default();
        let mut other = ResumeData::default();
        other.personal_info.name = "Grace Hopper".to_string();
        other.id = Some("resume_1_x".to_string());
        resume.replace_with(other.clone());
        assert_eq!(resume, other);
    }
}
