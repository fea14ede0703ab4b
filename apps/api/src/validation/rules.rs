use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{count_filled, filled_with_position, is_blank};
use crate::models::{PersonalInfo, ResumeData};
use crate::validation::scoring::{calculate_score, ScoreCategory};

/// Descriptions shorter than this (in characters) get an "add more detail" suggestion.
pub const MIN_DESCRIPTION_CHARS: usize = 50;

/// Below this many filled skills the report suggests adding more.
pub const RECOMMENDED_MIN_SKILLS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub is_valid: bool,
    pub score: u32,
}

impl ValidationReport {
    pub fn category(&self) -> ScoreCategory {
        ScoreCategory::from_score(self.score)
    }
}

/// Collects findings while the rule groups run. Every group runs; none short-circuits.
#[derive(Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

/// Validates a resume snapshot. Pure and deterministic: findings are data, never failures.
pub fn validate_resume(resume: &ResumeData) -> ValidationReport {
    let mut findings = Findings::default();

    check_personal_info(&resume.personal_info, &mut findings);
    check_education(resume, &mut findings);
    check_experience(resume, &mut findings);
    check_skills(&resume.skills, &mut findings);

    if !is_blank(&resume.personal_info.name) {
        findings.suggestions.push(
            "Consider including relevant keywords from the job description in your experience descriptions"
                .to_string(),
        );
    }

    ValidationReport {
        is_valid: findings.errors.is_empty(),
        errors: findings.errors,
        warnings: findings.warnings,
        suggestions: findings.suggestions,
        score: calculate_score(resume),
    }
}

fn check_personal_info(info: &PersonalInfo, findings: &mut Findings) {
    if is_blank(&info.name) {
        findings.errors.push("Full name is required".to_string());
    }

    if is_blank(&info.email) {
        findings.errors.push("Email address is required".to_string());
    } else if !is_valid_email(&info.email) {
        findings
            .errors
            .push("Please enter a valid email address".to_string());
    }

    if is_blank(&info.phone) {
        findings
            .warnings
            .push("Phone number is recommended for better contact options".to_string());
    }
}

fn check_education(resume: &ResumeData, findings: &mut Findings) {
    if count_filled(&resume.education) == 0 {
        findings
            .errors
            .push("At least one education entry is required".to_string());
        return;
    }

    for (n, edu) in filled_with_position(&resume.education) {
        if is_blank(&edu.degree) {
            findings
                .warnings
                .push(format!("Education {n}: Degree/title is recommended"));
        }
        if is_blank(&edu.school) {
            findings
                .warnings
                .push(format!("Education {n}: School/institution name is recommended"));
        }
        if is_blank(&edu.year) {
            findings
                .suggestions
                .push(format!("Education {n}: Add graduation year for better context"));
        }
    }
}

fn check_experience(resume: &ResumeData, findings: &mut Findings) {
    if count_filled(&resume.experience) == 0 {
        findings
            .warnings
            .push("Work experience is highly recommended for most positions".to_string());
        return;
    }

    for (n, exp) in filled_with_position(&resume.experience) {
        // Worded as "required" but kept at warning severity: experience is optional overall.
        if is_blank(&exp.position) {
            findings
                .warnings
                .push(format!("Experience {n}: Job title/position is required"));
        }
        if is_blank(&exp.company) {
            findings
                .warnings
                .push(format!("Experience {n}: Company name is recommended"));
        }
        if is_blank(&exp.duration) {
            findings
                .suggestions
                .push(format!("Experience {n}: Add employment duration"));
        }
        if is_blank(&exp.description) {
            findings
                .suggestions
                .push(format!("Experience {n}: Add job description and achievements"));
        } else if exp.description.chars().count() < MIN_DESCRIPTION_CHARS {
            findings.suggestions.push(format!(
                "Experience {n}: Consider adding more details about your responsibilities and achievements"
            ));
        }
    }
}

fn check_skills(skills: &[String], findings: &mut Findings) {
    let filled = count_filled(skills);
    if filled == 0 {
        findings
            .warnings
            .push("Skills section helps showcase your abilities".to_string());
    } else if filled < RECOMMENDED_MIN_SKILLS {
        findings
            .suggestions
            .push("Consider adding more skills (5-10 is typically good)".to_string());
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// `local@domain.tld` shape check: no whitespace or extra `@` on either side,
/// and at least one `.` after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}
