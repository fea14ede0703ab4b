use serde::{Deserialize, Serialize};

use crate::models::resume::{count_filled, is_blank};
use crate::models::{PersonalInfo, ResumeData};
use crate::validation::rules::is_valid_email;

/// Per-section caps. Each bucket is capped on its own before the sum is capped at 100.
pub const PERSONAL_INFO_MAX: u32 = 25;
pub const EDUCATION_MAX: u32 = 25;
pub const EXPERIENCE_MAX: u32 = 30;
pub const SKILLS_MAX: u32 = 20;
pub const SCORE_MAX: u32 = 100;

const POINTS_PER_EDUCATION: u32 = 8;
const POINTS_PER_EXPERIENCE: u32 = 10;
const POINTS_PER_SKILL: u32 = 4;

/// Computes the 0–100 completeness score.
///
/// - personal info: name +10, well-formed email +10, phone +5
/// - education: 8 per filled entry, up to 25
/// - experience: 10 per filled entry, up to 30
/// - skills: 4 per filled skill, up to 20
pub fn calculate_score(resume: &ResumeData) -> u32 {
    let total = personal_info_points(&resume.personal_info)
        + bucket_points(
            count_filled(&resume.education),
            POINTS_PER_EDUCATION,
            EDUCATION_MAX,
        )
        + bucket_points(
            count_filled(&resume.experience),
            POINTS_PER_EXPERIENCE,
            EXPERIENCE_MAX,
        )
        + bucket_points(count_filled(&resume.skills), POINTS_PER_SKILL, SKILLS_MAX);
    total.min(SCORE_MAX)
}

fn personal_info_points(info: &PersonalInfo) -> u32 {
    let mut points = 0;
    if !is_blank(&info.name) {
        points += 10;
    }
    if !is_blank(&info.email) && is_valid_email(&info.email) {
        points += 10;
    }
    if !is_blank(&info.phone) {
        points += 5;
    }
    points.min(PERSONAL_INFO_MAX)
}

fn bucket_points(filled: usize, per_entry: u32, cap: u32) -> u32 {
    u32::try_from(filled)
        .unwrap_or(u32::MAX)
        .saturating_mul(per_entry)
        .min(cap)
}

/// Display bucket for a score. Thresholds are inclusive lower bounds, checked top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Incomplete,
}

impl ScoreCategory {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ScoreCategory::Excellent,
            s if s >= 75 => ScoreCategory::Good,
            s if s >= 60 => ScoreCategory::Fair,
            s if s >= 40 => ScoreCategory::NeedsImprovement,
            _ => ScoreCategory::Incomplete,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "Excellent",
            ScoreCategory::Good => "Good",
            ScoreCategory::Fair => "Fair",
            ScoreCategory::NeedsImprovement => "Needs Improvement",
            ScoreCategory::Incomplete => "Incomplete",
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
