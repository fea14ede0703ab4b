//! Advisory keyword hints drawn from a fixed reference list.

/// Reference terms, in display order.
pub const REFERENCE_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "problem-solving",
    "teamwork",
    "project management",
    "customer service",
    "sales",
    "marketing",
    "data analysis",
    "programming",
    "javascript",
    "python",
    "react",
    "node.js",
    "sql",
    "agile",
    "scrum",
    "microsoft office",
    "excel",
    "powerpoint",
    "word",
    "google workspace",
];

const DEFAULT_SUGGESTION_COUNT: usize = 10;

/// Returns the reference keywords that occur (case-insensitive substring) in the job
/// description, or the first ten reference keywords when nothing matches.
pub fn keyword_suggestions(job_description: Option<&str>) -> Vec<&'static str> {
    let defaults = || REFERENCE_KEYWORDS[..DEFAULT_SUGGESTION_COUNT].to_vec();

    let Some(description) = job_description.filter(|d| !d.is_empty()) else {
        return defaults();
    };

    let description = description.to_lowercase();
    let matched: Vec<&'static str> = REFERENCE_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| description.contains(&keyword.to_lowercase()))
        .collect();

    if matched.is_empty() {
        defaults()
    } else {
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_description_returns_first_ten() {
        let keywords = keyword_suggestions(None);
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords[0], "leadership");
        assert_eq!(keywords[9], "programming");
        assert_eq!(keyword_suggestions(Some("")), keywords);
    }

    #[test]
    fn test_matches_are_case_insensitive_and_in_reference_order() {
        let keywords =
            keyword_suggestions(Some("Senior Python engineer. SQL, Agile teams, strong Leadership."));
        assert_eq!(keywords, vec!["leadership", "python", "sql", "agile"]);
    }

    #[test]
    fn test_substring_matching() {
        // "word" occurs inside "wordpress"
        let keywords = keyword_suggestions(Some("WordPress developer"));
        assert_eq!(keywords, vec!["word"]);
    }

    #[test]
    fn test_no_match_falls_back_to_defaults() {
        let keywords = keyword_suggestions(Some("Underwater basket weaving"));
        assert_eq!(keywords, REFERENCE_KEYWORDS[..10].to_vec());
    }
}
