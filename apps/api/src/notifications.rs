use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_MS: u64 = 3000;
pub const LONG_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Warning,
}

/// A transient message for the UI to show as a toast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u64,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            severity,
            duration_ms,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, DEFAULT_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_wire_shape() {
        let value = serde_json::to_value(Notice::success("Template saved successfully!")).unwrap();
        assert_eq!(value["severity"], "success");
        assert_eq!(value["duration_ms"], 3000);
        assert_eq!(value["message"], "Template saved successfully!");
    }
}
