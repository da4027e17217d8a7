use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the user hands in on the register/verify forms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentBody {
    /// Pasted text
    Text(String),
    /// Picked file; only metadata, the bytes never leave the browser
    File { name: String, size_bytes: u64 },
}

impl ContentBody {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentBody::Text(_) => ContentKind::Text,
            ContentBody::File { .. } => ContentKind::File,
        }
    }
}

/// Text or file, used to pick similarity figures and messages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    File,
}

/// Registration form submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentSubmission {
    pub title: String,
    pub body: ContentBody,
}

impl ContentSubmission {
    pub fn text(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: ContentBody::Text(text.into()),
        }
    }

    pub fn file(title: impl Into<String>, name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            title: title.into(),
            body: ContentBody::File {
                name: name.into(),
                size_bytes,
            },
        }
    }
}

/// Verification form query. `None` means the file picker is still empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationQuery {
    Text(String),
    File(Option<ContentBody>),
}

/// Result of a (simulated) registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub title: String,
    pub message: String,
    pub registered_at: DateTime<Utc>,
}

/// Result of a (simulated) verification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationResult {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Percentage, 0..=100
    pub similarity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unverified_result_omits_owner() {
        let result = VerificationResult {
            verified: false,
            owner: None,
            timestamp: None,
            similarity: 45,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "verified": false, "similarity": 45 }));
    }

    #[test]
    fn test_body_kind() {
        assert_eq!(ContentSubmission::text("t", "x").body.kind(), ContentKind::Text);
        assert_eq!(ContentSubmission::file("t", "a.png", 10).body.kind(), ContentKind::File);
    }
}
