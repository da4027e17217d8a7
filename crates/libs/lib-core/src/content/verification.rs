//! Content verification (simulated).
//!
//! The outcome is a coin flip supplied by the host: `roll > 0.5` verifies.

use chrono::{DateTime, Utc};
use shared::dto::content::{ContentBody, ContentKind, VerificationQuery, VerificationResult};

use super::{check_file_size, DEMO_OWNER, SIMULATED_DELAY};
use crate::error::ContentError;
use crate::notify::{Notification, Severity};
use crate::timer::Sleeper;

/// Check a query and report what kind of content it is.
pub fn validate_query(query: &VerificationQuery) -> Result<ContentKind, ContentError> {
    match query {
        VerificationQuery::Text(text) if text.trim().is_empty() => Err(ContentError::TextRequired),
        VerificationQuery::Text(_) => Ok(ContentKind::Text),
        VerificationQuery::File(None) => Err(ContentError::FileRequired),
        VerificationQuery::File(Some(ContentBody::File { size_bytes, .. })) => {
            check_file_size(*size_bytes)?;
            Ok(ContentKind::File)
        }
        // A text body in the file slot still counts as "no file picked"
        VerificationQuery::File(Some(ContentBody::Text(_))) => Err(ContentError::FileRequired),
    }
}

/// Build the result for a given roll in `[0, 1)`.
pub fn simulate_verification(kind: ContentKind, roll: f64, now: DateTime<Utc>) -> VerificationResult {
    let verified = roll > 0.5;
    let similarity = match (kind, verified) {
        (ContentKind::Text, true) => 98,
        (ContentKind::Text, false) => 45,
        (ContentKind::File, true) => 95,
        (ContentKind::File, false) => 32,
    };

    VerificationResult {
        verified,
        owner: verified.then(|| DEMO_OWNER.to_string()),
        timestamp: verified.then_some(now),
        similarity,
    }
}

/// Validate, wait out the simulated round-trip, roll the outcome.
pub async fn verify(
    query: &VerificationQuery,
    roll: f64,
    sleeper: &dyn Sleeper,
) -> Result<VerificationResult, ContentError> {
    let kind = validate_query(query)?;

    tracing::info!(?kind, "verifying content");
    sleeper.sleep(SIMULATED_DELAY).await;

    Ok(simulate_verification(kind, roll, Utc::now()))
}

pub fn verification_notice(query: &VerificationQuery, result: &VerificationResult) -> Notification {
    let file_name = match query {
        VerificationQuery::File(Some(ContentBody::File { name, .. })) => Some(name.as_str()),
        _ => None,
    };

    let (title, message, severity) = match (result.verified, file_name) {
        (true, Some(name)) => (
            "Content Verified",
            format!("This file \"{}\" has been registered on the blockchain.", name),
            Severity::Success,
        ),
        (true, None) => (
            "Content Verified",
            "This content has been registered on the blockchain.".to_string(),
            Severity::Success,
        ),
        (false, Some(_)) => (
            "Content Not Verified",
            "No matching file found on the blockchain.".to_string(),
            Severity::Destructive,
        ),
        (false, None) => (
            "Content Not Verified",
            "No exact match found on the blockchain.".to_string(),
            Severity::Destructive,
        ),
    };

    Notification::new(title, message, severity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Immediate;

    fn file_query(name: &str) -> VerificationQuery {
        VerificationQuery::File(Some(ContentBody::File {
            name: name.to_string(),
            size_bytes: 2048,
        }))
    }

    #[test]
    fn test_validation() {
        assert_eq!(validate_query(&VerificationQuery::Text("  ".into())), Err(ContentError::TextRequired));
        assert_eq!(validate_query(&VerificationQuery::File(None)), Err(ContentError::FileRequired));
        assert_eq!(validate_query(&file_query("a.pdf")), Ok(ContentKind::File));
    }

    #[test]
    fn test_similarity_constants() {
        let now = Utc::now();
        assert_eq!(simulate_verification(ContentKind::Text, 0.9, now).similarity, 98);
        assert_eq!(simulate_verification(ContentKind::Text, 0.1, now).similarity, 45);
        assert_eq!(simulate_verification(ContentKind::File, 0.9, now).similarity, 95);
        assert_eq!(simulate_verification(ContentKind::File, 0.1, now).similarity, 32);
    }

    #[test]
    fn test_threshold_is_strict() {
        let result = simulate_verification(ContentKind::Text, 0.5, Utc::now());
        assert!(!result.verified);
        assert_eq!(result.owner, None);
        assert_eq!(result.timestamp, None);
    }

    #[tokio::test]
    async fn test_verified_file_notice() {
        let query = file_query("deck.pdf");
        let result = verify(&query, 0.75, &Immediate).await.unwrap();

        assert!(result.verified);
        assert_eq!(result.owner.as_deref(), Some(DEMO_OWNER));
        assert!(result.timestamp.is_some());

        let notice = verification_notice(&query, &result);
        assert_eq!(notice.title, "Content Verified");
        assert_eq!(notice.message, "This file \"deck.pdf\" has been registered on the blockchain.");
        assert_eq!(notice.severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_unverified_text_notice() {
        let query = VerificationQuery::Text("some paragraph".into());
        let result = verify(&query, 0.2, &Immediate).await.unwrap();

        let notice = verification_notice(&query, &result);
        assert_eq!(notice.title, "Content Not Verified");
        assert_eq!(notice.message, "No exact match found on the blockchain.");
        assert_eq!(notice.severity, Severity::Destructive);
    }
}
