//! Content registration (simulated).

use chrono::Utc;
use shared::dto::content::{ContentBody, ContentSubmission, RegistrationReceipt};

use super::{check_file_size, SIMULATED_DELAY};
use crate::error::ContentError;
use crate::notify::Notification;
use crate::timer::Sleeper;

/// Check a submission in the order the form reports problems: title first,
/// then the body.
pub fn validate_submission(submission: &ContentSubmission) -> Result<(), ContentError> {
    if submission.title.trim().is_empty() {
        return Err(ContentError::TitleRequired);
    }

    match &submission.body {
        ContentBody::Text(text) if text.trim().is_empty() => Err(ContentError::TextRequired),
        ContentBody::Text(_) => Ok(()),
        ContentBody::File { name, .. } if name.trim().is_empty() => Err(ContentError::FileRequired),
        ContentBody::File { size_bytes, .. } => check_file_size(*size_bytes),
    }
}

/// Validate, wait out the simulated round-trip, hand back a receipt.
pub async fn register(
    submission: ContentSubmission,
    sleeper: &dyn Sleeper,
) -> Result<RegistrationReceipt, ContentError> {
    validate_submission(&submission)?;

    tracing::info!(title = %submission.title, kind = ?submission.body.kind(), "registering content");
    sleeper.sleep(SIMULATED_DELAY).await;

    let message = match &submission.body {
        ContentBody::Text(_) => "Your text content has been registered on the blockchain.".to_string(),
        ContentBody::File { name, .. } => {
            format!("Your file \"{}\" has been registered on the blockchain.", name)
        }
    };

    Ok(RegistrationReceipt {
        title: submission.title,
        message,
        registered_at: Utc::now(),
    })
}

pub fn registration_notice(receipt: &RegistrationReceipt) -> Notification {
    Notification::success("Content Registered Successfully", receipt.message.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Immediate;

    #[test]
    fn test_title_checked_before_body() {
        let submission = ContentSubmission::text("  ", "");
        assert_eq!(validate_submission(&submission), Err(ContentError::TitleRequired));
    }

    #[test]
    fn test_body_checks() {
        assert_eq!(
            validate_submission(&ContentSubmission::text("Essay", " \n")),
            Err(ContentError::TextRequired)
        );
        assert_eq!(
            validate_submission(&ContentSubmission::file("Photo", "", 0)),
            Err(ContentError::FileRequired)
        );
        assert!(matches!(
            validate_submission(&ContentSubmission::file("Photo", "big.mov", 51 * 1024 * 1024)),
            Err(ContentError::FileTooLarge { .. })
        ));
        assert!(validate_submission(&ContentSubmission::file("Photo", "cat.png", 1024)).is_ok());
    }

    #[tokio::test]
    async fn test_register_file() {
        let receipt = register(ContentSubmission::file("Photo", "cat.png", 1024), &Immediate)
            .await
            .unwrap();
        assert_eq!(receipt.title, "Photo");
        assert_eq!(receipt.message, "Your file \"cat.png\" has been registered on the blockchain.");
        assert_eq!(registration_notice(&receipt).title, "Content Registered Successfully");
    }

    #[tokio::test]
    async fn test_register_rejects_invalid() {
        let err = register(ContentSubmission::text("", "body"), &Immediate)
            .await
            .unwrap_err();
        assert_eq!(err, ContentError::TitleRequired);
    }
}
