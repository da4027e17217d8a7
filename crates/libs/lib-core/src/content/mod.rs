//! # Simulated Content Workflows
//!
//! Registration and verification as the demo presents them: form validation,
//! a fixed delay standing in for the chain round-trip, and a random outcome
//! for verification. No hashing, storage or chain access happens here.
//!
//! The host supplies the delay ([`crate::timer::Sleeper`]) and the random
//! roll, which keeps both workflows deterministic under test.

pub mod registration;
pub mod verification;

use std::time::Duration;

use crate::error::ContentError;
use crate::notify::Notification;

pub use registration::{register, registration_notice, validate_submission};
pub use verification::{simulate_verification, validate_query, verification_notice, verify};

/// Stand-in for the chain round-trip
pub const SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Largest file the forms accept (50 MB)
pub const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Owner reported for every verified demo result
pub const DEMO_OWNER: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

/// Destructive toast for a validation failure. `action` completes
/// "Please select a file to ...".
pub fn content_error_notice(err: &ContentError, action: &str) -> Notification {
    Notification::destructive(err.to_string(), err.user_message(action))
}

fn check_file_size(size_bytes: u64) -> Result<(), ContentError> {
    if size_bytes > MAX_FILE_BYTES {
        return Err(ContentError::FileTooLarge {
            size_bytes,
            limit_bytes: MAX_FILE_BYTES,
        });
    }
    Ok(())
}
