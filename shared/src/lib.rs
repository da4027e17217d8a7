//! # Shared Types Library
//!
//! Types and helpers used by both the platform-neutral core (`lib-core`) and the
//! browser front-end (`guardian-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::content`]**: Content submission, registration receipt and verification result
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::shorten_address`]**: `0x1234...abcd` style shortening
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using `serde`:
//! - Field names stay **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - Timestamps are RFC 3339 strings (`chrono` with the `serde` feature)
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::content::{ContentBody, ContentSubmission};
//! use shared::utils::shorten_address;
//!
//! let submission = ContentSubmission::text("My essay", "Once upon a time");
//! assert!(matches!(submission.body, ContentBody::Text(_)));
//!
//! let display = shorten_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F");
//! assert_eq!(display, "0x71C7...976F");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: everything in this crate is public API
pub use dto::*;
pub use utils::*;
