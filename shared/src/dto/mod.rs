//! # Data Transfer Objects (DTOs)
//!
//! Data structures passed between the content workflows in `lib-core` and the
//! pages that render them.
//!
//! ## Module Organization
//!
//! - [`content`] - Content submissions, registration receipts, verification results
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Externally tagged with `#[serde(rename_all = "snake_case")]`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "verified": true,
//!   "owner": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
//!   "timestamp": "2024-01-01T00:00:00Z",
//!   "similarity": 98
//! }
//! ```

pub mod content;

pub use content::*;
