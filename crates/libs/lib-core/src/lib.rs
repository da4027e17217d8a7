//! # Core Library
//!
//! Platform-neutral core of Content Guardian: configuration, error types, the
//! wallet connection manager and the simulated content workflows.
//!
//! Nothing in here touches the browser. The front-end plugs its JavaScript
//! adapters into the traits in [`wallet::backend`], [`wallet::storage`],
//! [`notify`] and [`timer`].

pub mod config;
pub mod content;
pub mod error;
pub mod notify;
pub mod timer;
pub mod wallet;

// Re-export commonly used types
pub use config::WalletConfig;
pub use error::{ContentError, Result, WalletError};
pub use notify::{Notification, NotificationSink, Severity};
pub use wallet::{ConnectionSnapshot, ConnectorKind, WalletManager};
