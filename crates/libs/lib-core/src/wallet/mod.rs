//! # Wallet Connection
//!
//! Everything between "the user clicked connect" and a settled
//! [`ConnectionSnapshot`].
//!
//! ## Modules
//!
//! - **[`manager`]**: [`WalletManager`], the state machine and event router
//! - **[`backend`]**: Traits for the injected-provider and relay-session connectors
//! - **[`storage`]**: Durable keys used to reconnect on start
//! - **[`state`]**: Read-only snapshot handed to presentation code
//! - **[`subscription`]**: Detachable listener handles
//! - **[`kind`]**: [`ConnectorKind`]
//! - **[`chain`]**: Chain id parsing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_core::wallet::{ConnectorKind, WalletEnvironment, WalletManager};
//! use lib_core::WalletConfig;
//!
//! # async fn run(env: WalletEnvironment) -> lib_core::Result<()> {
//! let manager = WalletManager::new(WalletConfig::default(), env)?;
//! let _watch = manager.observe(|snapshot| println!("{:?}", snapshot.phase()));
//!
//! if !manager.restore().await {
//!     manager.connect(ConnectorKind::InjectedProvider).await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod chain;
pub mod kind;
pub mod manager;
pub mod state;
pub mod storage;
pub mod subscription;

pub use backend::{EnvironmentReload, EventCallback, InjectedProvider, Network, RelayConnector, RelaySession, WalletEvent};
pub use kind::ConnectorKind;
pub use manager::{WalletEnvironment, WalletManager};
pub use state::{ConnectionPhase, ConnectionSnapshot};
pub use storage::{KeyValueStore, MemoryStore};
pub use subscription::{Listeners, Subscription};
