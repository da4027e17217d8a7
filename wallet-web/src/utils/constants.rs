//! Application constants

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 5_000;

/// `chain=url,chain=url`, baked in at build time
pub const RELAY_RPC: Option<&str> = option_env!("GUARDIAN_RELAY_RPC");

/// Seconds to wait for a relay session approval, baked in at build time
pub const PAIRING_TIMEOUT_SECS: Option<&str> = option_env!("GUARDIAN_PAIRING_TIMEOUT_SECS");
