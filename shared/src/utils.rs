//! # Shared Utility Functions
//!
//! Display helpers used by the wallet manager's notifications and by the
//! front-end navbar.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - First N and last M characters joined by `...`
//! - [`shorten_address`] - `0x` addresses as `0x1234...abcd`
//! - [`chain_name`] - Human name for the networks the relay is configured for
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
//! assert_eq!(format_address(address, 6, 4), "0x71C7...976F");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Addresses too short to shorten (or non-ASCII input) are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
/// assert_eq!(format_address(addr, 6, 4), "0x71C7...976F");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if !address.is_ascii() || address_len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Shorten an EVM address to `0x` plus four hex digits, then the last four.
///
/// An empty address yields an empty string.
pub fn shorten_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Display name for a chain id, falling back to `Chain <id>`.
pub fn chain_name(chain_id: u64) -> String {
    match chain_id {
        1 => "Ethereum".to_string(),
        5 => "Goerli".to_string(),
        56 => "BNB Chain".to_string(),
        137 => "Polygon".to_string(),
        11155111 => "Sepolia".to_string(),
        other => format!("Chain {}", other),
    }
}
