//! Chain id parsing.
//!
//! Injected providers report `eth_chainId` as a `0x` hex string, relay
//! sessions as a number. Both end up as `u64`.

use crate::error::{Result, WalletError};

/// Parse a chain id given as `0x`-prefixed hex or plain decimal.
///
/// ```rust
/// use lib_core::wallet::chain::parse_chain_id;
///
/// assert_eq!(parse_chain_id("0x89").unwrap(), 137);
/// assert_eq!(parse_chain_id("56").unwrap(), 56);
/// ```
pub fn parse_chain_id(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };

    match parsed {
        Ok(0) | Err(_) => Err(WalletError::InvalidChainId(raw.to_string())),
        Ok(id) => Ok(id),
    }
}

/// Accept a chain id delivered as a JavaScript number. Fractional,
/// negative, non-finite and out-of-range values are rejected.
///
/// ```rust
/// use lib_core::wallet::chain::chain_id_from_number;
///
/// assert_eq!(chain_id_from_number(137.0).unwrap(), 137);
/// assert!(chain_id_from_number(1.5).is_err());
/// ```
pub fn chain_id_from_number(number: f64) -> Result<u64> {
    // 2^53 - 1, the largest integer a JS number holds exactly
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if !number.is_finite() || number.fract() != 0.0 || number < 1.0 || number > MAX_SAFE_INTEGER {
        return Err(WalletError::InvalidChainId(number.to_string()));
    }
    Ok(number as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_decimal() {
        assert_eq!(parse_chain_id("0x1").unwrap(), 1);
        assert_eq!(parse_chain_id("0X38").unwrap(), 56);
        assert_eq!(parse_chain_id(" 137 ").unwrap(), 137);
    }

    #[test]
    fn test_rejects_garbage_and_zero() {
        assert!(matches!(parse_chain_id("0x"), Err(WalletError::InvalidChainId(_))));
        assert!(parse_chain_id("mainnet").is_err());
        assert!(parse_chain_id("0x0").is_err());
        assert!(parse_chain_id("").is_err());
    }

    #[test]
    fn test_number_must_be_positive_integer() {
        assert_eq!(chain_id_from_number(56.0).unwrap(), 56);
        assert!(matches!(chain_id_from_number(1.9), Err(WalletError::InvalidChainId(_))));
        assert!(chain_id_from_number(-1.0).is_err());
        assert!(chain_id_from_number(0.0).is_err());
        assert!(chain_id_from_number(f64::NAN).is_err());
        assert!(chain_id_from_number(f64::INFINITY).is_err());
        assert!(chain_id_from_number(1e20).is_err());
    }
}
