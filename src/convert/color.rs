//! `#rrggbb` color strings to and from RGB channels

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("color '{color}' must have 6 hex digits, found {found}")]
    InvalidLength { color: String, found: usize },

    #[error("color '{color}' is not valid hex: {source}")]
    InvalidDigit {
        color: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// Format three channels as `#rrggbb` with lowercase digits.
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{}", hex::encode([r, g, b]))
}

/// Parse `#rrggbb` (either case) into `[r, g, b]`.
pub fn to_ints(color: &str) -> Result<[u8; 3], ColorError> {
    let digits = color
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(color.to_string()))?;
    if digits.len() != 6 {
        return Err(ColorError::InvalidLength {
            color: color.to_string(),
            found: digits.len(),
        });
    }

    let mut channels = [0u8; 3];
    hex::decode_to_slice(digits, &mut channels).map_err(|source| ColorError::InvalidDigit {
        color: color.to_string(),
        source,
    })?;
    Ok(channels)
}
