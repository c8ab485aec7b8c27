use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{what} is too long (max {max}, got {got})")]
    TooLong {
        what: &'static str,
        max: usize,
        got: usize,
    },
    #[error("too many {what} (max {max}, got {got})")]
    TooMany {
        what: &'static str,
        max: usize,
        got: usize,
    },
    #[error("invalid url")]
    InvalidUrl,
    #[error("invalid color")]
    InvalidColor,
}

/// Reject text longer than `max` characters.
pub fn validate_length(what: &'static str, text: &str, max: usize) -> Result<(), ValidationError> {
    let got = text.chars().count();
    if got > max {
        return Err(ValidationError::TooLong { what, max, got });
    }
    Ok(())
}

pub fn validate_count(what: &'static str, got: usize, max: usize) -> Result<(), ValidationError> {
    if got > max {
        return Err(ValidationError::TooMany { what, max, got });
    }
    Ok(())
}

/// Accept only absolute `http` and `https` URLs.
pub fn validate_url(raw: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(raw.trim()).map_err(|_| ValidationError::InvalidUrl)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::InvalidUrl),
    }
}

/// Parse `#rrggbb` (the `#` is optional) into Discord's integer colour.
pub fn parse_hex_color(raw: &str) -> Result<i32, ValidationError> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.is_empty() || hex.len() > 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidColor);
    }
    i32::from_str_radix(hex, 16).map_err(|_| ValidationError::InvalidColor)
}

/// Format an integer colour as `#rrggbb`.
pub fn format_hex_color(color: i32) -> String {
    format!("#{:06x}", color & 0x00FF_FFFF)
}
