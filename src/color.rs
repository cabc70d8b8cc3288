//! Color parsing and tolerance-based comparison.
//!
//! Colors are `image::Rgba<u8>` throughout the crate. This module provides
//! hex-string parsing for CLI and scene-file input, and the single comparison
//! function the flood-fill engine uses to decide whether a pixel still counts
//! as background.

use image::Rgba;
use thiserror::Error;

/// Maximum per-channel difference for two colors to be considered equal.
///
/// Surfaces with reduced color depth (e.g. 16-bit packed pixels) lose low
/// bits on a write-then-read round trip; a tolerance of one unit absorbs that
/// quantization noise without letting visually distinct colors match.
pub const COLOR_TOLERANCE: u8 = 1;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#' and is not a known color name
    #[error("unknown color '{0}', expected '#RRGGBB' hex or a named color")]
    Unknown(String),
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Compare two colors channel-wise with a fixed tolerance.
///
/// Two colors match when red, green and blue each differ by at most
/// [`COLOR_TOLERANCE`]. Alpha is ignored. This is the sole notion of color
/// equality the flood-fill engine uses; call it rather than re-implementing
/// the test so fill-boundary semantics stay consistent.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use rasterpaint::color::colors_match;
///
/// assert!(colors_match(Rgba([100, 100, 100, 255]), Rgba([101, 99, 100, 0])));
/// assert!(!colors_match(Rgba([100, 100, 100, 255]), Rgba([102, 100, 100, 255])));
/// ```
pub fn colors_match(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    channel_close(a[0], b[0]) && channel_close(a[1], b[1]) && channel_close(a[2], b[2])
}

fn channel_close(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= COLOR_TOLERANCE
}

/// Parse a color string into an RGBA color.
///
/// Accepts hex strings of 3, 4, 6 or 8 digits after `#` (`#RGB` and `#RGBA`
/// double each digit; 6-digit colors get an opaque alpha) and the handful of
/// names the scene format uses: `black`, `white`, `red`, `green`, `blue`,
/// `transparent`.
///
/// # Examples
///
/// ```
/// use rasterpaint::color::parse_color;
///
/// let steel = parse_color("#336699").unwrap();
/// assert_eq!(steel, image::Rgba([51, 102, 153, 255]));
///
/// let blue = parse_color("BLUE").unwrap(); // names are case-insensitive
/// assert_eq!(blue, image::Rgba([0, 0, 255, 255]));
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is invalid or unparseable.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    match s.to_ascii_lowercase().as_str() {
        "black" => Ok(Rgba([0, 0, 0, 255])),
        "white" => Ok(Rgba([255, 255, 255, 255])),
        "red" => Ok(Rgba([255, 0, 0, 255])),
        "green" => Ok(Rgba([0, 255, 0, 255])),
        "blue" => Ok(Rgba([0, 0, 255, 255])),
        "transparent" => Ok(Rgba([0, 0, 0, 0])),
        _ => Err(ColorError::Unknown(s.to_string())),
    }
}

/// Decode a `#`-prefixed hex color of 3, 4, 6 or 8 digits.
fn parse_hex_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let hex = &s[1..];
    let len = hex.len();

    // Reject non-hex characters before slicing into digits
    for c in hex.chars() {
        if !c.is_ascii_hexdigit() {
            return Err(ColorError::InvalidHex(c));
        }
    }

    match len {
        3 => {
            // Short form: each digit doubles, alpha opaque
            let mut chars = hex.chars();
            let r = parse_hex_digit(chars.next().unwrap())? * 17;
            let g = parse_hex_digit(chars.next().unwrap())? * 17;
            let b = parse_hex_digit(chars.next().unwrap())? * 17;
            Ok(Rgba([r, g, b, 255]))
        }
        4 => {
            // Short form with alpha
            let mut chars = hex.chars();
            let r = parse_hex_digit(chars.next().unwrap())? * 17;
            let g = parse_hex_digit(chars.next().unwrap())? * 17;
            let b = parse_hex_digit(chars.next().unwrap())? * 17;
            let a = parse_hex_digit(chars.next().unwrap())? * 17;
            Ok(Rgba([r, g, b, a]))
        }
        6 => {
            // Full form, alpha opaque
            let r = parse_hex_pair(&hex[0..2])?;
            let g = parse_hex_pair(&hex[2..4])?;
            let b = parse_hex_pair(&hex[4..6])?;
            Ok(Rgba([r, g, b, 255]))
        }
        8 => {
            // Full form with alpha
            let r = parse_hex_pair(&hex[0..2])?;
            let g = parse_hex_pair(&hex[2..4])?;
            let b = parse_hex_pair(&hex[4..6])?;
            let a = parse_hex_pair(&hex[6..8])?;
            Ok(Rgba([r, g, b, a]))
        }
        _ => Err(ColorError::InvalidLength(len)),
    }
}

/// Value of one hex digit, case-insensitive (0-15).
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

/// Value of a two-digit hex pair (0-255).
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut chars = s.chars();
    let high = parse_hex_digit(chars.next().unwrap())?;
    let low = parse_hex_digit(chars.next().unwrap())?;
    Ok(high * 16 + low)
}
