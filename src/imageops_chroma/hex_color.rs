use image::Rgb;

use crate::error::HexColorError;

/// Color substituted when a hex string cannot be parsed
pub const FALLBACK_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Result of lenient hex color parsing
///
/// Tags whether the contained color was actually parsed from the input or
/// substituted because the input was malformed. Callers that need to
/// distinguish "used the fallback" from "the user asked for white" can
/// inspect the variant; callers that only want a color use [`rgb`].
///
/// [`rgb`]: ParsedColor::rgb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedColor {
    /// The input parsed successfully
    Parsed(Rgb<u8>),
    /// The input was malformed and [`FALLBACK_COLOR`] was substituted
    Fallback(Rgb<u8>),
}

impl ParsedColor {
    /// Returns the contained color regardless of how it was obtained
    pub fn rgb(self) -> Rgb<u8> {
        match self {
            Self::Parsed(color) | Self::Fallback(color) => color,
        }
    }

    /// Returns `true` if the color was substituted rather than parsed
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Parses a 6-digit hex color string into an RGB color
///
/// Leading `#` characters are stripped, so `#rrggbb` and `rrggbb` are both
/// accepted. Digits may be upper or lower case.
///
/// # Errors
///
/// * `HexColorError::InvalidLength` - The string does not contain exactly six digits
/// * `HexColorError::InvalidDigit` - A character is not an ASCII hex digit
///
/// # Examples
///
/// ```
/// use image::Rgb;
/// use imageops_chroma::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#00ff7f"), Ok(Rgb([0, 255, 127])));
/// assert!(parse_hex_color("notacolor").is_err());
/// ```
pub fn parse_hex_color(input: &str) -> Result<Rgb<u8>, HexColorError> {
    let digits = input.trim_start_matches('#');

    if let Some(invalid) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexColorError::InvalidDigit(invalid));
    }

    if digits.len() != 6 {
        return Err(HexColorError::InvalidLength(digits.len()));
    }

    let bytes = digits.as_bytes();
    let channel = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);

    Ok(Rgb([channel(0), channel(2), channel(4)]))
}

/// Parses a hex color string, substituting [`FALLBACK_COLOR`] on failure
///
/// This is the lenient entry point used by the segmenter: malformed free-text
/// input must never block the caller, so instead of an error the result is
/// tagged with whether the fallback was used.
///
/// # Examples
///
/// ```
/// use imageops_chroma::{parse_hex_color_or_fallback, FALLBACK_COLOR};
///
/// let parsed = parse_hex_color_or_fallback("notacolor");
/// assert!(parsed.is_fallback());
/// assert_eq!(parsed.rgb(), FALLBACK_COLOR);
/// ```
pub fn parse_hex_color_or_fallback(input: &str) -> ParsedColor {
    match parse_hex_color(input) {
        Ok(color) => ParsedColor::Parsed(color),
        Err(_) => ParsedColor::Fallback(FALLBACK_COLOR),
    }
}

// Input is validated as ASCII hex before this is called.
fn nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}
