//! Input normalization and format classification.
//!
//! Classification applies an ordered list of independent grammar checks and
//! returns the first match. The order is load-bearing: the 3- and 6-digit hex
//! widths are tried before the alpha-carrying 4- and 8-digit widths, and the
//! `rgb(` form before `rgba(`.

use std::fmt;

use crate::error::{ColorError, Result};

/// The four textual color formats the crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// 6-digit (or 3-digit short form) hex string, e.g. `#FF8000`.
    Hex,
    /// 8-digit (or 4-digit short form) hex string with two trailing alpha digits.
    Hex8,
    /// Functional notation `rgb(r, g, b)`.
    Rgb,
    /// Functional notation with a fourth alpha component.
    Rgba,
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hex => "Hex",
            Self::Hex8 => "Hex8",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

/// Removes leading, trailing, and internal whitespace from a color string.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Number of hex digits after the optional `#`, if every character is one.
fn hex_digit_count(color: &str) -> Option<usize> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(digits.len())
    } else {
        None
    }
}

/// Returns the argument list of a `prefix(...)` functional form.
///
/// The prefix match is case-insensitive; the returned slice excludes the
/// prefix and the closing parenthesis.
pub(crate) fn func_args<'a>(color: &'a str, prefix: &str) -> Option<&'a str> {
    let lower = color.to_ascii_lowercase();
    if lower.starts_with(prefix) && lower.ends_with(')') && color.len() > prefix.len() {
        Some(&color[prefix.len()..color.len() - 1])
    } else {
        None
    }
}

/// A signed integer, percentage, or decimal channel token.
fn is_channel_token(token: &str) -> bool {
    let token = token.strip_suffix('%').unwrap_or(token);
    let token = token.strip_prefix(['+', '-']).unwrap_or(token);
    let mut digits = 0;
    let mut dots = 0;
    for b in token.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

fn is_func(color: &str, prefix: &str, arity: usize) -> bool {
    match func_args(color, prefix) {
        Some(args) => {
            args.split(',').count() == arity && args.split(',').all(is_channel_token)
        }
        None => false,
    }
}

/// Classifies a color string into its [`ColorFormat`].
///
/// The input is normalized first, so surrounding or embedded whitespace is
/// ignored. Returns [`ColorError::UnrecognizedFormat`] when no grammar
/// matches; every conversion and metric in this crate surfaces that error
/// unchanged.
pub fn get_format(text: &str) -> Result<ColorFormat> {
    let color = normalize(text);

    if matches!(hex_digit_count(&color), Some(3 | 6)) {
        return Ok(ColorFormat::Hex);
    }
    if matches!(hex_digit_count(&color), Some(4 | 8)) {
        return Ok(ColorFormat::Hex8);
    }
    if is_func(&color, "rgb(", 3) {
        return Ok(ColorFormat::Rgb);
    }
    if is_func(&color, "rgba(", 4) {
        return Ok(ColorFormat::Rgba);
    }

    Err(ColorError::UnrecognizedFormat(color))
}

/// Returns whether the input is a recognized color string.
///
/// This is the only place a classification failure is converted to a boolean
/// instead of propagating.
pub fn is_valid(text: &str) -> bool {
    get_format(text).is_ok()
}
