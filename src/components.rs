//! Component extraction: hex expansion, channel parsing, and alpha
//! normalization.

use crate::error::{ColorError, Result};
use crate::format::{func_args, get_format, normalize, ColorFormat};

/// Expands a short-form hex color to its long form.
///
/// Short forms (3 or 4 digits) are expanded by doubling each digit; long
/// forms pass through. The result is always uppercase and `#`-prefixed:
/// length 7 for [`ColorFormat::Hex`], 9 for [`ColorFormat::Hex8`].
///
/// Returns [`ColorError::NotHex`] for `rgb(...)`/`rgba(...)` inputs.
pub fn expand_hex(text: &str) -> Result<String> {
    let color = normalize(text);
    match get_format(&color)? {
        ColorFormat::Hex | ColorFormat::Hex8 => {
            let digits = color.strip_prefix('#').unwrap_or(&color);
            let expanded: String = if digits.len() <= 4 {
                digits.chars().flat_map(|c| [c, c]).collect()
            } else {
                digits.to_string()
            };
            Ok(format!("#{}", expanded.to_ascii_uppercase()))
        }
        ColorFormat::Rgb | ColorFormat::Rgba => Err(ColorError::NotHex(color)),
    }
}

/// Parses one `rgb(...)` channel token into a byte.
///
/// A trailing `%` is dropped without rescaling and a fractional part is
/// truncated; the value is then clamped to the channel range.
fn parse_channel(token: &str) -> u8 {
    let token = token.strip_suffix('%').unwrap_or(token);
    let whole = match token.split_once('.') {
        Some((whole, _)) => whole,
        None => token,
    };
    whole.parse::<i64>().unwrap_or(0).clamp(0, 255) as u8
}

fn hex_pair(expanded: &str, offset: usize) -> u8 {
    u8::from_str_radix(&expanded[offset..offset + 2], 16).unwrap_or(0)
}

/// Extracts the red, green, and blue components of any recognized color.
///
/// Alpha is never produced here; use [`rgba_components`] when it matters.
pub fn rgb_components(text: &str) -> Result<(u8, u8, u8)> {
    let color = normalize(text);
    match get_format(&color)? {
        ColorFormat::Hex | ColorFormat::Hex8 => {
            let expanded = expand_hex(&color)?;
            Ok((
                hex_pair(&expanded, 1),
                hex_pair(&expanded, 3),
                hex_pair(&expanded, 5),
            ))
        }
        format @ (ColorFormat::Rgb | ColorFormat::Rgba) => {
            let prefix = match format {
                ColorFormat::Rgb => "rgb(",
                _ => "rgba(",
            };
            let args = func_args(&color, prefix).unwrap_or("");
            let mut tokens = args.split(',');
            let mut channel = || parse_channel(tokens.next().unwrap_or("0"));
            Ok((channel(), channel(), channel()))
        }
    }
}

/// Decodes the trailing alpha pair of an expanded `#RRGGBBAA` string.
fn decode_hex_alpha(expanded: &str) -> f64 {
    // When the low digit is '0', the high digit alone is taken as the whole
    // alpha byte. Inherited behavior, kept for output compatibility.
    let byte = if expanded.as_bytes()[8] == b'0' {
        u32::from_str_radix(&expanded[7..8], 16).unwrap_or(0)
    } else {
        u32::from_str_radix(&expanded[7..9], 16).unwrap_or(0)
    };
    round2(f64::from(byte) / 255.0)
}

/// Parses an `rgba(...)` alpha token: integer when it carries no decimal
/// point, decimal otherwise.
fn parse_alpha_token(token: &str) -> f64 {
    let token = token.strip_suffix('%').unwrap_or(token);
    if token.contains('.') {
        token.parse::<f64>().unwrap_or(0.0)
    } else {
        token.parse::<i64>().map_or(0.0, |v| v as f64)
    }
}

/// Clamps alpha into [0, 1].
fn clamp_alpha(alpha: f64) -> f64 {
    if alpha >= 1.0 {
        1.0
    } else if alpha < 0.0 {
        0.0
    } else {
        alpha
    }
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Extracts red, green, blue, and normalized alpha from any recognized color.
///
/// Alpha defaults to 1 for the alpha-free formats, is decoded from the
/// trailing hex pair for [`ColorFormat::Hex8`], and is taken from the fourth
/// token for [`ColorFormat::Rgba`]. The result is always clamped into
/// [0, 1].
pub fn rgba_components(text: &str) -> Result<(u8, u8, u8, f64)> {
    let color = normalize(text);
    let format = get_format(&color)?;
    let (r, g, b) = rgb_components(&color)?;
    let alpha = match format {
        ColorFormat::Hex | ColorFormat::Rgb => 1.0,
        ColorFormat::Hex8 => decode_hex_alpha(&expand_hex(&color)?),
        ColorFormat::Rgba => {
            let args = func_args(&color, "rgba(").unwrap_or("");
            parse_alpha_token(args.split(',').nth(3).unwrap_or("0"))
        }
    };
    Ok((r, g, b, clamp_alpha(alpha)))
}
