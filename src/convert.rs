//! Canonical textual renderings of recognized colors.

use crate::components::{expand_hex, rgb_components, rgba_components, round2};
use crate::error::Result;
use crate::format::{get_format, ColorFormat};

/// Renders any recognized color as an uppercase `#RRGGBB` string.
///
/// A hex source returns its own expanded long form; everything else goes
/// through component extraction, dropping alpha if the source carried one.
pub fn to_hex(text: &str) -> Result<String> {
    match get_format(text)? {
        ColorFormat::Hex => expand_hex(text),
        ColorFormat::Hex8 | ColorFormat::Rgb | ColorFormat::Rgba => {
            let (r, g, b) = rgb_components(text)?;
            Ok(format!("#{:02X}{:02X}{:02X}", r, g, b))
        }
    }
}

/// Encodes a normalized alpha as the trailing hex pair of `#RRGGBBAA`.
///
/// The in-between case scales through a divide-by-100 round trip and
/// right-pads single digits rather than computing `round(255 * a)` directly.
/// Inherited encoding, kept for output compatibility; [`to_hex8_exact`] is
/// the direct alternative.
fn compat_alpha_pair(alpha: f64) -> String {
    if alpha <= 0.0 {
        "00".to_string()
    } else if alpha >= 1.0 {
        "FF".to_string()
    } else {
        let scaled = (round2(255.0 * alpha / 100.0) * 100.0) as u32;
        let mut pair = format!("{:X}", scaled);
        if pair.len() == 1 {
            pair.push('0');
        }
        pair
    }
}

/// Renders any recognized color as an uppercase `#RRGGBBAA` string.
///
/// A `Hex8` source returns its own expanded long form; everything else goes
/// through component extraction with alpha normalization and the
/// compatibility alpha encoding of [`compat_alpha_pair`].
pub fn to_hex8(text: &str) -> Result<String> {
    match get_format(text)? {
        ColorFormat::Hex8 => expand_hex(text),
        ColorFormat::Hex | ColorFormat::Rgb | ColorFormat::Rgba => {
            let (r, g, b, a) = rgba_components(text)?;
            Ok(format!("#{:02X}{:02X}{:02X}{}", r, g, b, compat_alpha_pair(a)))
        }
    }
}

/// Renders any recognized color as `#RRGGBBAA` with alpha encoded as
/// `round(255 * a)`.
///
/// Opt-in alternative to [`to_hex8`] for callers that do not need its
/// inherited alpha encoding.
pub fn to_hex8_exact(text: &str) -> Result<String> {
    match get_format(text)? {
        ColorFormat::Hex8 => expand_hex(text),
        ColorFormat::Hex | ColorFormat::Rgb | ColorFormat::Rgba => {
            let (r, g, b, a) = rgba_components(text)?;
            let alpha = (255.0 * a).round() as u32;
            Ok(format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, alpha))
        }
    }
}

/// Renders any recognized color as `rgb(r, g, b)`.
pub fn to_rgb(text: &str) -> Result<String> {
    let (r, g, b) = rgb_components(text)?;
    Ok(format!("rgb({}, {}, {})", r, g, b))
}

/// Whole alphas render as bare integers, everything else as the shortest
/// decimal form.
fn format_alpha(alpha: f64) -> String {
    if alpha == 0.0 {
        "0".to_string()
    } else if alpha == 1.0 {
        "1".to_string()
    } else {
        format!("{}", alpha)
    }
}

/// Renders any recognized color as `rgb(r, g, b, a)`.
///
/// The four-component form keeps the `rgb(` prefix rather than `rgba(`;
/// intentional output compatibility with existing consumers.
pub fn to_rgba(text: &str) -> Result<String> {
    let (r, g, b, a) = rgba_components(text)?;
    Ok(format!("rgb({}, {}, {}, {})", r, g, b, format_alpha(a)))
}
