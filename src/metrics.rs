//! Perceptual brightness and relative luminance.

use crate::components::rgb_components;
use crate::error::Result;

/// Perceived brightness per the W3C AERT formula, in [0, 255].
///
/// Alpha is ignored; an alpha-carrying source contributes only its RGB
/// channels.
pub fn get_brightness(text: &str) -> Result<f64> {
    let (r, g, b) = rgb_components(text)?;
    let weighted = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    Ok(f64::from(weighted) / 1000.0)
}

/// Relative luminance per WCAG 2.0, in [0, 1].
///
/// Each channel is normalized to [0, 1] and gamma-corrected before the
/// channels are combined with the 0.2126 / 0.7152 / 0.0722 weights.
pub fn get_luminance(text: &str) -> Result<f64> {
    let (r, g, b) = rgb_components(text)?;
    let channel = |v: u8| {
        let c = f64::from(v) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Ok(0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b))
}

/// Whether the color reads as dark (brightness below 128).
pub fn is_dark(text: &str) -> Result<bool> {
    Ok(get_brightness(text)? < 128.0)
}

/// Whether the color reads as light; the negation of [`is_dark`].
pub fn is_light(text: &str) -> Result<bool> {
    Ok(!is_dark(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    mod brightness_tests {
        use super::*;

        #[test]
        fn test_extremes() {
            assert_eq!(get_brightness("#000000").unwrap(), 0.0);
            assert_eq!(get_brightness("#FFFFFF").unwrap(), 255.0);
        }

        #[test]
        fn test_mid_gray() {
            // The weights sum to 1000, so a uniform gray is its own channel value.
            assert_eq!(get_brightness("#808080").unwrap(), 128.0);
        }

        #[test]
        fn test_pure_red() {
            assert_eq!(get_brightness("#FF0000").unwrap(), 76.245);
        }

        #[test]
        fn test_any_source_format() {
            assert_eq!(get_brightness("rgb(255, 255, 255)").unwrap(), 255.0);
            assert_eq!(get_brightness("#FFFFFFCC").unwrap(), 255.0);
        }
    }

    mod luminance_tests {
        use super::*;

        #[test]
        fn test_extremes() {
            assert_eq!(get_luminance("#000000").unwrap(), 0.0);
            assert!((get_luminance("#FFFFFF").unwrap() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn test_pure_channels_sum_to_white() {
            let r = get_luminance("#FF0000").unwrap();
            let g = get_luminance("#00FF00").unwrap();
            let b = get_luminance("#0000FF").unwrap();
            assert!((r - 0.2126).abs() < 1e-9);
            assert!((g - 0.7152).abs() < 1e-9);
            assert!((b - 0.0722).abs() < 1e-9);
        }

        #[test]
        fn test_low_channel_linear_segment() {
            // 8 / 255 = 0.0314 is below the 0.03928 knee, so no gamma curve.
            let expected = (8.0 / 255.0 / 12.92) * (0.2126 + 0.7152 + 0.0722);
            assert!((get_luminance("#080808").unwrap() - expected).abs() < 1e-12);
        }
    }

    mod classification_tests {
        use super::*;

        #[test]
        fn test_dark_and_light() {
            assert!(is_dark("#000000").unwrap());
            assert!(!is_dark("#FFFFFF").unwrap());
            assert!(is_light("#FFFFFF").unwrap());
            assert!(!is_light("#000000").unwrap());
        }

        #[test]
        fn test_boundary_is_light() {
            // Brightness of exactly 128 is not below the threshold.
            assert!(is_light("#808080").unwrap());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_unrecognized_input_propagates() {
            assert!(matches!(
                get_brightness("nope"),
                Err(ColorError::UnrecognizedFormat(_))
            ));
            assert!(get_luminance("nope").is_err());
            assert!(is_dark("nope").is_err());
            assert!(is_light("nope").is_err());
        }
    }
}
