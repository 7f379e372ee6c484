//! Textual color parsing, conversion, and perceptual metrics.
//!
//! This crate classifies color strings into one of four formats — `Hex`
//! (`#RRGGBB` / `#RGB`), `Hex8` (`#RRGGBBAA` / `#RGBA`), `RGB`
//! (`rgb(r, g, b)`), and `RGBA` (`rgba(r, g, b, a)`) — and converts between
//! them, normalizing the alpha channel along the way:
//!
//! - [`format`]: whitespace normalization and format classification
//! - [`components`]: hex expansion and numeric component extraction
//! - [`convert`]: canonical hex / hex8 / rgb / rgba renderings
//! - [`metrics`]: perceptual brightness and WCAG relative luminance
//! - [`error`]: error types for the crate
//!
//! Every function is a pure transformation of its input string; nothing is
//! cached or shared between calls.
//!
//! # Examples
//!
//! ```
//! assert!(tinct::is_valid("#abc"));
//! assert_eq!(tinct::get_format("#abc").unwrap(), tinct::ColorFormat::Hex);
//!
//! assert_eq!(tinct::to_hex("rgb(255, 0, 0)").unwrap(), "#FF0000");
//! assert_eq!(tinct::to_rgb("#00FF00").unwrap(), "rgb(0, 255, 0)");
//!
//! let (r, g, b, a) = tinct::rgba_components("rgba(255, 0, 0, 0.5)").unwrap();
//! assert_eq!((r, g, b, a), (255, 0, 0, 0.5));
//!
//! assert_eq!(tinct::get_brightness("#FFFFFF").unwrap(), 255.0);
//! assert!(tinct::is_dark("#000000").unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]

pub mod components;
pub mod convert;
pub mod error;
pub mod format;
pub mod metrics;

// Re-export the whole functional surface at the crate root for convenience
pub use components::{expand_hex, rgb_components, rgba_components};
pub use convert::{to_hex, to_hex8, to_hex8_exact, to_rgb, to_rgba};
pub use error::{ColorError, Result};
pub use format::{get_format, is_valid, normalize, ColorFormat};
pub use metrics::{get_brightness, get_luminance, is_dark, is_light};
