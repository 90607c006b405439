//! Value-to-phrase lookups against the lighting maps.
//!
//! - [`range`] resolves a number against a threshold table.
//! - [`color`] names a hex color by its nearest palette entry.

pub mod color;
pub mod range;

pub use color::{NEUTRAL_WHITE, Palette, Rgb, match_color_name};
pub use range::{RangeSection, RangeTable};
