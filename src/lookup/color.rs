//! Nearest-name color matching.
//!
//! Colors are compared in plain sRGB by squared Euclidean distance. The
//! square root is skipped since it does not change the argmin.

use crate::types::Fragment;

/// Phrase returned for near-white input without consulting the palette.
pub const NEUTRAL_WHITE: &str = "neutral white light";

/// Channels above this count as white for the fast path.
const WHITE_FLOOR: u8 = 250;
/// Channels below this count as black for the fast path.
const BLACK_CEILING: u8 = 10;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode `RRGGBB`, ignoring any leading `#` characters.
    ///
    /// Anything that is not exactly six hex digits decodes as opaque white.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::WHITE;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(u8::MAX);
        Self::new(channel(0), channel(2), channel(4))
    }

    /// Sum of squared per-channel differences.
    pub fn distance_squared(&self, other: &Rgb) -> u32 {
        let d = |a: u8, b: u8| {
            let diff = i32::from(a) - i32::from(b);
            (diff * diff) as u32
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }

    fn is_near_white(&self) -> bool {
        self.r > WHITE_FLOOR && self.g > WHITE_FLOOR && self.b > WHITE_FLOOR
    }

    fn is_near_black(&self) -> bool {
        self.r < BLACK_CEILING && self.g < BLACK_CEILING && self.b < BLACK_CEILING
    }
}

/// Named colors in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    entries: Vec<(Rgb, String)>,
}

impl Palette {
    /// Build a palette from `(hex, name)` pairs, keeping their order.
    ///
    /// Malformed hex keys decode as white, same as request colors.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(hex, name)| (Rgb::from_hex(hex), name.to_string()))
                .collect(),
        }
    }

    /// Name of the closest entry. Ties keep the entry that comes first.
    pub fn nearest(&self, target: Rgb) -> Option<&str> {
        let mut best: Option<(u32, &str)> = None;
        for (rgb, name) in &self.entries {
            let dist = target.distance_squared(rgb);
            if best.is_none_or(|(min, _)| dist < min) {
                best = Some((dist, name));
            }
        }
        best.map(|(_, name)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Describe `hex_color` as `"<name> light"` using the closest palette entry.
///
/// Near-white input short-circuits to [`NEUTRAL_WHITE`] and near-black input
/// to absent, both without touching the palette. Without a palette (or with
/// an empty one) every other color is absent as well.
///
/// `intensity` is accepted for API symmetry with the other lookups but does
/// not influence the match.
pub fn match_color_name(palette: Option<&Palette>, hex_color: &str, _intensity: f64) -> Fragment {
    let target = Rgb::from_hex(hex_color);
    if target.is_near_white() {
        return Fragment::Present(NEUTRAL_WHITE.to_string());
    }
    if target.is_near_black() {
        return Fragment::Absent;
    }
    palette
        .and_then(|p| p.nearest(target))
        .map(|name| Fragment::from_text(format!("{name} light")))
        .unwrap_or_default()
}
