//! Prompt assembly.
//!
//! Fragments are emitted in a fixed order: direction first, then light type,
//! color, elevation, shadow quality and intensity. Leading with direction
//! keeps the light from being placed on the wrong side of the subject.

use crate::lookup::RangeSection;
use crate::maps::LightingMaps;
use crate::types::{Fragment, LightingRequest};

/// Literal every prompt starts with. The leading comma is intentional: the
/// prompt is appended to a user prompt without a separator of its own.
pub const PROMPT_PREFIX: &str = ",off-screen light source,";

const FRAGMENT_SEPARATOR: &str = ", ";

/// Shadow wording for a hardness value in `[0, 1]`.
///
/// Thresholds are inclusive lower bounds checked from hardest down;
/// anything below 0.3 (and NaN) is shadowless.
pub fn hardness_phrase(hardness: f64) -> &'static str {
    if hardness >= 0.8 {
        "hard shadows"
    } else if hardness >= 0.5 {
        "defined shadows"
    } else if hardness >= 0.3 {
        "soft shadows"
    } else {
        "shadowless"
    }
}

/// Builds prompt text from a request and a set of lighting maps.
#[derive(Debug, Clone, Copy)]
pub struct PromptAssembler<'a> {
    maps: &'a LightingMaps,
}

impl<'a> PromptAssembler<'a> {
    pub fn new(maps: &'a LightingMaps) -> Self {
        Self { maps }
    }

    /// Every fragment for `request`, in output order, absent ones included.
    pub fn fragments(&self, request: &LightingRequest) -> [Fragment; 6] {
        let maps = self.maps;
        let azimuth = request.normalized_azimuth() as f64;
        [
            maps.resolve(azimuth, RangeSection::Azimuth),
            maps.light_type_phrase(request.light_type),
            maps.match_color_name(&request.light_color, request.intensity),
            maps.resolve(request.elevation as f64, RangeSection::Elevation),
            Fragment::from_text(hardness_phrase(request.hardness)),
            maps.resolve(request.intensity, RangeSection::Intensity),
        ]
    }

    /// Assemble the full prompt: prefix followed by present fragments.
    pub fn assemble(&self, request: &LightingRequest) -> String {
        let fragments = self.fragments(request);
        let body = fragments
            .iter()
            .filter_map(Fragment::as_str)
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR);
        format!("{PROMPT_PREFIX}{body}")
    }
}
