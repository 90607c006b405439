//! Lighting maps: the lookup document that drives prompt wording.
//!
//! The document is a JSON object with up to five sections:
//!
//! ```json
//! {
//!   "light_type_prompts": { "Neon / Cyberpunk": "neon lighting" },
//!   "intensity_ranges":   { "0.0": "dim", "1.0": "bright" },
//!   "azimuth_ranges":     { "0": "light from the front", "90": "light from the right" },
//!   "elevation_ranges":   { "-90": "from below", "45": "from above" },
//!   "colors":             { "#FF0000": "red" }
//! }
//! ```
//!
//! Any section may be missing or malformed. A missing section, a section
//! that is not an object, or a range section with a non-numeric key all
//! behave the same: lookups against it produce [`Fragment::Absent`].
//!
//! [`MapSource`] says where a document comes from and [`MapStore`] loads it
//! at most once.

mod source;
mod store;

pub use source::MapSource;
pub use store::MapStore;

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::lookup::{Palette, RangeSection, RangeTable, match_color_name};
use crate::types::{Fragment, LightType};
use crate::{LightPromptError, Result};

const LIGHT_TYPE_PROMPTS: &str = "light_type_prompts";
const COLORS: &str = "colors";

/// Default lighting maps compiled into the crate.
const EMBEDDED_MAPS: &str = include_str!("default_maps.json");

/// Parsed, normalized lighting maps. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightingMaps {
    light_types: Option<HashMap<String, String>>,
    intensity: Option<RangeTable>,
    azimuth: Option<RangeTable>,
    elevation: Option<RangeTable>,
    colors: Option<Palette>,
}

impl LightingMaps {
    /// Maps with no sections. Every lookup degrades to its fallback.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default maps shipped with the crate.
    ///
    /// Falls back to [`LightingMaps::empty`] if the embedded document is
    /// somehow unreadable.
    pub fn embedded() -> Self {
        match Self::from_json_str(EMBEDDED_MAPS) {
            Ok(maps) => maps,
            Err(e) => {
                warn!(error = %e, "failed to parse embedded lighting maps");
                Self::empty()
            }
        }
    }

    /// Parse a lighting maps document.
    ///
    /// Fails only when the text is not JSON or the top level is not an
    /// object; problems inside sections are absorbed section by section.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build maps from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let doc = match value {
            Value::Object(doc) => doc,
            other => {
                return Err(LightPromptError::InvalidMaps(format!(
                    "top level must be an object, found {}",
                    json_kind(&other)
                )));
            }
        };

        let light_types = section(&doc, LIGHT_TYPE_PROMPTS).map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        });

        let range = |name: RangeSection| {
            let map = section(&doc, name.as_str())?;
            let table = RangeTable::from_entries(map.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            if table.is_none() {
                debug!(section = %name, "range section has non-numeric keys, ignoring");
            }
            table
        };

        let colors = section(&doc, COLORS).map(|map| {
            Palette::from_entries(
                map.iter()
                    .filter_map(|(hex, name)| name.as_str().map(|n| (hex.as_str(), n))),
            )
        });

        Ok(Self {
            light_types,
            intensity: range(RangeSection::Intensity),
            azimuth: range(RangeSection::Azimuth),
            elevation: range(RangeSection::Elevation),
            colors,
        })
    }

    /// Whether no section at all is usable.
    pub fn is_empty(&self) -> bool {
        self.light_types.is_none()
            && self.intensity.is_none()
            && self.azimuth.is_none()
            && self.elevation.is_none()
            && self.colors.is_none()
    }

    /// Phrase for a light type, falling back to its display name.
    pub fn light_type_phrase(&self, light_type: LightType) -> Fragment {
        let name = light_type.as_str();
        let phrase = self
            .light_types
            .as_ref()
            .and_then(|m| m.get(name))
            .map_or(name, String::as_str);
        Fragment::from_text(phrase)
    }

    /// Normalized table for a range section, if present and numeric.
    pub fn range_table(&self, section: RangeSection) -> Option<&RangeTable> {
        match section {
            RangeSection::Intensity => self.intensity.as_ref(),
            RangeSection::Azimuth => self.azimuth.as_ref(),
            RangeSection::Elevation => self.elevation.as_ref(),
        }
    }

    /// Resolve `value` against a range section.
    pub fn resolve(&self, value: f64, section: RangeSection) -> Fragment {
        self.range_table(section)
            .map(|t| t.resolve(value))
            .unwrap_or_default()
    }

    /// Resolve `value` against a range section named as in the document
    /// (e.g. `"azimuth_ranges"`). Unknown names resolve to absent.
    pub fn resolve_named(&self, value: f64, section_name: &str) -> Fragment {
        section_name
            .parse::<RangeSection>()
            .map(|section| self.resolve(value, section))
            .unwrap_or_default()
    }

    /// The color palette, if the document has one.
    pub fn palette(&self) -> Option<&Palette> {
        self.colors.as_ref()
    }

    /// Name `hex_color` by its nearest palette entry.
    pub fn match_color_name(&self, hex_color: &str, intensity: f64) -> Fragment {
        match_color_name(self.palette(), hex_color, intensity)
    }
}

/// Borrow a section if it exists and is an object.
fn section<'a>(doc: &'a Map<String, Value>, name: &str) -> Option<&'a Map<String, Value>> {
    match doc.get(name)? {
        Value::Object(map) => Some(map),
        other => {
            debug!(section = name, kind = json_kind(other), "section is not an object, ignoring");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
