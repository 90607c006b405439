//! Lighting request and its cache key.

use serde::{Deserialize, Serialize};

use super::LightType;

/// Default light color when the caller leaves it unset.
pub const DEFAULT_LIGHT_COLOR: &str = "#FFFFFF";

/// One prompt request: six lighting parameters plus an opaque caller identity.
///
/// Declared domains (azimuth 0–360, elevation -90–90, intensity 0.0–2.0,
/// hardness 0.0–1.0) are enforced by the caller; the engine never rejects a
/// request, it only produces less descriptive output for odd values.
///
/// ```rust
/// # use lightprompt::{LightingRequest, LightType};
/// let request = LightingRequest::new(LightType::Neon)
///     .azimuth(270)
///     .elevation(10)
///     .light_color("#FF00FF")
///     .identity("node-7");
/// assert_eq!(request.intensity, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingRequest {
    pub light_type: LightType,
    /// Degrees around the subject; wrapped into `[0, 360)` before lookup.
    #[serde(default = "default_angle")]
    pub azimuth: i64,
    /// Degrees above (positive) or below (negative) the horizon.
    #[serde(default = "default_angle")]
    pub elevation: i64,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    /// Hex color, with or without a leading `#`.
    #[serde(default = "default_light_color")]
    pub light_color: String,
    #[serde(default = "default_hardness")]
    pub hardness: f64,
    /// Caller-supplied token that partitions the result cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
}

fn default_angle() -> i64 {
    45
}

fn default_intensity() -> f64 {
    1.0
}

fn default_light_color() -> String {
    DEFAULT_LIGHT_COLOR.to_string()
}

fn default_hardness() -> f64 {
    0.8
}

impl Default for LightingRequest {
    fn default() -> Self {
        Self::new(LightType::default())
    }
}

impl LightingRequest {
    /// Request for `light_type` with every other parameter at its default.
    pub fn new(light_type: LightType) -> Self {
        Self {
            light_type,
            azimuth: default_angle(),
            elevation: default_angle(),
            intensity: default_intensity(),
            light_color: default_light_color(),
            hardness: default_hardness(),
            identity: None,
        }
    }

    pub fn azimuth(mut self, degrees: i64) -> Self {
        self.azimuth = degrees;
        self
    }

    pub fn elevation(mut self, degrees: i64) -> Self {
        self.elevation = degrees;
        self
    }

    pub fn intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn light_color(mut self, hex: impl Into<String>) -> Self {
        self.light_color = hex.into();
        self
    }

    pub fn hardness(mut self, hardness: f64) -> Self {
        self.hardness = hardness;
        self
    }

    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Azimuth wrapped into `[0, 360)`; negative angles wrap from the top.
    pub fn normalized_azimuth(&self) -> i64 {
        self.azimuth.rem_euclid(360)
    }

    /// Exact cache key for this request.
    pub fn key(&self) -> RequestKey {
        RequestKey {
            identity: self.identity.clone(),
            light_type: self.light_type,
            azimuth: self.azimuth,
            elevation: self.elevation,
            intensity_bits: self.intensity.to_bits(),
            light_color: self.light_color.clone(),
            hardness_bits: self.hardness.to_bits(),
        }
    }
}

/// Composite cache key covering every request field.
///
/// Floats are compared by bit pattern, and the azimuth is kept as supplied
/// (370 and 10 produce the same prompt but occupy separate entries).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    identity: Option<String>,
    light_type: LightType,
    azimuth: i64,
    elevation: i64,
    intensity_bits: u64,
    light_color: String,
    hardness_bits: u64,
}
