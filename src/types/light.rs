//! Light source categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::LightPromptError;

/// The eight light source categories a request can name.
///
/// Serializes as its display name (e.g. `"Neon / Cyberpunk"`), which is also
/// the key looked up in the `light_type_prompts` section of the lighting maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LightType {
    #[default]
    Sunlight,
    StudioSoftbox,
    CinematicSpotlight,
    Practical,
    RingLight,
    Neon,
    Fire,
    Volumetric,
}

impl LightType {
    /// Every category, in the order hosts present them.
    pub const ALL: [LightType; 8] = [
        Self::Sunlight,
        Self::StudioSoftbox,
        Self::CinematicSpotlight,
        Self::Practical,
        Self::RingLight,
        Self::Neon,
        Self::Fire,
        Self::Volumetric,
    ];

    /// Display name; doubles as the lookup key and the fallback phrase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunlight => "Sunlight (Directional)",
            Self::StudioSoftbox => "Studio Softbox (Area)",
            Self::CinematicSpotlight => "Cinematic Spotlight",
            Self::Practical => "Practical (Lamp/Bulb)",
            Self::RingLight => "Ring Light (Beauty)",
            Self::Neon => "Neon / Cyberpunk",
            Self::Fire => "Fire / Candlelight",
            Self::Volumetric => "Volumetric (God Rays)",
        }
    }
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightType {
    type Err = LightPromptError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| LightPromptError::UnknownLightType(s.to_string()))
    }
}

impl Serialize for LightType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LightType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
