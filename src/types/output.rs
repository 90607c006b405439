//! Assembled prompt output.

use serde::{Deserialize, Serialize};

/// Metadata reserved for host UIs. Currently always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiMetadata {}

/// Result of one prompt generation.
///
/// Serializes in the host node wire shape, `{"ui": {}, "result": ["<prompt>"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireOutput", from = "WireOutput")]
pub struct LightingOutput {
    pub prompt: String,
    pub ui: UiMetadata,
}

impl LightingOutput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ui: UiMetadata::default(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireOutput {
    ui: UiMetadata,
    result: (String,),
}

impl From<LightingOutput> for WireOutput {
    fn from(output: LightingOutput) -> Self {
        Self {
            ui: output.ui,
            result: (output.prompt,),
        }
    }
}

impl From<WireOutput> for LightingOutput {
    fn from(wire: WireOutput) -> Self {
        Self {
            prompt: wire.result.0,
            ui: wire.ui,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_host_shape() {
        let output = LightingOutput::new(",off-screen light source,hard shadows");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ui": {},
                "result": [",off-screen light source,hard shadows"]
            })
        );
    }

    #[test]
    fn ui_metadata_is_empty() {
        let output = LightingOutput::new("x");
        assert_eq!(output.ui, UiMetadata::default());
        assert_eq!(serde_json::to_string(&output.ui).unwrap(), "{}");
    }
}
