//! lightprompt - natural-language lighting prompts from lighting parameters
//!
//! This crate turns six lighting parameters (light type, azimuth, elevation,
//! intensity, color, hardness) into a descriptive prompt fragment for image
//! generation. Wording comes from a lookup document, the *lighting maps*:
//! range tables for the numeric parameters, phrases per light type and a
//! named color palette.
//!
//! Generation never fails. Missing or broken lighting maps, malformed colors
//! and unknown buckets all degrade to a shorter prompt.
//!
//! # Example
//!
//! ```rust
//! use lightprompt::{LightPrompt, LightType, LightingRequest};
//!
//! let engine = LightPrompt::builder().build();
//!
//! let request = LightingRequest::new(LightType::Sunlight)
//!     .azimuth(45)
//!     .elevation(45)
//!     .intensity(1.0)
//!     .light_color("#FFFFFF")
//!     .hardness(0.8);
//!
//! let prompt = engine.generate_prompt(&request);
//! assert!(prompt.starts_with(",off-screen light source,"));
//! assert!(prompt.contains("neutral white light"));
//! assert!(prompt.contains("hard shadows"));
//! ```
//!
//! # Custom lighting maps
//!
//! ```rust
//! use lightprompt::{LightPrompt, LightType, LightingRequest};
//!
//! let engine = LightPrompt::builder()
//!     .maps_json(r##"{
//!         "azimuth_ranges": { "0": "light from the front", "90": "light from the right" },
//!         "colors": { "#FF0000": "red", "#0000FF": "blue" }
//!     }"##)
//!     .build();
//!
//! let request = LightingRequest::new(LightType::Neon).azimuth(100).light_color("#EE1010");
//! assert_eq!(
//!     engine.generate_prompt(&request),
//!     ",off-screen light source,light from the right, Neon / Cyberpunk, red light, hard shadows"
//! );
//! ```

pub mod assemble;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod maps;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use assemble::{PROMPT_PREFIX, PromptAssembler, hardness_phrase};
pub use cache::{CacheConfig, FifoCache, ResultCache};
pub use config::EngineConfig;
pub use engine::{LightPrompt, LightPromptBuilder, LightingEngine};
pub use error::{LightPromptError, Result};
pub use lookup::{Palette, RangeSection, RangeTable, Rgb};
pub use maps::{LightingMaps, MapSource, MapStore};
pub use traits::LightingPromptGenerator;
pub use types::{Fragment, LightType, LightingOutput, LightingRequest, RequestKey, UiMetadata};
