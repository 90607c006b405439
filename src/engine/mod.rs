//! Engine implementation

mod builder;
mod lighting;

pub use builder::{LightPrompt, LightPromptBuilder};
pub use lighting::LightingEngine;
