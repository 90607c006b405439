//! Core LightingPromptGenerator trait

use std::sync::Arc;

use crate::{LightingOutput, LightingRequest};

/// Anything that can turn a lighting request into a prompt.
///
/// Hosts depend on this trait rather than on [`LightingEngine`](crate::LightingEngine)
/// so they can substitute a fixed generator in their own tests.
/// Implementations must not fail: bad input yields a less descriptive prompt.
pub trait LightingPromptGenerator: Send + Sync {
    /// Generate (or recall) the output for `request`.
    fn generate(&self, request: &LightingRequest) -> Arc<LightingOutput>;

    /// Prompt text only.
    fn generate_prompt(&self, request: &LightingRequest) -> String {
        self.generate(request).prompt.clone()
    }
}
