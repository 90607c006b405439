//! LightingEngine - the service object hosts hold on to

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::assemble::PromptAssembler;
use crate::cache::{CacheConfig, ResultCache};
use crate::maps::{LightingMaps, MapStore};
use crate::traits::LightingPromptGenerator;
use crate::types::{LightingOutput, LightingRequest, RequestKey};

/// Owns one set of lighting maps and one result cache.
///
/// Build it once (see [`LightPrompt::builder`](crate::LightPrompt::builder))
/// and share it by reference or `Arc`; it is `Send + Sync`. The maps load on
/// first use, and results are memoized per full request, identity included.
#[derive(Debug)]
pub struct LightingEngine {
    maps: MapStore,
    cache: ResultCache<RequestKey, Arc<LightingOutput>>,
}

impl LightingEngine {
    pub(crate) fn new(maps: MapStore, cache: &CacheConfig) -> Self {
        Self {
            maps,
            cache: ResultCache::new(cache),
        }
    }

    /// Load the lighting maps if they are not loaded yet. Idempotent.
    pub fn load(&self) -> &LightingMaps {
        self.maps.load()
    }

    /// The loaded lighting maps (loading them if needed).
    pub fn maps(&self) -> &LightingMaps {
        self.maps.load()
    }

    /// Whether the lighting maps have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.maps.is_loaded()
    }

    /// The result cache, for inspection.
    pub fn cache(&self) -> &ResultCache<RequestKey, Arc<LightingOutput>> {
        &self.cache
    }

    /// Assemble without consulting or filling the cache.
    pub fn assemble(&self, request: &LightingRequest) -> String {
        PromptAssembler::new(self.maps()).assemble(request)
    }

    /// Generate the output for `request`, reusing a cached result when the
    /// exact same request was seen before.
    #[instrument(skip(self), fields(light_type = %request.light_type))]
    pub fn generate(&self, request: &LightingRequest) -> Arc<LightingOutput> {
        let maps = self.maps.load();
        self.cache.get_or_compute(request.key(), || {
            let prompt = PromptAssembler::new(maps).assemble(request);
            debug!(%prompt, "assembled lighting prompt");
            Arc::new(LightingOutput::new(prompt))
        })
    }

    /// Prompt text for `request`.
    pub fn generate_prompt(&self, request: &LightingRequest) -> String {
        self.generate(request).prompt.clone()
    }
}

impl LightingPromptGenerator for LightingEngine {
    fn generate(&self, request: &LightingRequest) -> Arc<LightingOutput> {
        LightingEngine::generate(self, request)
    }
}
