//! Builder for configuring engine instances

use std::path::PathBuf;

use tracing::info;

use super::LightingEngine;
use crate::cache::CacheConfig;
use crate::config::EngineConfig;
use crate::maps::{LightingMaps, MapSource, MapStore};

/// Main entry point for creating engine instances.
pub struct LightPrompt;

impl LightPrompt {
    /// Create a new builder for configuring the engine.
    pub fn builder() -> LightPromptBuilder {
        LightPromptBuilder::new()
    }
}

/// Builder for configuring engine instances.
///
/// Nothing here can fail: a bad maps source only shows up later, as
/// empty maps and shorter prompts.
#[derive(Debug, Clone, Default)]
pub struct LightPromptBuilder {
    source: MapSource,
    preloaded: Option<LightingMaps>,
    cache: CacheConfig,
}

impl LightPromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an [`EngineConfig`].
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new()
            .maps_source(config.maps.source())
            .cache(CacheConfig::from(&config.cache))
    }

    /// Read the lighting maps from a JSON file on first use.
    pub fn maps_path(self, path: impl Into<PathBuf>) -> Self {
        self.maps_source(MapSource::path(path))
    }

    /// Parse the lighting maps from an in-memory JSON document on first use.
    pub fn maps_json(self, json: impl Into<String>) -> Self {
        self.maps_source(MapSource::inline(json))
    }

    /// Set the lighting maps source (default: the embedded maps).
    pub fn maps_source(mut self, source: MapSource) -> Self {
        self.source = source;
        self.preloaded = None;
        self
    }

    /// Use already-built maps; nothing is loaded later.
    pub fn maps(mut self, maps: LightingMaps) -> Self {
        self.preloaded = Some(maps);
        self
    }

    /// Set the result cache configuration.
    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache = config;
        self
    }

    /// Set the maximum number of cached results (default: 50).
    pub fn cache_max_entries(mut self, n: usize) -> Self {
        self.cache.max_entries = n;
        self
    }

    pub fn build(self) -> LightingEngine {
        let (store, source) = match self.preloaded {
            Some(maps) => (MapStore::preloaded(maps), "preloaded".to_string()),
            None => {
                let source = self.source.describe();
                (MapStore::new(self.source), source)
            }
        };
        info!(
            source = %source,
            cache_max_entries = self.cache.max_entries,
            "lighting engine built"
        );
        LightingEngine::new(store, &self.cache)
    }
}
