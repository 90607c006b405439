//! Load-once holder for the lighting maps.

use std::sync::OnceLock;

use super::{LightingMaps, MapSource};

/// Holds one [`MapSource`] and the maps loaded from it.
///
/// The first call to [`load`](Self::load) reads the source; every later call
/// returns the same maps, including after a failed load (which leaves empty
/// maps behind). Concurrent first calls load exactly once.
#[derive(Debug)]
pub struct MapStore {
    source: MapSource,
    maps: OnceLock<LightingMaps>,
}

impl MapStore {
    pub fn new(source: MapSource) -> Self {
        Self {
            source,
            maps: OnceLock::new(),
        }
    }

    /// A store that is already loaded with `maps`.
    pub fn preloaded(maps: LightingMaps) -> Self {
        Self {
            source: MapSource::Empty,
            maps: OnceLock::from(maps),
        }
    }

    /// Load the maps if needed and return them.
    pub fn load(&self) -> &LightingMaps {
        self.maps.get_or_init(|| self.source.load())
    }

    /// Whether [`load`](Self::load) has run.
    pub fn is_loaded(&self) -> bool {
        self.maps.get().is_some()
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new(MapSource::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::RangeSection;

    #[test]
    fn loads_lazily_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps.json");
        std::fs::write(&path, r#"{"azimuth_ranges": {"0": "front"}}"#).unwrap();

        let store = MapStore::new(MapSource::path(&path));
        assert!(!store.is_loaded());
        let first = store.load().clone();
        assert!(store.is_loaded());

        // Later edits to the file are not picked up.
        std::fs::write(&path, r#"{"azimuth_ranges": {"0": "changed"}}"#).unwrap();
        assert_eq!(store.load(), &first);
        assert_eq!(
            store.load().resolve(0.0, RangeSection::Azimuth).as_str(),
            Some("front")
        );
    }

    #[test]
    fn failed_load_sticks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps.json");
        let store = MapStore::new(MapSource::path(&path));
        assert!(store.load().is_empty());

        // The file showing up later does not trigger a reload.
        std::fs::write(&path, r#"{"azimuth_ranges": {"0": "front"}}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn preloaded_store_is_loaded() {
        let store = MapStore::preloaded(LightingMaps::empty());
        assert!(store.is_loaded());
        assert!(store.load().is_empty());
    }

    #[test]
    fn concurrent_first_load_yields_one_snapshot() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MapStore::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.load() as *const LightingMaps as usize)
            })
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
