//! Where a lighting maps document comes from.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::LightingMaps;
use crate::telemetry;
use crate::{LightPromptError, Result};

/// Origin of a lighting maps document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MapSource {
    /// The default maps compiled into the crate.
    #[default]
    Embedded,
    /// A JSON file on disk.
    Path(PathBuf),
    /// A JSON document held in memory.
    Inline(String),
    /// No document at all.
    Empty,
}

impl MapSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn inline(json: impl Into<String>) -> Self {
        Self::Inline(json.into())
    }

    /// Load the document, reporting any failure.
    pub fn try_load(&self) -> Result<LightingMaps> {
        match self {
            Self::Embedded => Ok(LightingMaps::embedded()),
            Self::Path(path) => {
                let content = std::fs::read_to_string(path)?;
                LightingMaps::from_json_str(&content)
            }
            Self::Inline(json) => LightingMaps::from_json_str(json),
            Self::Empty => Ok(LightingMaps::empty()),
        }
    }

    /// Load the document, degrading to empty maps on any failure.
    ///
    /// A missing file is quiet (logged at debug); unreadable or corrupt
    /// documents log a warning. Both count towards
    /// [`MAPS_LOAD_FAILURES_TOTAL`](telemetry::MAPS_LOAD_FAILURES_TOTAL).
    pub fn load(&self) -> LightingMaps {
        match self.try_load() {
            Ok(maps) => {
                info!(source = %self.describe(), empty = maps.is_empty(), "lighting maps loaded");
                maps
            }
            Err(LightPromptError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(source = %self.describe(), "lighting maps not found, using empty maps");
                record_failure("missing");
                LightingMaps::empty()
            }
            Err(LightPromptError::Io(e)) => {
                warn!(source = %self.describe(), error = %e, "failed to read lighting maps");
                record_failure("io");
                LightingMaps::empty()
            }
            Err(e) => {
                warn!(source = %self.describe(), error = %e, "corrupt lighting maps");
                record_failure("parse");
                LightingMaps::empty()
            }
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Embedded => "embedded".to_string(),
            Self::Path(path) => path.display().to_string(),
            Self::Inline(_) => "inline".to_string(),
            Self::Empty => "empty".to_string(),
        }
    }
}

fn record_failure(reason: &'static str) {
    metrics::counter!(telemetry::MAPS_LOAD_FAILURES_TOTAL, "reason" => reason).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::RangeSection;

    #[test]
    fn default_source_is_embedded() {
        assert_eq!(MapSource::default(), MapSource::Embedded);
        assert!(!MapSource::default().load().is_empty());
    }

    #[test]
    fn inline_source_parses() {
        let source = MapSource::inline(r#"{"azimuth_ranges": {"0": "front"}}"#);
        let maps = source.try_load().unwrap();
        assert_eq!(maps.resolve(10.0, RangeSection::Azimuth).as_str(), Some("front"));
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = MapSource::path(dir.path().join("lighting_maps.json"));
        assert!(matches!(source.try_load(), Err(LightPromptError::Io(_))));
        assert!(source.load().is_empty());
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lighting_maps.json");
        std::fs::write(&path, "{ \"colors\": ").unwrap();
        let source = MapSource::path(&path);
        assert!(matches!(source.try_load(), Err(LightPromptError::Json(_))));
        assert!(source.load().is_empty());
    }

    #[test]
    fn file_source_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lighting_maps.json");
        std::fs::write(&path, r##"{"colors": {"#00FF00": "green"}}"##).unwrap();
        let maps = MapSource::path(&path).load();
        assert_eq!(maps.match_color_name("#00EE00", 1.0).as_str(), Some("green light"));
    }

    #[test]
    fn empty_source_is_empty() {
        assert!(MapSource::Empty.load().is_empty());
    }
}
