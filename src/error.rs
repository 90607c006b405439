//! lightprompt error types
//!
//! Errors only surface from the strict loaders. Prompt generation itself
//! never fails: the engine turns every error here into degraded output.

/// lightprompt error types
#[derive(Debug, thiserror::Error)]
pub enum LightPromptError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The lighting maps document parsed but has the wrong shape
    /// (e.g. the top level is an array).
    #[error("invalid lighting maps: {0}")]
    InvalidMaps(String),

    #[error("unknown light type: {0}")]
    UnknownLightType(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for lightprompt operations
pub type Result<T> = std::result::Result<T, LightPromptError>;
