//! Public types for the lightprompt API.

mod fragment;
mod light;
mod output;
mod request;

pub use fragment::Fragment;
pub use light::LightType;
pub use output::{LightingOutput, UiMetadata};
pub use request::{DEFAULT_LIGHT_COLOR, LightingRequest, RequestKey};
