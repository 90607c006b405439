//! Caching subsystem.
//!
//! - [`FifoCache`]: a plain bounded map with oldest-first eviction.
//! - [`ResultCache`]: the thread-safe memo table the engine keeps assembled
//!   prompts in, keyed on the full request. Hit, miss and eviction counts
//!   are emitted as metrics (see [`telemetry`](crate::telemetry)).

mod fifo;
mod result;

pub use fifo::FifoCache;
pub use result::{CacheConfig, DEFAULT_MAX_ENTRIES, ResultCache};
