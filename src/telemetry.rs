//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `lightprompt_` and counters end in `_total`.

/// Prompt requests answered from the result cache.
pub const CACHE_HITS_TOTAL: &str = "lightprompt_cache_hits_total";

/// Prompt requests that had to be assembled.
pub const CACHE_MISSES_TOTAL: &str = "lightprompt_cache_misses_total";

/// Entries dropped from the result cache to stay within capacity.
pub const CACHE_EVICTIONS_TOTAL: &str = "lightprompt_cache_evictions_total";

/// Lighting maps loads that fell back to an empty configuration.
///
/// Labels: `reason` ("missing" | "io" | "parse").
pub const MAPS_LOAD_FAILURES_TOTAL: &str = "lightprompt_maps_load_failures_total";
