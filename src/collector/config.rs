//! Configuration for collection passes

use std::time::Duration;

/// Knobs for one collection pass.
///
/// Injected into the collector rather than living in process-wide state, so
/// concurrent top-level requests can be tuned or isolated independently.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// API root; overridable for GitHub Enterprise and for tests.
    pub base_url: String,
    /// Cap on simultaneous in-flight page and tag fetches (per pool).
    pub concurrency_limit: usize,
    /// Items per page for commit body retrieval (GitHub API max is 100).
    pub page_size: u32,
    /// Serialized delay applied before dispatching each concurrent request
    /// so newly-admitted bursts are staggered, not fired simultaneously.
    pub pacing_delay: Duration,
    /// Lookback window bounding "recent" commit retrieval.
    pub recent_window_days: i64,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            concurrency_limit: 10,
            page_size: 100,
            pacing_delay: Duration::from_millis(100),
            recent_window_days: 182, // about six months
            timeout: Duration::from_secs(30),
        }
    }
}
