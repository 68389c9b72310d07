//! Per-client request window tracking.

/// Chronological record of admitted-request timestamps for one client key.
///
/// Timestamps are milliseconds since the Unix epoch. Only recency matters:
/// entries outside the trailing window are dropped on every touch, so a
/// window holds at most the configured request limit plus whatever has not
/// been pruned yet.
#[derive(Debug, Clone, Default)]
pub struct Window {
    timestamps: Vec<i64>,
}

impl Window {
    /// Create an empty window.
    pub fn new() -> Self {
        Self {
            timestamps: Vec::new(),
        }
    }

    /// Drop every timestamp that has fallen out of the trailing window.
    ///
    /// A timestamp exactly `window_ms` old counts as expired.
    pub fn prune(&mut self, now: i64, window_ms: u64) {
        let cutoff = now - window_ms as i64;
        self.timestamps.retain(|&ts| ts > cutoff);
    }

    /// Record an admitted request at `now`.
    pub fn record(&mut self, now: i64) {
        self.timestamps.push(now);
    }

    /// Number of surviving timestamps.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the window holds no timestamps.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Oldest surviving timestamp, if any.
    pub fn oldest(&self) -> Option<i64> {
        self.timestamps.iter().min().copied()
    }
}
