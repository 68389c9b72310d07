//! Core admission controller implementation.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::LimiterConfig;

use super::window::Window;

/// Outcome of a single admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Whether the request may proceed
    pub admitted: bool,
    /// Admissions left in the current window, counting the one just granted
    pub remaining: usize,
    /// Seconds to wait before retrying; 0 when admitted
    pub retry_after_secs: u64,
}

/// Sliding-window admission controller.
///
/// Tracks recent-request timestamps per client key and admits at most
/// `max_requests` within any trailing `window_ms` interval. The struct is
/// thread-safe and meant to be shared (for example behind an `Arc`) by all
/// request handlers in a process; each check is atomic with respect to its
/// key, so two racing checks can never both take the last slot.
pub struct RateLimiter {
    /// Request windows indexed by client key
    store: DashMap<String, Window>,
    config: LimiterConfig,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Create a controller reading the system clock.
    pub fn new(config: LimiterConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Create a controller with an injected clock.
    pub fn with_clock(config: LimiterConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: DashMap::new(),
            config,
            clock,
        }
    }

    /// Decide whether a request from `client_key` may proceed.
    ///
    /// Admitted requests count against the key's window; rejected requests
    /// do not. On the admitted path, once the tracked-key count exceeds the
    /// configured high-water mark, a full pass drops keys with no activity
    /// inside the current window.
    pub fn check(&self, client_key: &str) -> Decision {
        let now = self.clock.now_millis();

        trace!(client = client_key, "Checking admission");

        let decision = {
            let mut window = self
                .store
                .entry(client_key.to_string())
                .or_insert_with(|| {
                    debug!(client = client_key, "Tracking new client");
                    Window::new()
                });

            window.prune(now, self.config.window_ms);

            if window.len() >= self.config.max_requests {
                let retry_after_secs = match window.oldest() {
                    Some(oldest) => ceil_secs(oldest + self.config.window_ms as i64 - now),
                    // Only reachable with an unvalidated zero-request config;
                    // the full window is the only honest hint.
                    None => ceil_secs(self.config.window_ms as i64),
                };

                debug!(
                    client = client_key,
                    retry_after_secs, "Rate limit exceeded"
                );

                Decision {
                    admitted: false,
                    remaining: 0,
                    retry_after_secs,
                }
            } else {
                window.record(now);

                Decision {
                    admitted: true,
                    remaining: self.config.max_requests - window.len(),
                    retry_after_secs: 0,
                }
            }
        };

        // The entry guard must be dropped before compaction walks the whole
        // table, or the pass would deadlock on this key's shard.
        if decision.admitted && self.store.len() > self.config.compaction_threshold {
            self.compact(now);
        }

        decision
    }

    /// Prune every window and drop keys left empty.
    ///
    /// Bounds memory growth from one-shot or abandoned clients.
    fn compact(&self, now: i64) {
        let before = self.store.len();

        self.store.retain(|_, window| {
            window.prune(now, self.config.window_ms);
            !window.is_empty()
        });

        debug!(
            before,
            after = self.store.len(),
            "Compacted idle client windows"
        );
    }

    /// Number of client keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.store.len()
    }

    /// Drop all tracked state.
    ///
    /// This is primarily useful for testing.
    pub fn clear(&self) {
        self.store.clear();
    }
}

/// Round a millisecond duration up to whole seconds so the reported wait is
/// never understated.
fn ceil_secs(millis: i64) -> u64 {
    (millis.max(0) as u64).div_ceil(1000)
}
