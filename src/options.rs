use alloc::vec::Vec;

use crate::throttle::MIN_REFRESH_INTERVAL_MS;

/// Configuration for [`crate::Recycler`].
#[derive(Clone, Debug)]
pub struct RecyclerOptions<N> {
    /// How many levels below each traversal root are registered. The root's own children count
    /// as depth 1; a value of 0 (or below) registers nothing from the traversal.
    pub depth: i32,

    /// Refresh floor in milliseconds. Clamped to [`MIN_REFRESH_INTERVAL_MS`]: even a forced
    /// low value never evaluates more than once per frame at 60 Hz.
    pub refresh_interval_ms: f64,

    /// Extra root nodes traversed alongside the scroll content (e.g. a sibling layer that
    /// scrolls in lockstep with the content).
    pub extra_roots: Vec<N>,

    /// Delay before the initial registry build after [`crate::Recycler::attach`], giving layout
    /// a chance to settle first.
    pub warmup_delay_ms: u64,

    /// Delay for the follow-up forced refresh scheduled after a content resize, so a burst of
    /// relayout events collapses into one late pass.
    pub settle_delay_ms: u64,
}

impl<N> Default for RecyclerOptions<N> {
    fn default() -> Self {
        Self {
            depth: 3,
            refresh_interval_ms: MIN_REFRESH_INTERVAL_MS,
            extra_roots: Vec::new(),
            warmup_delay_ms: 500,
            settle_delay_ms: 50,
        }
    }
}

impl<N> RecyclerOptions<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the refresh floor in seconds, clamped to 1/60 s.
    pub fn with_refresh_interval(mut self, seconds: f64) -> Self {
        self.refresh_interval_ms = (seconds * 1000.0).max(MIN_REFRESH_INTERVAL_MS);
        self
    }

    pub fn with_extra_roots(mut self, extra_roots: Vec<N>) -> Self {
        self.extra_roots = extra_roots;
        self
    }

    pub fn with_warmup_delay_ms(mut self, warmup_delay_ms: u64) -> Self {
        self.warmup_delay_ms = warmup_delay_ms;
        self
    }

    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }
}
