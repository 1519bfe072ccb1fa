use crate::types::Point;

/// Hard refresh floor: never evaluate more than once per 60 Hz frame.
pub const MIN_REFRESH_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Upper bound on the adaptive interval: even a fully idle container re-evaluates within a
/// second of the last accepted refresh.
pub const MAX_REFRESH_INTERVAL_MS: f64 = 1000.0;

/// Scroll-speed to target-interval conversion: `interval_ms = SPEED_INTERVAL_FACTOR / speed`
/// with speed in content-units per second. Fast scrolling tolerates imprecise visibility (items
/// flash in/out briefly), so the interval shrinks toward the floor as speed grows.
const SPEED_INTERVAL_FACTOR: f64 = 5000.0;

/// Adaptive refresh gate.
///
/// State is committed only when a refresh is accepted; a rejected (too-early) call leaves it
/// untouched, so speed is always measured against the last pass that actually ran.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Throttle {
    last_refresh_ms: u64,
    last_pos: Point,
    speed: f64,
    interval_ms: f64,
}

impl Throttle {
    pub fn new() -> Self {
        Self {
            last_refresh_ms: 0,
            last_pos: Point::ZERO,
            speed: 0.0,
            interval_ms: MIN_REFRESH_INTERVAL_MS,
        }
    }

    /// Resets the reference position without accepting a refresh.
    pub fn seed(&mut self, now_ms: u64, pos: Point) {
        self.last_refresh_ms = now_ms;
        self.last_pos = pos;
    }

    /// Decides whether a refresh may run at `now_ms` and, if so, commits the new state.
    ///
    /// `force` bypasses the interval check but still commits, so the next throttled call
    /// measures elapsed time from this pass.
    pub fn gate(&mut self, now_ms: u64, pos: Point, horizontal: bool, floor_ms: f64, force: bool) -> bool {
        let elapsed_ms = now_ms.saturating_sub(self.last_refresh_ms) as f64;
        let distance = abs(if horizontal {
            (pos.x - self.last_pos.x) as f64
        } else {
            (pos.y - self.last_pos.y) as f64
        });
        // Zero elapsed time counts as infinite speed: the target interval collapses to the
        // floor and the call is rejected unless forced.
        let speed = if elapsed_ms > 0.0 {
            distance / (elapsed_ms / 1000.0)
        } else {
            f64::INFINITY
        };
        let target_ms = floor_ms.max((SPEED_INTERVAL_FACTOR / speed).min(MAX_REFRESH_INTERVAL_MS));

        if !force && elapsed_ms < target_ms {
            return false;
        }

        self.speed = speed;
        self.interval_ms = target_ms;
        self.last_refresh_ms = now_ms;
        self.last_pos = pos;
        true
    }

    /// Scroll speed observed at the last accepted refresh, in content-units per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Target interval derived at the last accepted refresh.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

// f64::abs lives in std, not core; keep the crate no_std-clean.
fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}
