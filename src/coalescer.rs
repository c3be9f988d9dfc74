//! Rate limiting between raw scroll signals and window recomputation.
//!
//! Hosts can deliver a scroll position for every pixel moved. [`ScrollCoalescer`] lets the first
//! signal of a burst through immediately, then holds only the most recent position until the
//! interval elapses:
//!
//! ```
//! use windowed_list::ScrollCoalescer;
//!
//! let mut c = ScrollCoalescer::new(16);
//! assert_eq!(c.push(10.0, 0), Some(10.0)); // applied immediately
//! assert_eq!(c.push(20.0, 4), None); // pending
//! assert_eq!(c.push(30.0, 8), None); // supersedes 20.0
//! assert_eq!(c.deadline(), Some(16));
//! assert_eq!(c.poll(12), None);
//! assert_eq!(c.poll(16), Some(30.0)); // the final position is never dropped
//! assert_eq!(c.poll(40), None);
//! ```
//!
//! Time is injected by the caller as milliseconds from any monotonic origin.

pub const DEFAULT_SCROLL_INTERVAL_MS: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCoalescer {
    interval_ms: u64,
    last_emit_ms: Option<u64>,
    pending: Option<f64>,
}

impl Default for ScrollCoalescer {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_INTERVAL_MS)
    }
}

impl ScrollCoalescer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_emit_ms: None,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    pub fn pending(&self) -> Option<f64> {
        self.pending
    }

    fn window_open(&self, now_ms: u64) -> bool {
        match self.last_emit_ms {
            Some(last) => now_ms.saturating_sub(last) < self.interval_ms,
            None => false,
        }
    }

    fn emit(&mut self, offset: f64, now_ms: u64) -> f64 {
        self.pending = None;
        self.last_emit_ms = Some(now_ms);
        offset
    }

    /// Feeds a raw scroll position.
    ///
    /// Returns the offset to apply now, or `None` if it was deferred.
    pub fn push(&mut self, offset: f64, now_ms: u64) -> Option<f64> {
        if self.window_open(now_ms) {
            wtrace!(offset, now_ms, "coalescer: deferred");
            self.pending = Some(offset);
            return None;
        }
        Some(self.emit(offset, now_ms))
    }

    /// Releases the pending offset once the interval has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<f64> {
        let offset = self.pending?;
        if self.window_open(now_ms) {
            return None;
        }
        Some(self.emit(offset, now_ms))
    }

    /// Applies a programmatic offset, bypassing the interval.
    ///
    /// Any pending offset is superseded and a new interval starts.
    pub fn force(&mut self, offset: f64, now_ms: u64) -> f64 {
        self.emit(offset, now_ms)
    }

    /// When [`Self::poll`] will release the pending offset, if there is one.
    pub fn deadline(&self) -> Option<u64> {
        self.pending?;
        Some(
            self.last_emit_ms
                .map_or(0, |last| last.saturating_add(self.interval_ms)),
        )
    }

    /// Drops the pending offset without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
