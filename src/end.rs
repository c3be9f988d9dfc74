/// Decides when the viewport has reached the tail of the collection.
///
/// Fires at most once per threshold crossing: after firing it stays disarmed until the
/// collection grows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EndDetector {
    fired: bool,
    count: usize,
}

impl EndDetector {
    pub fn new(count: usize) -> Self {
        Self {
            fired: false,
            count,
        }
    }

    pub fn is_armed(&self) -> bool {
        !self.fired
    }

    /// Tracks the collection length; growth re-arms the detector.
    pub fn set_count(&mut self, count: usize) {
        if count > self.count {
            self.fired = false;
        }
        self.count = count;
    }

    /// Returns `true` exactly when the end callback should run.
    pub fn check(
        &mut self,
        scroll_offset: f64,
        viewport_length: f64,
        total_extent: f64,
        threshold: f64,
    ) -> bool {
        if self.fired || viewport_length.is_nan() || viewport_length <= 0.0 {
            return false;
        }
        if scroll_offset + viewport_length >= total_extent - threshold {
            self.fired = true;
            wdebug!(
                scroll_offset,
                viewport_length,
                total_extent,
                count = self.count,
                "end of list reached"
            );
            return true;
        }
        false
    }
}
