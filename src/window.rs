use std::cmp;

use crate::cache::SizeCache;
use crate::end::EndDetector;
use crate::error::{Result, WindowError};
use crate::extent::ExtentIndex;
use crate::size::SizeModel;
use crate::{Align, Overscan, ViewportState, VisibleItem, WindowOptions, WindowRange};

/// A headless, count-based windowing engine.
///
/// This type knows nothing about items or visuals:
/// - the host drives it with viewport lengths and scroll offsets;
/// - it answers which indexes to render and where they sit along the scroll axis;
/// - dynamic sizes are fed back through [`ListWindow::measure`].
///
/// For a pipeline that owns the render callback, coalesces scroll events and fires the
/// end-of-list callback, see [`crate::WindowedList`].
#[derive(Clone, Debug)]
pub struct ListWindow {
    extent: ExtentIndex,
    viewport_length: f64,
    scroll_offset: f64,
    overscan: Overscan,
    near_end_threshold: f64,
    end: EndDetector,
}

impl ListWindow {
    pub fn new(options: WindowOptions) -> Self {
        wdebug!(
            count = options.count,
            fixed = options.size.is_fixed(),
            viewport_length = options.viewport_length,
            "ListWindow::new"
        );
        Self {
            extent: ExtentIndex::new(options.size, options.count),
            viewport_length: options.viewport_length,
            scroll_offset: sanitize_offset(options.initial_offset),
            overscan: options.overscan,
            near_end_threshold: options.near_end_threshold,
            end: EndDetector::new(options.count),
        }
    }

    pub fn count(&self) -> usize {
        self.extent.count()
    }

    pub fn size_model(&self) -> &SizeModel {
        self.extent.model()
    }

    pub fn size_cache(&self) -> &SizeCache {
        self.extent.cache()
    }

    pub fn extent(&self) -> &ExtentIndex {
        &self.extent
    }

    pub fn viewport_length(&self) -> f64 {
        self.viewport_length
    }

    pub fn set_viewport_length(&mut self, viewport_length: f64) {
        self.viewport_length = viewport_length;
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset reported by the host. Negative and NaN offsets become 0.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = sanitize_offset(offset);
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: f64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            scroll_offset: self.scroll_offset,
            viewport_length: self.viewport_length,
        }
    }

    pub fn restore_viewport_state(&mut self, state: ViewportState) {
        self.viewport_length = state.viewport_length;
        self.set_scroll_offset_clamped(state.scroll_offset);
    }

    pub fn overscan(&self) -> Overscan {
        self.overscan
    }

    pub fn set_overscan(&mut self, overscan: Overscan) {
        self.overscan = overscan;
    }

    pub fn near_end_threshold(&self) -> f64 {
        self.near_end_threshold
    }

    pub fn set_near_end_threshold(&mut self, near_end_threshold: f64) {
        self.near_end_threshold = near_end_threshold;
    }

    pub fn size_of(&self, index: usize) -> Option<f64> {
        self.extent.size_of(index)
    }

    pub fn offset_of(&self, index: usize) -> f64 {
        self.extent.offset_of(index)
    }

    pub fn total_extent(&self) -> f64 {
        self.extent.total_extent()
    }

    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        self.extent.index_at_offset(offset)
    }

    pub fn item(&self, index: usize) -> Option<VisibleItem> {
        let size = self.extent.size_of(index)?;
        Some(VisibleItem {
            index,
            offset: self.extent.offset_of(index),
            size,
        })
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.extent.cache().contains(index)
    }

    pub fn max_scroll_offset(&self) -> f64 {
        max_scroll_for(self.total_extent(), self.viewport_length)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        sanitize_offset(offset).min(self.max_scroll_offset())
    }

    /// Changes the length of the same collection, keeping measurements for surviving indexes.
    ///
    /// Growth re-arms end-of-list detection.
    pub fn set_count(&mut self, count: usize) {
        if count == self.extent.count() {
            return;
        }
        wdebug!(from = self.extent.count(), to = count, "ListWindow::set_count");
        self.extent.set_count(count);
        self.end.set_count(count);
    }

    /// Switches to a different collection: every measurement is dropped.
    pub fn reset_collection(&mut self, model: SizeModel, count: usize) {
        self.extent.reset(model, count);
        self.end.set_count(count);
    }

    /// Drops every measurement and falls back to the size model.
    pub fn clear_measurements(&mut self) {
        self.extent.clear_measurements();
    }

    /// Records the measured size of an item (dynamic mode only).
    ///
    /// The scroll offset is left untouched. Use [`Self::resize_item`] to keep the visible content
    /// in place when an item above the viewport changes size.
    pub fn measure(&mut self, index: usize, size: f64) -> Result<()> {
        self.extent.measure(index, size).map(|_| ())
    }

    /// Applies several measurements, skipping invalid ones. Returns how many were accepted.
    pub fn measure_many(&mut self, measurements: impl IntoIterator<Item = (usize, f64)>) -> usize {
        let mut accepted = 0usize;
        for (index, size) in measurements {
            if self.extent.measure(index, size).is_ok() {
                accepted += 1;
            }
        }
        accepted
    }

    /// Records a measured size and, if the item starts before the scroll offset, shifts the scroll
    /// offset by the size change so the visible content does not jump.
    ///
    /// Returns the applied shift (0.0 when the offset was left alone).
    pub fn resize_item(&mut self, index: usize, size: f64) -> Result<f64> {
        let start = self.extent.offset_of(index);
        let delta = self.extent.measure(index, size)?;
        if delta == 0.0 || start >= self.scroll_offset {
            return Ok(0.0);
        }
        let prev = self.scroll_offset;
        self.scroll_offset = sanitize_offset(prev + delta);
        Ok(self.scroll_offset - prev)
    }

    /// The range to render for the current viewport, overscan included.
    pub fn window_range(&self) -> WindowRange {
        self.compute_range(self.scroll_offset, self.viewport_length, self.overscan)
    }

    pub fn window_range_for(&self, scroll_offset: f64, viewport_length: f64) -> WindowRange {
        self.compute_range(scroll_offset, viewport_length, self.overscan)
    }

    /// The strictly visible range (no overscan).
    pub fn visible_range(&self) -> WindowRange {
        self.compute_range(self.scroll_offset, self.viewport_length, Overscan::Items(0))
    }

    /// Calls `f` for every item of the current window, in order.
    pub fn for_each_visible_item(&self, f: impl FnMut(VisibleItem)) {
        self.for_each_item_in(self.window_range(), f);
    }

    pub fn collect_visible_items(&self, out: &mut Vec<VisibleItem>) {
        out.clear();
        self.for_each_visible_item(|it| out.push(it));
    }

    pub(crate) fn for_each_item_in(&self, range: WindowRange, mut f: impl FnMut(VisibleItem)) {
        let mut offset = range.leading_offset;
        for index in range.indexes() {
            let Some(size) = self.extent.size_of(index) else {
                return;
            };
            f(VisibleItem {
                index,
                offset,
                size,
            });
            offset += size;
        }
    }

    /// Computes the scroll offset that brings `index` into view with the given alignment.
    ///
    /// The target is clamped to the scrollable range.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> Result<f64> {
        let count = self.extent.count();
        let Some(size) = self.extent.size_of(index) else {
            return Err(WindowError::OutOfRange { index, len: count });
        };
        let start = self.extent.offset_of(index);
        let end = start + size;
        let view = self.viewport_length.max(0.0);

        let target = match align {
            Align::Start => start,
            Align::End => end - view,
            Align::Center => start + size / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = self.scroll_offset;
                if start >= cur && end <= cur + view {
                    cur
                } else if start < cur {
                    start
                } else {
                    end - view
                }
            }
        };

        Ok(self.clamp_scroll_offset(target))
    }

    /// Runs end-of-list detection against the current viewport.
    ///
    /// Returns `true` once per threshold crossing; growth of the collection re-arms it.
    pub fn check_end_reached(&mut self) -> bool {
        let total = self.extent.total_extent();
        self.end.check(
            self.scroll_offset,
            self.viewport_length,
            total,
            self.near_end_threshold,
        )
    }

    pub fn end_detection_armed(&self) -> bool {
        self.end.is_armed()
    }

    fn compute_range(
        &self,
        scroll_offset: f64,
        viewport_length: f64,
        overscan: Overscan,
    ) -> WindowRange {
        let count = self.extent.count();
        if count == 0 {
            return WindowRange::empty();
        }
        let last = count - 1;
        let view = viewport_length.max(0.0);
        let scroll = sanitize_offset(scroll_offset)
            .min(max_scroll_for(self.extent.total_extent(), view));

        let (start, end) = match self.extent.model() {
            SizeModel::Fixed(size) => {
                let extra = match overscan {
                    Overscan::Items(n) => n,
                    Overscan::Extent(margin) => extent_to_items(margin, *size),
                };
                let first = (scroll / size) as usize;
                let last_visible = ((scroll + view) / size) as usize;
                (
                    first.saturating_sub(extra),
                    last_visible.saturating_add(extra),
                )
            }
            SizeModel::Dynamic(_) => {
                let (margin, extra) = match overscan {
                    Overscan::Items(n) => (0.0, n),
                    Overscan::Extent(margin) => (margin.max(0.0), 0),
                };
                let band_start = (scroll - margin).max(0.0);
                let band_end = scroll + view + margin;
                let first = self.extent.index_at_offset(band_start).unwrap_or(0);
                // A band reaching past the content always ends at the last item.
                let last_visible = if band_end >= self.extent.total_extent() {
                    last
                } else {
                    self.extent.index_at_offset(band_end).unwrap_or(last)
                };
                (
                    first.saturating_sub(extra),
                    last_visible.saturating_add(extra),
                )
            }
        };

        let end = cmp::min(end, last);
        let start = cmp::min(start, end);
        wtrace!(scroll, view, start, end, "compute_range");
        WindowRange {
            start_index: start,
            end_index: end,
            leading_offset: self.extent.offset_of(start),
            count,
        }
    }
}

fn sanitize_offset(offset: f64) -> f64 {
    // f64::max ignores NaN.
    offset.max(0.0)
}

fn max_scroll_for(total: f64, viewport_length: f64) -> f64 {
    (total - viewport_length.max(0.0)).max(0.0)
}

fn extent_to_items(margin: f64, size: f64) -> usize {
    if margin.is_nan() || margin <= 0.0 || size.is_nan() || size <= 0.0 {
        return 0;
    }
    (margin / size).ceil() as usize
}
