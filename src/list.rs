use std::sync::Arc;

use crate::coalescer::ScrollCoalescer;
use crate::error::Result;
use crate::tween::{ScrollBehavior, Tween};
use crate::window::ListWindow;
use crate::{Align, ViewportState, VisibleItem, WindowRange, WindowedListOptions};

#[derive(Clone, Copy, Debug)]
struct ScrollAnimation {
    tween: Tween,
    index: usize,
    align: Align,
}

/// A windowed list over a caller-owned collection.
///
/// This wraps a [`ListWindow`] and runs the whole pipeline:
/// raw scroll signal → [`ScrollCoalescer`] → viewport state → window range → `render_item` for
/// each index in the range. Programmatic navigation is a forced input to the same pipeline.
///
/// It holds no UI objects. Hosts drive it by calling:
/// - `on_scroll` when the scroll container reports a new position;
/// - `tick(now_ms)` at [`WindowedList::deadline`] and on every frame while
///   [`WindowedList::is_animating`];
/// - `report_measured_size` when a rendered item's real size is known (dynamic mode).
///
/// The offset returned by `scroll_to_index` (and the offsets returned while animating) is where
/// the host should move its real scroll container. Echoes of those positions are ignored.
pub struct WindowedList<T, V> {
    options: WindowedListOptions<T, V>,
    window: ListWindow,
    coalescer: ScrollCoalescer,
    animation: Option<ScrollAnimation>,
    range: WindowRange,
}

impl<T: Send + Sync + 'static, V> WindowedList<T, V> {
    /// Creates the list and computes the initial window.
    ///
    /// If the initial viewport already reaches the end of the collection, `on_end_reached` fires
    /// during construction.
    pub fn new(options: WindowedListOptions<T, V>) -> Self {
        let window = ListWindow::new(options.window_options());
        let coalescer = ScrollCoalescer::new(options.scroll_interval_ms);
        let mut list = Self {
            options,
            window,
            coalescer,
            animation: None,
            range: WindowRange::empty(),
        };
        list.recompute();
        list
    }

    pub fn options(&self) -> &WindowedListOptions<T, V> {
        &self.options
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.options.items
    }

    pub fn len(&self) -> usize {
        self.options.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.items.is_empty()
    }

    /// The underlying count-based engine.
    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    /// The range computed by the latest recomputation.
    pub fn window_range(&self) -> WindowRange {
        self.range
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_offset()
    }

    pub fn total_extent(&self) -> f64 {
        self.window.total_extent()
    }

    pub fn offset_of(&self, index: usize) -> f64 {
        self.window.offset_of(index)
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.window.viewport_state()
    }

    pub fn restore_viewport_state(&mut self, state: ViewportState) -> WindowRange {
        self.cancel_animation();
        self.coalescer.cancel();
        self.window.restore_viewport_state(state);
        self.recompute()
    }

    /// Feeds a raw scroll position from the host.
    ///
    /// Returns the new range when a recomputation ran, `None` when the signal was deferred by the
    /// coalescer or did not move the viewport. A user scroll cancels any running animation.
    pub fn on_scroll(&mut self, offset: f64, now_ms: u64) -> Option<WindowRange> {
        let unchanged = offset.max(0.0) == self.window.scroll_offset();
        if unchanged && (self.animation.is_some() || self.coalescer.pending().is_none()) {
            return None;
        }
        self.cancel_animation();
        let offset = self.coalescer.push(offset, now_ms)?;
        Some(self.apply_offset(offset))
    }

    /// Advances deferred work: the coalescer's pending offset, or one animation frame.
    ///
    /// Returns the new range when a recomputation ran.
    pub fn tick(&mut self, now_ms: u64) -> Option<WindowRange> {
        let Some(mut animation) = self.animation else {
            let offset = self.coalescer.poll(now_ms)?;
            return Some(self.apply_offset(offset));
        };

        // Measurements taken while animating can move the destination.
        if let Ok(target) = self
            .window
            .scroll_to_index_offset(animation.index, animation.align)
        {
            animation.tween.to = target;
        }
        let offset = animation.tween.sample(now_ms);
        let offset = self.coalescer.force(offset, now_ms);
        self.animation = if animation.tween.is_done(now_ms) {
            None
        } else {
            Some(animation)
        };
        Some(self.apply_offset(offset))
    }

    /// When the host should call [`Self::tick`] next to release a deferred scroll position.
    ///
    /// While animating, the host should tick every frame instead.
    pub fn deadline(&self) -> Option<u64> {
        self.coalescer.deadline()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// Scrolls so that `index` is in view.
    ///
    /// Returns the (clamped) target offset the host should scroll its container to. Fails with
    /// [`crate::WindowError::OutOfRange`] without any state change when `index` is not in the
    /// collection.
    pub fn scroll_to_index(
        &mut self,
        index: usize,
        align: Align,
        behavior: ScrollBehavior,
        now_ms: u64,
    ) -> Result<f64> {
        let target = self.window.scroll_to_index_offset(index, align)?;
        wtrace!(index, target, now_ms, "scroll_to_index");
        match behavior {
            ScrollBehavior::Instant => {
                self.animation = None;
                let offset = self.coalescer.force(target, now_ms);
                self.apply_offset(offset);
            }
            ScrollBehavior::Smooth {
                duration_ms,
                easing,
            } => {
                self.coalescer.cancel();
                let from = self.window.scroll_offset();
                self.animation = Some(ScrollAnimation {
                    tween: Tween::new(from, target, now_ms, duration_ms, easing),
                    index,
                    align,
                });
            }
        }
        Ok(target)
    }

    /// Jumps to an arbitrary offset, clamped to the scrollable range.
    pub fn scroll_to_offset(&mut self, offset: f64, now_ms: u64) -> f64 {
        self.animation = None;
        let target = self.window.clamp_scroll_offset(offset);
        let offset = self.coalescer.force(target, now_ms);
        self.apply_offset(offset);
        offset
    }

    pub fn set_viewport_length(&mut self, viewport_length: f64) -> WindowRange {
        self.window.set_viewport_length(viewport_length);
        self.recompute()
    }

    /// Replaces the collection.
    ///
    /// A handle to the same allocation is a no-op. Any other collection drops every cached
    /// measurement; if it is longer than the previous one, end-of-list detection re-arms.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) -> WindowRange {
        let items = items.into();
        if Arc::ptr_eq(&items, &self.options.items) {
            return self.range;
        }
        wdebug!(
            from = self.options.items.len(),
            to = items.len(),
            "WindowedList::set_items"
        );
        self.options.items = items;
        let model = self.options.item_size.bind(&self.options.items);
        self.window.reset_collection(model, self.options.items.len());
        self.recompute()
    }

    /// Feeds the measured size of a rendered item into the size cache (dynamic mode only).
    pub fn report_measured_size(&mut self, index: usize, size: f64) -> Result<()> {
        self.window.measure(index, size)?;
        self.recompute();
        Ok(())
    }

    /// Applies a batch of measurements with a single recomputation.
    ///
    /// Invalid entries are logged and skipped. Returns how many were accepted.
    pub fn report_measured_sizes(
        &mut self,
        measurements: impl IntoIterator<Item = (usize, f64)>,
    ) -> usize {
        let accepted = self.window.measure_many(measurements);
        if accepted > 0 {
            self.recompute();
        }
        accepted
    }

    /// Like [`Self::report_measured_size`], but keeps the visible content in place when the item
    /// sits above the viewport.
    ///
    /// Returns the shift applied to the scroll offset; the host should move its container by the
    /// same amount.
    pub fn resize_item(&mut self, index: usize, size: f64) -> Result<f64> {
        let shift = self.window.resize_item(index, size)?;
        self.recompute();
        Ok(shift)
    }

    /// Invokes `render_item` once per index of the current window.
    pub fn render(&self) -> Vec<V> {
        let mut out = Vec::with_capacity(self.range.len());
        self.render_into(&mut out);
        out
    }

    /// Appends the rendered window to `out`. Reuse the buffer across frames to avoid allocations.
    pub fn render_into(&self, out: &mut Vec<V>) {
        let render_item = &self.options.render_item;
        for index in self.range.indexes() {
            if let Some(item) = self.options.items.get(index) {
                out.push(render_item(item, index));
            }
        }
    }

    /// Calls `f` with the placement of every item in the current window.
    pub fn for_each_visible_item(&self, f: impl FnMut(VisibleItem)) {
        self.window.for_each_item_in(self.range, f);
    }

    fn apply_offset(&mut self, offset: f64) -> WindowRange {
        self.window.set_scroll_offset(offset);
        self.recompute()
    }

    fn recompute(&mut self) -> WindowRange {
        self.range = self.window.window_range();
        if self.window.check_end_reached() {
            if let Some(on_end_reached) = &self.options.on_end_reached {
                on_end_reached();
            }
        }
        self.range
    }
}

impl<T, V> Clone for WindowedList<T, V> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            window: self.window.clone(),
            coalescer: self.coalescer,
            animation: self.animation,
            range: self.range,
        }
    }
}

impl<T, V> core::fmt::Debug for WindowedList<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowedList")
            .field("options", &self.options)
            .field("window", &self.window)
            .field("coalescer", &self.coalescer)
            .field("animation", &self.animation)
            .field("range", &self.range)
            .finish()
    }
}
