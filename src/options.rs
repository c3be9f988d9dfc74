use std::sync::Arc;

use crate::coalescer::DEFAULT_SCROLL_INTERVAL_MS;
use crate::size::{ItemSize, SizeModel};
use crate::types::Overscan;

/// Renders one item. The engine never inspects the returned value.
pub type RenderItem<T, V> = Arc<dyn Fn(&T, usize) -> V + Send + Sync>;

/// Fired when the viewport nears the tail of the collection.
pub type OnEndReached = Arc<dyn Fn() + Send + Sync>;

/// Configuration for the count-based [`crate::ListWindow`].
#[derive(Clone, Debug)]
pub struct WindowOptions {
    pub count: usize,
    pub size: SizeModel,
    /// Extent of the visible window along the scroll axis.
    pub viewport_length: f64,
    pub overscan: Overscan,
    /// Distance from the end at which end-of-list detection triggers.
    pub near_end_threshold: f64,
    pub initial_offset: f64,
}

impl WindowOptions {
    pub fn new(count: usize, size: SizeModel) -> Self {
        Self {
            count,
            size,
            viewport_length: 0.0,
            overscan: Overscan::default(),
            near_end_threshold: 0.0,
            initial_offset: 0.0,
        }
    }

    /// Every item has extent `item_size`.
    pub fn fixed(count: usize, item_size: f64) -> Self {
        Self::new(count, SizeModel::Fixed(item_size))
    }

    /// Items are estimated by `estimate(index)` until measured.
    pub fn dynamic(count: usize, estimate: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(count, SizeModel::dynamic(estimate))
    }

    pub fn with_viewport_length(mut self, viewport_length: f64) -> Self {
        self.viewport_length = viewport_length;
        self
    }

    pub fn with_overscan(mut self, overscan: Overscan) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_near_end_threshold(mut self, near_end_threshold: f64) -> Self {
        self.near_end_threshold = near_end_threshold;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: f64) -> Self {
        self.initial_offset = initial_offset;
        self
    }
}

/// Configuration for [`crate::WindowedList`].
///
/// Closures are stored in `Arc`s so the options are cheap to clone.
pub struct WindowedListOptions<T, V> {
    /// The caller-owned collection. The engine only reads it.
    pub items: Arc<[T]>,
    pub item_size: ItemSize<T>,
    pub viewport_length: f64,
    pub overscan: Overscan,
    pub near_end_threshold: f64,
    pub render_item: RenderItem<T, V>,
    pub on_end_reached: Option<OnEndReached>,
    /// Minimum time between two scroll-driven recomputations.
    pub scroll_interval_ms: u64,
    pub initial_offset: f64,
}

impl<T, V> WindowedListOptions<T, V> {
    pub fn new(
        items: impl Into<Arc<[T]>>,
        item_size: ItemSize<T>,
        render_item: impl Fn(&T, usize) -> V + Send + Sync + 'static,
    ) -> Self {
        Self {
            items: items.into(),
            item_size,
            viewport_length: 0.0,
            overscan: Overscan::default(),
            near_end_threshold: 0.0,
            render_item: Arc::new(render_item),
            on_end_reached: None,
            scroll_interval_ms: DEFAULT_SCROLL_INTERVAL_MS,
            initial_offset: 0.0,
        }
    }

    pub fn with_viewport_length(mut self, viewport_length: f64) -> Self {
        self.viewport_length = viewport_length;
        self
    }

    pub fn with_overscan(mut self, overscan: Overscan) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_near_end_threshold(mut self, near_end_threshold: f64) -> Self {
        self.near_end_threshold = near_end_threshold;
        self
    }

    pub fn with_on_end_reached(
        mut self,
        on_end_reached: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = on_end_reached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_scroll_interval_ms(mut self, scroll_interval_ms: u64) -> Self {
        self.scroll_interval_ms = scroll_interval_ms;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: f64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    /// The count-based options for the current collection.
    pub(crate) fn window_options(&self) -> WindowOptions
    where
        T: Send + Sync + 'static,
    {
        WindowOptions {
            count: self.items.len(),
            size: self.item_size.bind(&self.items),
            viewport_length: self.viewport_length,
            overscan: self.overscan,
            near_end_threshold: self.near_end_threshold,
            initial_offset: self.initial_offset,
        }
    }
}

impl<T, V> Clone for WindowedListOptions<T, V> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            item_size: self.item_size.clone(),
            viewport_length: self.viewport_length,
            overscan: self.overscan,
            near_end_threshold: self.near_end_threshold,
            render_item: Arc::clone(&self.render_item),
            on_end_reached: self.on_end_reached.clone(),
            scroll_interval_ms: self.scroll_interval_ms,
            initial_offset: self.initial_offset,
        }
    }
}

impl<T, V> core::fmt::Debug for WindowedListOptions<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowedListOptions")
            .field("count", &self.items.len())
            .field("item_size", &self.item_size)
            .field("viewport_length", &self.viewport_length)
            .field("overscan", &self.overscan)
            .field("near_end_threshold", &self.near_end_threshold)
            .field("scroll_interval_ms", &self.scroll_interval_ms)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
