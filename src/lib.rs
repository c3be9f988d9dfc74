//! A headless windowed list engine.
//!
//! Given a long ordered collection, a viewport length and either a fixed item size or a per-item
//! estimator, this crate decides which items must be rendered, where they sit along the scroll
//! axis, and when the viewport nears the end of the collection.
//!
//! The core pieces:
//! - prefix sums over item sizes (fixed mode uses closed forms) for `O(log n)` offsets and
//!   offset → index lookups;
//! - a position-indexed cache of measured sizes, dropped when the collection is replaced;
//! - overscanned window ranges that never leave visible gaps;
//! - a scroll coalescer that bounds recomputation frequency without losing the final position;
//! - scroll-to-index navigation (instant or tweened) routed through the same pipeline;
//! - end-of-list detection that fires once per crossing.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport length and scroll positions;
//! - a `render_item(&item, index)` callback;
//! - measured sizes for dynamically sized items;
//! - a clock (`now_ms`) for coalescing and animations.
//!
//! ```
//! use windowed_list::{ItemSize, WindowedList, WindowedListOptions};
//!
//! let items: Vec<u32> = (0..1000).collect();
//! let options = WindowedListOptions::new(items, ItemSize::Fixed(50.0), |item: &u32, _| *item)
//!     .with_viewport_length(400.0);
//! let mut list = WindowedList::new(options);
//!
//! let range = list.on_scroll(1000.0, 0).unwrap();
//! assert_eq!((range.start_index, range.end_index), (18, 30));
//! assert_eq!(list.render().first(), Some(&18));
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod cache;
mod coalescer;
mod end;
mod error;
mod extent;
mod fenwick;
mod list;
mod options;
mod size;
mod state;
mod tween;
mod types;
mod window;


pub use cache::SizeCache;
pub use coalescer::{DEFAULT_SCROLL_INTERVAL_MS, ScrollCoalescer};
pub use end::EndDetector;
pub use error::{Result, WindowError};
pub use extent::ExtentIndex;
pub use list::WindowedList;
pub use options::{OnEndReached, RenderItem, WindowOptions, WindowedListOptions};
pub use size::{ItemSize, ItemSizeEstimator, SizeEstimator, SizeModel};
pub use state::ViewportState;
pub use tween::{Easing, ScrollBehavior, Tween};
pub use types::{Align, Overscan, VisibleItem, WindowRange};
pub use window::ListWindow;
