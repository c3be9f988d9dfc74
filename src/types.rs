use core::ops::RangeInclusive;

/// Where the target item should land inside the viewport after a programmatic scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Item start at the viewport start.
    #[default]
    Start,
    Center,
    /// Item end at the viewport end.
    End,
    /// Move as little as possible; no-op if the item is already fully visible.
    Auto,
}

/// How much to render beyond the strictly visible band.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overscan {
    /// A number of extra items on each side.
    Items(usize),
    /// An extra extent (in scroll-axis units) on each side.
    Extent(f64),
}

impl Default for Overscan {
    fn default() -> Self {
        Self::Items(2)
    }
}

/// The inclusive index range that must be rendered.
///
/// When the collection is empty, both indexes are 0 and [`WindowRange::is_empty`] is `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    /// Inclusive.
    pub end_index: usize,
    /// Cumulative extent of every item before `start_index`.
    pub leading_offset: f64,
    /// Collection length this range was computed against.
    pub count: usize,
}

impl WindowRange {
    /// The range over an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` when nothing should be rendered.
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.start_index > self.end_index
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end_index - self.start_index + 1
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        !self.is_empty() && index >= self.start_index && index <= self.end_index
    }

    /// Iterates the indexes to render (nothing when empty).
    pub fn indexes(&self) -> RangeInclusive<usize> {
        if self.is_empty() {
            #[allow(clippy::reversed_empty_ranges)]
            return 1..=0;
        }
        self.start_index..=self.end_index
    }
}

/// One rendered item with its placement along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem {
    pub index: usize,
    /// Start offset from the top of the full-extent placeholder.
    pub offset: f64,
    pub size: f64,
}

impl VisibleItem {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}
