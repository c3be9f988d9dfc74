use crate::cache::SizeCache;
use crate::error::{Result, WindowError};
use crate::fenwick::Fenwick;
use crate::size::{SizeModel, is_valid_size};

/// Cumulative offsets and total extent over a collection of `count` items.
///
/// Fixed mode answers every query in closed form. Dynamic mode keeps the effective size of each
/// item (measured if cached, estimated otherwise) in a Fenwick tree, so offsets, totals and
/// offset → index lookups are `O(log n)` and a measurement is an `O(log n)` update.
#[derive(Clone, Debug)]
pub struct ExtentIndex {
    model: SizeModel,
    count: usize,
    sizes: Vec<f64>, // effective sizes, dynamic mode only
    cache: SizeCache,
    sums: Fenwick,
}

impl ExtentIndex {
    pub fn new(model: SizeModel, count: usize) -> Self {
        let mut extent = Self {
            model,
            count,
            sizes: Vec::new(),
            cache: SizeCache::new(),
            sums: Fenwick::default(),
        };
        extent.rebuild();
        extent
    }

    pub fn model(&self) -> &SizeModel {
        &self.model
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cache(&self) -> &SizeCache {
        &self.cache
    }

    /// Extent of a single item: its measurement if cached, the model's size otherwise.
    pub fn size_of(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        match &self.model {
            SizeModel::Fixed(size) => Some(*size),
            SizeModel::Dynamic(_) => self.sizes.get(index).copied(),
        }
    }

    /// Cumulative extent of items `[0, index)`.
    ///
    /// Indexes past the end clamp to [`Self::total_extent`].
    pub fn offset_of(&self, index: usize) -> f64 {
        let index = index.min(self.count);
        match &self.model {
            SizeModel::Fixed(size) => index as f64 * size,
            SizeModel::Dynamic(_) => self.sums.prefix_sum(index),
        }
    }

    pub fn total_extent(&self) -> f64 {
        match &self.model {
            SizeModel::Fixed(size) => self.count as f64 * size,
            SizeModel::Dynamic(_) => self.sums.total(),
        }
    }

    /// Index of the item containing `offset`, clamped to the last index.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let last = self.count - 1;
        let offset = if offset.is_nan() { 0.0 } else { offset.max(0.0) };
        let index = match &self.model {
            // Float to int casts saturate, so degenerate sizes still land in range.
            SizeModel::Fixed(size) => (offset / size) as usize,
            SizeModel::Dynamic(_) => {
                let mut index = self.sums.lower_bound(offset).min(last);
                // With fractional sizes the descent can round across a boundary; settle on
                // the item whose `[offset_of(i), offset_of(i + 1))` holds `offset`.
                while index > 0 && self.sums.prefix_sum(index) > offset {
                    index -= 1;
                }
                while index < last && self.sums.prefix_sum(index + 1) <= offset {
                    index += 1;
                }
                index
            }
        };
        Some(index.min(last))
    }

    /// Records a measured size and returns the change in extent it caused.
    ///
    /// Invalid sizes are rejected and the previous size is kept.
    pub fn measure(&mut self, index: usize, size: f64) -> Result<f64> {
        if index >= self.count {
            return Err(WindowError::OutOfRange {
                index,
                len: self.count,
            });
        }
        if self.model.is_fixed() {
            return Err(WindowError::FixedSizeMode { index });
        }
        if !is_valid_size(size) {
            wwarn!(index, size, "ignoring invalid size measurement");
            return Err(WindowError::InvalidSizeMeasurement { index, size });
        }

        self.cache.set(index, size);
        let cur = self.sizes[index];
        if cur == size {
            return Ok(0.0);
        }
        let delta = size - cur;
        self.sizes[index] = size;
        self.sums.add(index, delta);
        wtrace!(index, size, delta, "measure");
        Ok(delta)
    }

    /// Changes the item count of the same collection.
    ///
    /// Measurements below the new count are kept; new items start from their estimate.
    pub fn set_count(&mut self, count: usize) {
        if count == self.count {
            return;
        }
        let prev = self.count;
        self.count = count;
        if self.model.is_fixed() {
            return;
        }
        if count < prev {
            self.sizes.truncate(count);
            self.cache.truncate(count);
            self.sums.truncate(count);
            return;
        }
        self.sizes.reserve(count - prev);
        for i in prev..count {
            let size = self.model.size_of(i);
            self.sizes.push(size);
            self.sums.push_value(size);
        }
    }

    /// Replaces the collection: new model and count, every measurement dropped.
    pub fn reset(&mut self, model: SizeModel, count: usize) {
        wdebug!(count, cached = self.cache.len(), "extent reset");
        self.model = model;
        self.count = count;
        self.cache.clear();
        self.rebuild();
    }

    /// Drops every measurement, keeping the model and count.
    pub fn clear_measurements(&mut self) {
        self.cache.clear();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.sizes.clear();
        if self.model.is_fixed() {
            self.sums = Fenwick::default();
            return;
        }
        self.sizes.reserve_exact(self.count);
        for i in 0..self.count {
            let size = match self.cache.get(i) {
                Some(measured) => measured,
                None => self.model.size_of(i),
            };
            self.sizes.push(size);
        }
        self.sums = Fenwick::from_sizes(&self.sizes);
    }
}
