/// Last known measured sizes, indexed by item position.
///
/// Entries exist only for indexes measured since the last [`SizeCache::clear`]. There is no
/// eviction other than a full reset, and no capacity bound beyond the collection length.
#[derive(Clone, Debug, Default)]
pub struct SizeCache {
    slots: Vec<Option<f64>>,
    measured: usize,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.slots.get(index).copied().flatten()
    }

    /// Records a measurement, returning the previous one.
    pub fn set(&mut self, index: usize, size: f64) -> Option<f64> {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        let prev = self.slots[index].replace(size);
        if prev.is_none() {
            self.measured += 1;
        }
        prev
    }

    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Drops every measurement.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.measured = 0;
    }

    /// Drops measurements at or past `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.slots.len() {
            return;
        }
        let dropped = self.slots[len..].iter().filter(|s| s.is_some()).count();
        self.slots.truncate(len);
        self.measured -= dropped;
    }

    /// Number of measured entries.
    pub fn len(&self) -> usize {
        self.measured
    }

    pub fn is_empty(&self) -> bool {
        self.measured == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|size| (i, size)))
    }
}
