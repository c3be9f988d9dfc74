use std::sync::Arc;

/// An index-based size estimator.
pub type SizeEstimator = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// An item-based size estimator, called with the index and the item.
pub type ItemSizeEstimator<T> = Arc<dyn Fn(usize, &T) -> f64 + Send + Sync>;

/// Maps an item index to its extent along the scroll axis.
///
/// Estimates must be positive and finite. This is not validated: a non-positive estimate
/// produces degenerate (but still clamped) window ranges.
#[derive(Clone)]
pub enum SizeModel {
    /// Every item has the same extent.
    Fixed(f64),
    /// Items are estimated until measured.
    Dynamic(SizeEstimator),
}

impl SizeModel {
    pub fn fixed(size: f64) -> Self {
        Self::Fixed(size)
    }

    pub fn dynamic(estimate: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(estimate))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// The model's own size for `index`, ignoring any measurement.
    pub fn size_of(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(size) => *size,
            Self::Dynamic(estimate) => estimate(index),
        }
    }
}

impl core::fmt::Debug for SizeModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Item-level size configuration for [`crate::WindowedList`].
pub enum ItemSize<T> {
    Fixed(f64),
    Estimated(ItemSizeEstimator<T>),
}

impl<T> ItemSize<T> {
    pub fn estimated(estimate: impl Fn(usize, &T) -> f64 + Send + Sync + 'static) -> Self {
        Self::Estimated(Arc::new(estimate))
    }

    /// Binds the estimator to a collection, producing an index-based model.
    pub(crate) fn bind(&self, items: &Arc<[T]>) -> SizeModel
    where
        T: Send + Sync + 'static,
    {
        match self {
            Self::Fixed(size) => SizeModel::Fixed(*size),
            Self::Estimated(estimate) => {
                let estimate = Arc::clone(estimate);
                let items = Arc::clone(items);
                SizeModel::Dynamic(Arc::new(move |i| match items.get(i) {
                    Some(item) => estimate(i, item),
                    None => 0.0,
                }))
            }
        }
    }
}

impl<T> Clone for ItemSize<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(size) => Self::Fixed(*size),
            Self::Estimated(estimate) => Self::Estimated(Arc::clone(estimate)),
        }
    }
}

impl<T> core::fmt::Debug for ItemSize<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::Estimated(_) => f.write_str("Estimated(..)"),
        }
    }
}

/// A measurement is usable when it is positive and finite.
pub(crate) fn is_valid_size(size: f64) -> bool {
    size.is_finite() && size > 0.0
}
