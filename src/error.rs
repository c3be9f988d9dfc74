use thiserror::Error;

/// Errors reported by the engine.
///
/// None of these are fatal: the engine state is left untouched and the current
/// [`crate::WindowRange`] stays structurally valid.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum WindowError {
    /// An index outside `0..len` was passed to navigation or measurement.
    #[error("index {index} is out of range for a collection of {len} items")]
    OutOfRange { index: usize, len: usize },

    /// A measured size was zero, negative, NaN or infinite.
    ///
    /// The previously cached size (or the estimate) is kept.
    #[error("invalid size measurement {size} for item {index}")]
    InvalidSizeMeasurement { index: usize, size: f64 },

    /// A measurement was reported while the list uses a fixed item size.
    #[error("item {index} was measured but the list uses a fixed item size")]
    FixedSizeMode { index: usize },
}

pub type Result<T, E = WindowError> = core::result::Result<T, E>;
