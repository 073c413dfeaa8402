//! wordsnap-filter - Local mean filtering and adaptive thresholding
//!
//! - [`mean_filter`]: clipped box mean in O(1) per pixel using sliding
//!   column and row sums, plus a direct [`mean_filter_naive`] oracle
//! - [`adaptive_threshold`]: binarize against a per-pixel reference
//!   (usually the local mean)

mod error;
pub mod mean;
pub mod threshold;

pub use error::{FilterError, FilterResult};
pub use mean::{
    MAX_RADIUS, mean_filter, mean_filter_into, mean_filter_naive,
    mean_filter_naive_into, radius_fits_accumulator,
};
pub use threshold::{
    Polarity, adaptive_threshold, adaptive_threshold_in_place, adaptive_threshold_into,
};
