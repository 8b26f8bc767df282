//! # nixpy
//!
//! Dimension model of the NIX scientific data format, with Python bindings.
//!
//! A data array's axes are described by dimensions of three kinds: regularly
//! sampled, explicit ticks (range), and categorical (set). Each carries
//! optional descriptive metadata that is either absent or present; this crate
//! defines how that metadata is read and written, and exposes it to Python.
//!
//! ## Modules
//!
//! - [`util`] - Errors, optional-field helpers, logging setup
//! - [`dimension`] - Sampled, range and set dimensions
//! - [`array`] - `DataArray`, the owner of dimensions
//! - `python` - pyo3 bindings (enabled with the "python" feature)
//!
//! ## Example
//!
//! ```
//! use nixpy::prelude::*;
//!
//! let mut array = DataArray::new("spikes", "nix.events");
//! array.append_set_dimension().set_labels(vec!["a".into(), "b".into()]);
//! array.append_range_dimension(vec![0.0, 0.5, 1.0, 1.5]);
//!
//! for dim in array.dimensions() {
//!     println!("{} {}", dim.index(), dim.dimension_type());
//! }
//! # Ok::<(), nixpy::Error>(())
//! ```

pub mod util;
pub mod dimension;
pub mod array;

// Python bindings (optional, enabled with "python" feature)
#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use util::{Error, Result};
pub use dimension::{Dimension, DimensionType, RangeDimension, SampledDimension, SetDimension};
pub use array::{DataArray, DimensionMut, Dimensions, SharedDataArray};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result};
    pub use crate::dimension::{
        Dimension, DimensionType, RangeDimension, SampledDimension, SetDimension,
    };
    pub use crate::array::{DataArray, DimensionMut, Dimensions, SharedDataArray};
}
