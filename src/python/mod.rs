//! Python bindings for nixpy.
//!
//! Exposes the dimension model to Python under `nixpy.core`, with the same
//! class and property names as the original `nix.core` bindings. Optional
//! metadata maps to `None`; assigning `None` clears it.

use pyo3::exceptions::{PyIndexError, PyKeyError, PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;

mod array;
mod dimension;

pub use array::*;
pub use dimension::*;

use crate::util::Error;

impl From<Error> for PyErr {
    fn from(e: Error) -> Self {
        let msg = e.to_string();
        match e {
            Error::InvalidSamplingInterval(_) | Error::MissingValue(_) => PyValueError::new_err(msg),
            Error::DimensionOutOfBounds { .. } => PyKeyError::new_err(msg),
            Error::DimensionTypeMismatch { .. } => PyTypeError::new_err(msg),
            Error::TickOutOfBounds { .. } => PyIndexError::new_err(msg),
            Error::Other(_) => PyRuntimeError::new_err(msg),
        }
    }
}

/// nixpy Python module.
#[pymodule]
fn nixpy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    crate::util::logging::init();

    // Register core submodule (dimension model and owner)
    let core = PyModule::new(m.py(), "core")?;
    core.add_class::<dimension::PyDimensionType>()?;
    core.add_class::<dimension::PySampledDimension>()?;
    core.add_class::<dimension::PyRangeDimension>()?;
    core.add_class::<dimension::PySetDimension>()?;
    core.add_class::<array::PyDataArray>()?;
    core.add_class::<array::PyDimensions>()?;
    m.add_submodule(&core)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    tracing::debug!("nixpy module initialized");
    Ok(())
}
