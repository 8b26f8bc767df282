//! Python bindings for dimensions.
//!
//! Wrappers hold the owning array and the dimension's index, and resolve
//! the dimension on every access. A wrapper whose dimension was deleted, or
//! whose index now points at a different kind of dimension, raises instead
//! of touching the wrong axis.

use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::array::SharedDataArray;
use crate::dimension::{DimensionType, RangeDimension, SampledDimension, SetDimension};

/// Python enumeration of dimension kinds.
#[pyclass(name = "DimensionType", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyDimensionType {
    Sample,
    Range,
    Set,
}

impl From<DimensionType> for PyDimensionType {
    fn from(t: DimensionType) -> Self {
        match t {
            DimensionType::Sample => Self::Sample,
            DimensionType::Range => Self::Range,
            DimensionType::Set => Self::Set,
        }
    }
}

/// Wrap the dimension at `index` in the Python class matching its kind.
pub(crate) fn wrap_dimension(
    py: Python<'_>,
    array: &SharedDataArray,
    dimension_type: DimensionType,
    index: usize,
) -> PyResult<Py<PyAny>> {
    let array = array.clone();
    Ok(match dimension_type {
        DimensionType::Sample => Py::new(py, PySampledDimension { array, index })?.into_any(),
        DimensionType::Range => Py::new(py, PyRangeDimension { array, index })?.into_any(),
        DimensionType::Set => Py::new(py, PySetDimension { array, index })?.into_any(),
    })
}

// ============================================================================
// SampledDimension
// ============================================================================

/// Python wrapper for SampledDimension.
#[pyclass(name = "SampledDimension")]
pub struct PySampledDimension {
    pub(crate) array: SharedDataArray,
    pub(crate) index: usize,
}

impl PySampledDimension {
    fn with_dim<T>(&self, f: impl FnOnce(&SampledDimension) -> T) -> PyResult<T> {
        let array = self.array.read();
        Ok(f(array.sampled_dimension(self.index)?))
    }

    fn with_dim_mut<T>(&self, f: impl FnOnce(&mut SampledDimension) -> T) -> PyResult<T> {
        let mut array = self.array.write();
        let mut dim = array.sampled_dimension_mut(self.index)?;
        Ok(f(&mut *dim))
    }
}

#[pymethods]
impl PySampledDimension {
    #[getter]
    fn index(&self) -> PyResult<usize> {
        self.with_dim(|d| d.index())
    }

    #[getter]
    fn dimension_type(&self) -> PyResult<PyDimensionType> {
        self.with_dim(|d| d.dimension_type().into())
    }

    /// Axis label, or None.
    #[getter]
    fn label(&self) -> PyResult<Option<String>> {
        self.with_dim(|d| d.label().map(str::to_owned))
    }

    #[setter]
    fn set_label(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let label: Option<String> = value.extract()?;
        self.with_dim_mut(|d| d.set_label(label))
    }

    /// Unit, or None.
    #[getter]
    fn unit(&self) -> PyResult<Option<String>> {
        self.with_dim(|d| d.unit().map(str::to_owned))
    }

    #[setter]
    fn set_unit(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let unit: Option<String> = value.extract()?;
        self.with_dim_mut(|d| d.set_unit(unit))
    }

    #[getter]
    fn sampling_interval(&self) -> PyResult<f64> {
        self.with_dim(|d| d.sampling_interval())
    }

    #[setter]
    fn set_sampling_interval(&self, value: f64) -> PyResult<()> {
        Ok(self.with_dim_mut(|d| d.set_sampling_interval(value))??)
    }

    /// Position of the first sample, or None.
    #[getter]
    fn offset(&self) -> PyResult<Option<f64>> {
        self.with_dim(|d| d.offset())
    }

    #[setter]
    fn set_offset(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let offset: Option<f64> = value.extract()?;
        self.with_dim_mut(|d| d.set_offset(offset))
    }

    /// Position of the sample at `index`.
    fn position_at(&self, index: usize) -> PyResult<f64> {
        self.with_dim(|d| d.position_at(index))
    }

    /// Positions of `count` samples starting at `start`.
    #[pyo3(signature = (count, start=0))]
    fn axis(&self, count: usize, start: usize) -> PyResult<Vec<f64>> {
        Ok(self.with_dim(|d| d.axis(count, start))??)
    }

    fn __repr__(&self) -> PyResult<String> {
        self.with_dim(|d| {
            format!(
                "<SampledDimension index={} sampling_interval={}>",
                d.index(),
                d.sampling_interval()
            )
        })
    }
}

// ============================================================================
// RangeDimension
// ============================================================================

/// Python wrapper for RangeDimension.
#[pyclass(name = "RangeDimension")]
pub struct PyRangeDimension {
    pub(crate) array: SharedDataArray,
    pub(crate) index: usize,
}

impl PyRangeDimension {
    fn with_dim<T>(&self, f: impl FnOnce(&RangeDimension) -> T) -> PyResult<T> {
        let array = self.array.read();
        Ok(f(array.range_dimension(self.index)?))
    }

    fn with_dim_mut<T>(&self, f: impl FnOnce(&mut RangeDimension) -> T) -> PyResult<T> {
        let mut array = self.array.write();
        let mut dim = array.range_dimension_mut(self.index)?;
        Ok(f(&mut *dim))
    }
}

#[pymethods]
impl PyRangeDimension {
    #[getter]
    fn index(&self) -> PyResult<usize> {
        self.with_dim(|d| d.index())
    }

    #[getter]
    fn dimension_type(&self) -> PyResult<PyDimensionType> {
        self.with_dim(|d| d.dimension_type().into())
    }

    #[getter]
    fn label(&self) -> PyResult<Option<String>> {
        self.with_dim(|d| d.label().map(str::to_owned))
    }

    #[setter]
    fn set_label(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let label: Option<String> = value.extract()?;
        self.with_dim_mut(|d| d.set_label(label))
    }

    #[getter]
    fn unit(&self) -> PyResult<Option<String>> {
        self.with_dim(|d| d.unit().map(str::to_owned))
    }

    #[setter]
    fn set_unit(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let unit: Option<String> = value.extract()?;
        self.with_dim_mut(|d| d.set_unit(unit))
    }

    /// Tick positions as a tuple. Assigning any sequence replaces all of
    /// them, `[]` included.
    #[getter]
    fn ticks<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyTuple>> {
        let ticks = self.with_dim(|d| d.ticks().to_vec())?;
        PyTuple::new(py, ticks)
    }

    #[setter]
    fn set_ticks(&self, value: Vec<f64>) -> PyResult<()> {
        self.with_dim_mut(|d| d.set_ticks(value))
    }

    fn tick_at(&self, index: usize) -> PyResult<f64> {
        Ok(self.with_dim(|d| d.tick_at(index))??)
    }

    #[pyo3(signature = (count, start=0))]
    fn axis(&self, count: usize, start: usize) -> PyResult<Vec<f64>> {
        Ok(self.with_dim(|d| d.axis(count, start))??)
    }

    fn __repr__(&self) -> PyResult<String> {
        self.with_dim(|d| format!("<RangeDimension index={} ticks={}>", d.index(), d.ticks().len()))
    }
}

// ============================================================================
// SetDimension
// ============================================================================

/// Python wrapper for SetDimension.
#[pyclass(name = "SetDimension")]
pub struct PySetDimension {
    pub(crate) array: SharedDataArray,
    pub(crate) index: usize,
}

impl PySetDimension {
    fn with_dim<T>(&self, f: impl FnOnce(&SetDimension) -> T) -> PyResult<T> {
        let array = self.array.read();
        Ok(f(array.set_dimension(self.index)?))
    }

    fn with_dim_mut<T>(&self, f: impl FnOnce(&mut SetDimension) -> T) -> PyResult<T> {
        let mut array = self.array.write();
        let mut dim = array.set_dimension_mut(self.index)?;
        Ok(f(&mut *dim))
    }
}

#[pymethods]
impl PySetDimension {
    #[getter]
    fn index(&self) -> PyResult<usize> {
        self.with_dim(|d| d.index())
    }

    #[getter]
    fn dimension_type(&self) -> PyResult<PyDimensionType> {
        self.with_dim(|d| d.dimension_type().into())
    }

    /// Category labels as a tuple, empty when absent. Assigning `[]` or None
    /// removes them.
    #[getter]
    fn labels<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyTuple>> {
        let labels = self.with_dim(|d| d.labels().to_vec())?;
        PyTuple::new(py, labels)
    }

    #[setter]
    fn set_labels(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let labels: Option<Vec<String>> = value.extract()?;
        self.with_dim_mut(|d| d.set_labels(labels.unwrap_or_default()))
    }

    fn has_labels(&self) -> PyResult<bool> {
        self.with_dim(|d| d.has_labels())
    }

    fn __repr__(&self) -> PyResult<String> {
        self.with_dim(|d| format!("<SetDimension index={} labels={}>", d.index(), d.labels().len()))
    }
}
