//! Python bindings for DataArray and its dimension collection.

use pyo3::exceptions::PyKeyError;
use pyo3::prelude::*;
use pyo3::types::{PyIterator, PyList, PyTuple};
use std::sync::Arc;

use crate::array::{DataArray, SharedDataArray};
use crate::util::Error;
use super::dimension::{wrap_dimension, PyRangeDimension, PySampledDimension, PySetDimension};

/// Python wrapper for DataArray.
#[pyclass(name = "DataArray")]
pub struct PyDataArray {
    pub(crate) inner: SharedDataArray,
}

#[pymethods]
impl PyDataArray {
    #[new]
    fn new(name: &str, type_name: &str) -> Self {
        Self { inner: DataArray::new(name, type_name).shared() }
    }

    #[getter]
    fn id(&self) -> String {
        self.inner.read().id().to_string()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.read().name().to_string()
    }

    /// Mandatory: assigning None raises ValueError.
    #[setter]
    fn set_name(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let name: Option<String> = value.extract()?;
        let name = name.ok_or(Error::MissingValue("name"))?;
        self.inner.write().set_name(name);
        Ok(())
    }

    #[getter]
    #[pyo3(name = "type")]
    fn type_name(&self) -> String {
        self.inner.read().type_name().to_string()
    }

    /// Mandatory: assigning None raises ValueError.
    #[setter]
    #[pyo3(name = "type")]
    fn set_type_name(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let type_name: Option<String> = value.extract()?;
        let type_name = type_name.ok_or(Error::MissingValue("type"))?;
        self.inner.write().set_type_name(type_name);
        Ok(())
    }

    #[getter]
    fn definition(&self) -> Option<String> {
        self.inner.read().definition().map(str::to_owned)
    }

    #[setter]
    fn set_definition(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let definition: Option<String> = value.extract()?;
        self.inner.write().set_definition(definition);
        Ok(())
    }

    #[getter]
    fn label(&self) -> Option<String> {
        self.inner.read().label().map(str::to_owned)
    }

    #[setter]
    fn set_label(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let label: Option<String> = value.extract()?;
        self.inner.write().set_label(label);
        Ok(())
    }

    #[getter]
    fn unit(&self) -> Option<String> {
        self.inner.read().unit().map(str::to_owned)
    }

    #[setter]
    fn set_unit(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let unit: Option<String> = value.extract()?;
        self.inner.write().set_unit(unit);
        Ok(())
    }

    #[getter]
    fn expansion_origin(&self) -> Option<f64> {
        self.inner.read().expansion_origin()
    }

    #[setter]
    fn set_expansion_origin(&self, value: Bound<'_, PyAny>) -> PyResult<()> {
        let origin: Option<f64> = value.extract()?;
        self.inner.write().set_expansion_origin(origin);
        Ok(())
    }

    /// Calibration coefficients as a tuple, `()` when none are set.
    #[getter]
    fn polynom_coefficients<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyTuple>> {
        let coefficients = self.inner.read().polynom_coefficients().to_vec();
        PyTuple::new(py, coefficients)
    }

    #[setter]
    fn set_polynom_coefficients(&self, value: Vec<f64>) {
        self.inner.write().set_polynom_coefficients(value);
    }

    #[getter]
    fn created_at(&self) -> i64 {
        self.inner.read().created_at()
    }

    #[getter]
    fn updated_at(&self) -> i64 {
        self.inner.read().updated_at()
    }

    fn force_created_at(&self, timestamp: i64) {
        self.inner.write().force_created_at(timestamp);
    }

    /// Dimensions of this array, as a live collection.
    #[getter]
    fn dimensions(&self) -> PyDimensions {
        PyDimensions { array: self.inner.clone() }
    }

    fn append_set_dimension(&self) -> PySetDimension {
        let index = self.inner.write().append_set_dimension().index();
        PySetDimension { array: self.inner.clone(), index }
    }

    fn append_range_dimension(&self, ticks: Vec<f64>) -> PyRangeDimension {
        let index = self.inner.write().append_range_dimension(ticks).index();
        PyRangeDimension { array: self.inner.clone(), index }
    }

    fn append_sampled_dimension(&self, sampling_interval: f64) -> PyResult<PySampledDimension> {
        let index = self.inner.write().append_sampled_dimension(sampling_interval)?.index();
        Ok(PySampledDimension { array: self.inner.clone(), index })
    }

    fn __eq__(&self, other: &Bound<'_, PyAny>) -> bool {
        match other.extract::<PyRef<'_, PyDataArray>>() {
            Ok(other) => {
                Arc::ptr_eq(&self.inner, &other.inner)
                    || self.inner.read().id() == other.inner.read().id()
            }
            Err(_) => false,
        }
    }

    fn __repr__(&self) -> String {
        let array = self.inner.read();
        format!("<DataArray '{}' type='{}' id={}>", array.name(), array.type_name(), array.id())
    }

    fn __str__(&self) -> String {
        self.inner.read().to_string()
    }
}

/// Python view of a data array's dimensions.
///
/// Supports `len()`, integer indexing (negative counts from the end),
/// `del`, and iteration. Out-of-range positions raise KeyError.
#[pyclass(name = "Dimensions")]
pub struct PyDimensions {
    pub(crate) array: SharedDataArray,
}

#[pymethods]
impl PyDimensions {
    fn __len__(&self) -> usize {
        self.array.read().dimension_count()
    }

    fn __getitem__(&self, py: Python<'_>, position: isize) -> PyResult<Py<PyAny>> {
        let (index, dimension_type) = {
            let array = self.array.read();
            let dims = array.dimensions();
            let index = dims
                .position_to_index(position)
                .ok_or_else(|| out_of_range(position, dims.len()))?;
            (index, dims.get(index)?.dimension_type())
        };
        wrap_dimension(py, &self.array, dimension_type, index)
    }

    fn __delitem__(&self, position: isize) -> PyResult<()> {
        let mut array = self.array.write();
        let index = array
            .dimensions()
            .position_to_index(position)
            .ok_or_else(|| out_of_range(position, array.dimension_count()))?;
        array.delete_dimension(index)?;
        Ok(())
    }

    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        let entries: Vec<_> = {
            let array = self.array.read();
            array.dimensions().iter().map(|d| (d.index(), d.dimension_type())).collect()
        };
        let items = entries
            .into_iter()
            .map(|(index, t)| wrap_dimension(py, &self.array, t, index))
            .collect::<PyResult<Vec<_>>>()?;
        PyList::new(py, items)?.try_iter()
    }

    fn __str__(&self) -> String {
        self.array.read().dimensions().to_json().to_string()
    }

    fn __repr__(&self) -> String {
        format!("<Dimensions {}>", self.array.read().dimensions())
    }
}

fn out_of_range(position: isize, count: usize) -> PyErr {
    PyKeyError::new_err(format!(
        "Dimension position {} out of range (count: {})",
        position, count
    ))
}
