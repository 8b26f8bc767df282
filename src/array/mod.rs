//! Data arrays and the dimensions they own.
//!
//! A [`DataArray`] is the owning entity of its dimensions: it creates them,
//! hands them out by 1-based index, and renumbers them after a deletion.
//! Mutable access is typed and wrapped in [`DimensionMut`], so a caller can
//! edit a dimension's metadata but never its index or kind.
//! Bulk data and persistence are not part of this crate; the array carries
//! only its descriptive metadata.
//!
//! ## Example
//!
//! ```
//! use nixpy::array::DataArray;
//!
//! let mut array = DataArray::new("membrane potential", "nix.regular_sampled");
//! array.append_sampled_dimension(0.5)?.set_label("time".to_string());
//! array.sampled_dimension_mut(1)?.set_unit("ms".to_string());
//!
//! assert_eq!(array.dimension_count(), 1);
//! assert_eq!(array.sampled_dimension(1)?.label(), Some("time"));
//! # Ok::<(), nixpy::Error>(())
//! ```

mod dimensions;

pub use dimensions::{DimensionMut, Dimensions};

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::dimension::{Dimension, DimensionType, RangeDimension, SampledDimension, SetDimension};
use crate::util::optional;
use crate::util::{Error, Result};

/// Shared, lock-protected data array.
///
/// Callers that hand dimensions to several holders (such as the Python
/// layer) share the owner through this handle. Reads take the read lock,
/// every mutation takes the write lock for one call.
pub type SharedDataArray = Arc<RwLock<DataArray>>;

/// An n-dimensional data array's metadata and dimension descriptors.
#[derive(Clone, Debug)]
pub struct DataArray {
    id: String,
    name: String,
    type_name: String,
    definition: Option<String>,
    label: Option<String>,
    unit: Option<String>,
    expansion_origin: Option<f64>,
    polynom_coefficients: Vec<f64>,
    created_at: i64,
    updated_at: i64,
    dimensions: Dimensions,
}

impl DataArray {
    /// Create an array with a fresh id and no dimensions.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let now = now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            type_name: type_name.into(),
            definition: None,
            label: None,
            unit: None,
            expansion_origin: None,
            polynom_coefficients: Vec::new(),
            created_at: now,
            updated_at: now,
            dimensions: Dimensions::new(),
        }
    }

    /// Wrap into a shared handle.
    pub fn shared(self) -> SharedDataArray {
        Arc::new(RwLock::new(self))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn set_type_name(&mut self, type_name: impl Into<String>) {
        self.type_name = type_name.into();
        self.touch();
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    pub fn set_definition(&mut self, definition: impl Into<Option<String>>) {
        optional::assign(&mut self.definition, definition);
        self.touch();
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<Option<String>>) {
        optional::assign(&mut self.label, label);
        self.touch();
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn set_unit(&mut self, unit: impl Into<Option<String>>) {
        optional::assign(&mut self.unit, unit);
        self.touch();
    }

    pub fn expansion_origin(&self) -> Option<f64> {
        self.expansion_origin
    }

    pub fn set_expansion_origin(&mut self, origin: impl Into<Option<f64>>) {
        optional::assign(&mut self.expansion_origin, origin);
        self.touch();
    }

    /// Calibration polynomial, lowest order first. Empty means identity.
    pub fn polynom_coefficients(&self) -> &[f64] {
        &self.polynom_coefficients
    }

    pub fn set_polynom_coefficients(&mut self, coefficients: Vec<f64>) {
        self.polynom_coefficients = coefficients;
        self.touch();
    }

    /// Creation time, unix seconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Last modification time, unix seconds.
    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// Override the creation time.
    pub fn force_created_at(&mut self, timestamp: i64) {
        self.created_at = timestamp;
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }

    // === Dimensions ===

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    /// Dimension by 1-based index.
    pub fn dimension(&self, index: usize) -> Result<&Dimension> {
        self.dimensions.get(index)
    }

    pub fn sampled_dimension(&self, index: usize) -> Result<&SampledDimension> {
        let dim = self.dimension(index)?;
        dim.as_sampled()
            .ok_or_else(|| Error::type_mismatch(DimensionType::Sample, dim.dimension_type()))
    }

    pub fn sampled_dimension_mut(&mut self, index: usize) -> Result<DimensionMut<'_, SampledDimension>> {
        let dim = self.dimensions.get_mut(index)?;
        let actual = dim.dimension_type();
        let dim = dim
            .as_sampled_mut()
            .ok_or_else(|| Error::type_mismatch(DimensionType::Sample, actual))?;
        Ok(DimensionMut::new(dim, index, SampledDimension::set_index))
    }

    pub fn range_dimension(&self, index: usize) -> Result<&RangeDimension> {
        let dim = self.dimension(index)?;
        dim.as_range()
            .ok_or_else(|| Error::type_mismatch(DimensionType::Range, dim.dimension_type()))
    }

    pub fn range_dimension_mut(&mut self, index: usize) -> Result<DimensionMut<'_, RangeDimension>> {
        let dim = self.dimensions.get_mut(index)?;
        let actual = dim.dimension_type();
        let dim = dim
            .as_range_mut()
            .ok_or_else(|| Error::type_mismatch(DimensionType::Range, actual))?;
        Ok(DimensionMut::new(dim, index, RangeDimension::set_index))
    }

    pub fn set_dimension(&self, index: usize) -> Result<&SetDimension> {
        let dim = self.dimension(index)?;
        dim.as_set()
            .ok_or_else(|| Error::type_mismatch(DimensionType::Set, dim.dimension_type()))
    }

    pub fn set_dimension_mut(&mut self, index: usize) -> Result<DimensionMut<'_, SetDimension>> {
        let dim = self.dimensions.get_mut(index)?;
        let actual = dim.dimension_type();
        let dim = dim
            .as_set_mut()
            .ok_or_else(|| Error::type_mismatch(DimensionType::Set, actual))?;
        Ok(DimensionMut::new(dim, index, SetDimension::set_index))
    }

    /// Append a categorical dimension without labels.
    pub fn append_set_dimension(&mut self) -> DimensionMut<'_, SetDimension> {
        let index = self.dimensions.next_index();
        tracing::debug!(array = %self.id, index, "append set dimension");
        self.touch();
        match self.dimensions.push(SetDimension::new(index).into()) {
            Dimension::Set(d) => DimensionMut::new(d, index, SetDimension::set_index),
            _ => unreachable!("pushed a set dimension"),
        }
    }

    /// Append a range dimension with the given ticks (kept verbatim).
    pub fn append_range_dimension(&mut self, ticks: Vec<f64>) -> DimensionMut<'_, RangeDimension> {
        let index = self.dimensions.next_index();
        tracing::debug!(array = %self.id, index, ticks = ticks.len(), "append range dimension");
        self.touch();
        match self.dimensions.push(RangeDimension::new(index, ticks).into()) {
            Dimension::Range(d) => DimensionMut::new(d, index, RangeDimension::set_index),
            _ => unreachable!("pushed a range dimension"),
        }
    }

    /// Append a sampled dimension. Fails if the interval is not positive.
    pub fn append_sampled_dimension(
        &mut self,
        sampling_interval: f64,
    ) -> Result<DimensionMut<'_, SampledDimension>> {
        let index = self.dimensions.next_index();
        let dim = SampledDimension::new(index, sampling_interval)?;
        tracing::debug!(array = %self.id, index, sampling_interval, "append sampled dimension");
        self.touch();
        match self.dimensions.push(dim.into()) {
            Dimension::Sampled(d) => Ok(DimensionMut::new(d, index, SampledDimension::set_index)),
            _ => unreachable!("pushed a sampled dimension"),
        }
    }

    /// Delete a dimension. Later dimensions move down one index.
    pub fn delete_dimension(&mut self, index: usize) -> Result<Dimension> {
        let removed = self.dimensions.remove(index)?;
        tracing::debug!(
            array = %self.id,
            index,
            remaining = self.dimensions.len(),
            "deleted {} dimension",
            removed.dimension_type()
        );
        self.touch();
        Ok(removed)
    }
}

/// Arrays are the same entity when their ids match.
impl PartialEq for DataArray {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DataArray {}

impl fmt::Display for DataArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DataArray: {{name = {}, type = {}, id = {}, dimensions = {}}}",
            self.name, self.type_name, self.id, self.dimensions
        )
    }
}

fn now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
