//! Regularly sampled dimension.

use crate::util::optional;
use crate::util::{Error, Result};
use super::DimensionType;

/// Dimension with uniform spacing.
///
/// Position of sample `i` is `offset + i * sampling_interval`, with an absent
/// offset read as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledDimension {
    index: usize,
    sampling_interval: f64,
    label: Option<String>,
    unit: Option<String>,
    offset: Option<f64>,
}

impl SampledDimension {
    pub(crate) fn new(index: usize, sampling_interval: f64) -> Result<Self> {
        Ok(Self {
            index,
            sampling_interval: check_sampling_interval(sampling_interval)?,
            label: None,
            unit: None,
            offset: None,
        })
    }

    /// 1-based position among the owning array's dimensions.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    #[inline]
    pub fn dimension_type(&self) -> DimensionType {
        DimensionType::Sample
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set or clear (`None`) the axis label.
    pub fn set_label(&mut self, label: impl Into<Option<String>>) {
        optional::assign(&mut self.label, label);
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Set or clear (`None`) the unit.
    pub fn set_unit(&mut self, unit: impl Into<Option<String>>) {
        optional::assign(&mut self.unit, unit);
    }

    #[inline]
    pub fn sampling_interval(&self) -> f64 {
        self.sampling_interval
    }

    /// Set the sampling interval. Zero, negative and non-finite values are
    /// rejected and leave the dimension unchanged.
    pub fn set_sampling_interval(&mut self, sampling_interval: f64) -> Result<()> {
        self.sampling_interval = check_sampling_interval(sampling_interval)?;
        Ok(())
    }

    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// Set or clear (`None`) the offset of the first sample.
    pub fn set_offset(&mut self, offset: impl Into<Option<f64>>) {
        optional::assign(&mut self.offset, offset);
    }

    /// Position of the sample at `index` (0-based).
    pub fn position_at(&self, index: usize) -> f64 {
        self.offset.unwrap_or(0.0) + index as f64 * self.sampling_interval
    }

    /// Positions of `count` consecutive samples starting at `start`.
    ///
    /// Fails when `start + count` overflows or the positions cannot be
    /// allocated.
    pub fn axis(&self, count: usize, start: usize) -> Result<Vec<f64>> {
        let end = start.checked_add(count).ok_or_else(|| {
            Error::other(format!("Axis range overflows: start {} + count {}", start, count))
        })?;
        let mut positions = Vec::new();
        positions
            .try_reserve_exact(count)
            .map_err(|e| Error::other(format!("Cannot allocate {} axis positions: {}", count, e)))?;
        positions.extend((start..end).map(|i| self.position_at(i)));
        Ok(positions)
    }
}

fn check_sampling_interval(sampling_interval: f64) -> Result<f64> {
    if sampling_interval.is_finite() && sampling_interval > 0.0 {
        Ok(sampling_interval)
    } else {
        tracing::warn!(sampling_interval, "rejected sampling interval");
        Err(Error::InvalidSamplingInterval(sampling_interval))
    }
}
