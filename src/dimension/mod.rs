//! Dimension descriptors.
//!
//! Each axis of a data array is described by one of three variants:
//! - [`SampledDimension`] - uniform spacing (sampling interval, optional offset)
//! - [`RangeDimension`] - explicit tick positions
//! - [`SetDimension`] - named categories
//!
//! Dimensions are owned by a [`DataArray`](crate::array::DataArray) and are
//! only created through it.

mod range;
mod sampled;
mod set;

pub use range::RangeDimension;
pub use sampled::SampledDimension;
pub use set::SetDimension;

use std::fmt;

/// Kind of a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimensionType {
    /// Regularly sampled.
    Sample,
    /// Explicit ticks.
    Range,
    /// Categorical.
    Set,
}

impl DimensionType {
    #[inline]
    pub fn is_sample(&self) -> bool {
        matches!(self, Self::Sample)
    }

    #[inline]
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range)
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set)
    }

    /// Name as exported to Python.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sample => "Sample",
            Self::Range => "Range",
            Self::Set => "Set",
        }
    }
}

impl fmt::Display for DimensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dimension of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Dimension {
    Sampled(SampledDimension),
    Range(RangeDimension),
    Set(SetDimension),
}

impl Dimension {
    /// 1-based position among the owning array's dimensions.
    pub fn index(&self) -> usize {
        match self {
            Self::Sampled(d) => d.index(),
            Self::Range(d) => d.index(),
            Self::Set(d) => d.index(),
        }
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        match self {
            Self::Sampled(d) => d.set_index(index),
            Self::Range(d) => d.set_index(index),
            Self::Set(d) => d.set_index(index),
        }
    }

    pub fn dimension_type(&self) -> DimensionType {
        match self {
            Self::Sampled(_) => DimensionType::Sample,
            Self::Range(_) => DimensionType::Range,
            Self::Set(_) => DimensionType::Set,
        }
    }

    /// Axis label. Set dimensions carry per-entry labels instead and return `None`.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Sampled(d) => d.label(),
            Self::Range(d) => d.label(),
            Self::Set(_) => None,
        }
    }

    /// Unit, `None` for set dimensions.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Sampled(d) => d.unit(),
            Self::Range(d) => d.unit(),
            Self::Set(_) => None,
        }
    }

    pub fn as_sampled(&self) -> Option<&SampledDimension> {
        match self {
            Self::Sampled(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_sampled_mut(&mut self) -> Option<&mut SampledDimension> {
        match self {
            Self::Sampled(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeDimension> {
        match self {
            Self::Range(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_range_mut(&mut self) -> Option<&mut RangeDimension> {
        match self {
            Self::Range(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&SetDimension> {
        match self {
            Self::Set(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_set_mut(&mut self) -> Option<&mut SetDimension> {
        match self {
            Self::Set(d) => Some(d),
            _ => None,
        }
    }

    /// JSON summary of the dimension and its metadata.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Sampled(d) => serde_json::json!({
                "index": d.index(),
                "dimension_type": DimensionType::Sample.as_str(),
                "label": d.label(),
                "unit": d.unit(),
                "sampling_interval": d.sampling_interval(),
                "offset": d.offset(),
            }),
            Self::Range(d) => serde_json::json!({
                "index": d.index(),
                "dimension_type": DimensionType::Range.as_str(),
                "label": d.label(),
                "unit": d.unit(),
                "ticks": d.ticks(),
            }),
            Self::Set(d) => serde_json::json!({
                "index": d.index(),
                "dimension_type": DimensionType::Set.as_str(),
                "labels": d.labels(),
            }),
        }
    }
}

impl From<SampledDimension> for Dimension {
    fn from(d: SampledDimension) -> Self {
        Self::Sampled(d)
    }
}

impl From<RangeDimension> for Dimension {
    fn from(d: RangeDimension) -> Self {
        Self::Range(d)
    }
}

impl From<SetDimension> for Dimension {
    fn from(d: SetDimension) -> Self {
        Self::Set(d)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sampled(d) => write!(
                f,
                "SampledDimension(index={}, sampling_interval={})",
                d.index(),
                d.sampling_interval()
            ),
            Self::Range(d) => write!(
                f,
                "RangeDimension(index={}, ticks={})",
                d.index(),
                d.ticks().len()
            ),
            Self::Set(d) => write!(
                f,
                "SetDimension(index={}, labels={})",
                d.index(),
                d.labels().len()
            ),
        }
    }
}
