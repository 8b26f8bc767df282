//! Irregularly spaced dimension described by explicit ticks.

use crate::util::optional;
use crate::util::{Error, Result};
use super::DimensionType;

/// Dimension with explicit, possibly non-uniform positions.
///
/// Ticks are expected to be non-decreasing but are stored exactly as given.
/// They have no absent state: an empty list is simply empty.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeDimension {
    index: usize,
    label: Option<String>,
    unit: Option<String>,
    ticks: Vec<f64>,
}

impl RangeDimension {
    pub(crate) fn new(index: usize, ticks: Vec<f64>) -> Self {
        Self {
            index,
            label: None,
            unit: None,
            ticks,
        }
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
        DimensionType::Range
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

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Replace all ticks. No sorting or deduplication.
    pub fn set_ticks(&mut self, ticks: Vec<f64>) {
        self.ticks = ticks;
    }

    /// Tick at `index` (0-based).
    pub fn tick_at(&self, index: usize) -> Result<f64> {
        self.ticks.get(index).copied().ok_or(Error::TickOutOfBounds {
            index,
            count: self.ticks.len(),
        })
    }

    /// `count` consecutive ticks starting at `start`.
    pub fn axis(&self, count: usize, start: usize) -> Result<Vec<f64>> {
        let end = start.saturating_add(count);
        if end > self.ticks.len() {
            return Err(Error::TickOutOfBounds {
                index: end.saturating_sub(1),
                count: self.ticks.len(),
            });
        }
        Ok(self.ticks[start..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_roundtrip() {
        let mut d = RangeDimension::new(2, vec![1.0]);
        assert_eq!(d.dimension_type(), DimensionType::Range);

        d.set_ticks(vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(d.ticks(), &[0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_ticks_kept_verbatim() {
        let mut d = RangeDimension::new(1, Vec::new());
        d.set_ticks(vec![3.0, 1.0, 1.0, 2.0]);
        assert_eq!(d.ticks(), &[3.0, 1.0, 1.0, 2.0]);

        // Empty is a value, not a clear
        d.set_ticks(Vec::new());
        assert!(d.ticks().is_empty());
    }

    #[test]
    fn test_label_unit() {
        let mut d = RangeDimension::new(1, Vec::new());
        d.set_label("depth".to_string());
        d.set_unit("m".to_string());
        assert_eq!(d.label(), Some("depth"));
        assert_eq!(d.unit(), Some("m"));

        d.set_unit(None);
        assert_eq!(d.unit(), None);
        assert_eq!(d.label(), Some("depth"));
    }

    #[test]
    fn test_tick_at_and_axis() {
        let d = RangeDimension::new(1, vec![0.0, 2.0, 3.0, 7.0]);
        assert_eq!(d.tick_at(3), Ok(7.0));
        assert_eq!(
            d.tick_at(4),
            Err(Error::TickOutOfBounds { index: 4, count: 4 })
        );

        assert_eq!(d.axis(2, 1).unwrap(), vec![2.0, 3.0]);
        assert_eq!(d.axis(0, 4).unwrap(), Vec::<f64>::new());
        assert!(d.axis(3, 2).is_err());
    }
}
