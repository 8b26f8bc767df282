//! Categorical dimension.

use crate::util::optional;
use super::DimensionType;

/// Dimension whose entries are named categories.
///
/// The label list is collectively optional: it is either absent or a
/// non-empty list. Assigning an empty list clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetDimension {
    index: usize,
    labels: Option<Vec<String>>,
}

impl SetDimension {
    pub(crate) fn new(index: usize) -> Self {
        Self { index, labels: None }
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
        DimensionType::Set
    }

    /// Category labels, empty when none are set.
    pub fn labels(&self) -> &[String] {
        optional::as_slice(&self.labels)
    }

    /// Whether labels are present (as opposed to absent).
    pub fn has_labels(&self) -> bool {
        self.labels.is_some()
    }

    /// Replace all labels. An empty list clears the field to absent
    /// rather than storing an empty list.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        // NOTE: unlike RangeDimension::set_ticks, empty input means "no labels".
        optional::assign(&mut self.labels, optional::non_empty(labels));
    }
}
