//! Ordered dimension storage.
//!
//! Dimensions are addressed by their 1-based index, which always equals
//! their position in the list plus one. Mutable access goes through
//! [`DimensionMut`], which restores that index when it is released.

use smallvec::SmallVec;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::dimension::{Dimension, DimensionType};
use crate::util::{Error, Result};

/// The dimensions of a data array, in axis order.
///
/// Most arrays have few axes, so up to four are stored inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dimensions {
    dims: SmallVec<[Dimension; 4]>,
}

impl Dimensions {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { dims: SmallVec::new() }
    }

    /// Number of dimensions (the rank of the array).
    #[inline]
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Get a dimension by its 1-based index.
    pub fn get(&self, index: usize) -> Result<&Dimension> {
        let slot = self.slot(index)?;
        Ok(&self.dims[slot])
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Dimension> {
        let slot = self.slot(index)?;
        Ok(&mut self.dims[slot])
    }

    /// Map a 0-based position, negative counting from the end, to a
    /// 1-based index. `None` if out of range.
    pub fn position_to_index(&self, position: isize) -> Option<usize> {
        let count = self.dims.len();
        let slot = if position < 0 {
            count.checked_sub(position.unsigned_abs())?
        } else {
            position as usize
        };
        (slot < count).then_some(slot + 1)
    }

    /// Iterate in axis order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dimension> {
        self.dims.iter()
    }

    /// Kinds of all dimensions in axis order.
    pub fn types(&self) -> Vec<DimensionType> {
        self.dims.iter().map(Dimension::dimension_type).collect()
    }

    /// JSON array of per-dimension summaries.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.dims.iter().map(Dimension::to_json).collect())
    }

    /// Index the next appended dimension will receive.
    pub(crate) fn next_index(&self) -> usize {
        self.dims.len() + 1
    }

    /// Append a dimension built for [`next_index`](Self::next_index).
    pub(crate) fn push(&mut self, dim: Dimension) -> &mut Dimension {
        debug_assert_eq!(dim.index(), self.next_index());
        self.dims.push(dim);
        let last = self.dims.len() - 1;
        &mut self.dims[last]
    }

    /// Remove a dimension and renumber the ones after it.
    pub(crate) fn remove(&mut self, index: usize) -> Result<Dimension> {
        let slot = self.slot(index)?;
        let removed = self.dims.remove(slot);
        for (i, dim) in self.dims.iter_mut().enumerate().skip(slot) {
            dim.set_index(i + 1);
        }
        Ok(removed)
    }

    fn slot(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.dims.len() {
            return Err(Error::DimensionOutOfBounds {
                index,
                count: self.dims.len(),
            });
        }
        Ok(index - 1)
    }
}

/// Mutable borrow of one dimension in a [`Dimensions`] list.
///
/// Dereferences to the dimension. On drop the dimension's index is reset to
/// the slot it occupies, so assigning or swapping in another dimension value
/// never moves it to a different axis.
pub struct DimensionMut<'a, T> {
    dim: &'a mut T,
    index: usize,
    stamp: fn(&mut T, usize),
}

impl<'a, T> DimensionMut<'a, T> {
    pub(crate) fn new(dim: &'a mut T, index: usize, stamp: fn(&mut T, usize)) -> Self {
        Self { dim, index, stamp }
    }
}

impl<T> Deref for DimensionMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.dim
    }
}

impl<T> DerefMut for DimensionMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.dim
    }
}

impl<T> Drop for DimensionMut<'_, T> {
    fn drop(&mut self) {
        (self.stamp)(&mut *self.dim, self.index);
    }
}

impl<T: fmt::Debug> fmt::Debug for DimensionMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DimensionMut")
            .field("index", &self.index)
            .field("dim", &self.dim)
            .finish()
    }
}

impl<'a> IntoIterator for &'a Dimensions {
    type Item = &'a Dimension;
    type IntoIter = std::slice::Iter<'a, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{}", dim.dimension_type())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{RangeDimension, SampledDimension, SetDimension};

    fn three() -> Dimensions {
        let mut d = Dimensions::new();
        d.push(SetDimension::new(1).into());
        d.push(RangeDimension::new(2, vec![0.0, 1.0]).into());
        d.push(SampledDimension::new(3, 0.1).unwrap().into());
        d
    }

    #[test]
    fn test_empty() {
        let d = Dimensions::new();
        assert!(d.is_empty());
        assert_eq!(d.next_index(), 1);
        assert_eq!(format!("{}", d), "[]");
        assert_eq!(
            d.get(1).unwrap_err(),
            Error::DimensionOutOfBounds { index: 1, count: 0 }
        );
    }

    #[test]
    fn test_get() {
        let d = three();
        assert_eq!(d.len(), 3);
        assert_eq!(d.get(1).unwrap().dimension_type(), DimensionType::Set);
        assert_eq!(d.get(3).unwrap().dimension_type(), DimensionType::Sample);
        assert!(d.get(0).is_err());
        assert!(d.get(4).is_err());
        assert_eq!(
            d.types(),
            vec![DimensionType::Set, DimensionType::Range, DimensionType::Sample]
        );
        assert_eq!(format!("{}", d), "[Set x Range x Sample]");
    }

    #[test]
    fn test_position_to_index() {
        let d = three();
        assert_eq!(d.position_to_index(0), Some(1));
        assert_eq!(d.position_to_index(2), Some(3));
        assert_eq!(d.position_to_index(-1), Some(3));
        assert_eq!(d.position_to_index(-3), Some(1));
        assert_eq!(d.position_to_index(3), None);
        assert_eq!(d.position_to_index(-4), None);
        assert_eq!(Dimensions::new().position_to_index(0), None);
        assert_eq!(d.position_to_index(isize::MIN), None);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut d = three();
        let removed = d.remove(1).unwrap();
        assert_eq!(removed.dimension_type(), DimensionType::Set);

        assert_eq!(d.len(), 2);
        let indices: Vec<usize> = d.iter().map(Dimension::index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(d.get(1).unwrap().dimension_type(), DimensionType::Range);
        assert_eq!(d.next_index(), 3);

        assert!(d.remove(3).is_err());
    }

    #[test]
    fn test_guard_restores_index() {
        let mut d = three();
        let mut other = SetDimension::new(9);
        other.set_labels(vec!["z".to_string()]);
        {
            let slot = d.get_mut(1).unwrap().as_set_mut().unwrap();
            let mut guard = DimensionMut::new(slot, 1, SetDimension::set_index);
            *guard = other;
            assert_eq!(guard.index(), 9);
        }
        let indices: Vec<usize> = d.iter().map(Dimension::index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(d.get(1).unwrap().as_set().unwrap().labels(), &["z".to_string()]);
    }

    #[test]
    fn test_to_json() {
        let json = three().to_json();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[1]["ticks"], serde_json::json!([0.0, 1.0]));
    }
}
