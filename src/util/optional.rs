//! Tri-state optional fields.
//!
//! Descriptive metadata (labels, units, offsets) is either absent or present
//! with a value. `Option<T>` is the in-memory form; the helpers here are the
//! only place where assignment semantics are decided, so every setter in the
//! crate behaves the same way:
//!
//! | Current       | Assigned  | Result       |
//! |---------------|-----------|--------------|
//! | `Some(x)`     | `Some(y)` | `Some(y)`    |
//! | `Some(x)`     | `None`    | `None`       |
//! | `None`        | `Some(y)` | `Some(y)`    |
//! | `None`        | `None`    | `None`       |
//!
//! An empty string is a present value. Only sequence-valued fields that are
//! collectively optional use [`non_empty`], which maps an empty input to absent.

/// Assign to an optional slot and return the previous value.
///
/// `None` clears the slot, `Some` replaces whatever was stored.
#[inline]
pub fn assign<T>(slot: &mut Option<T>, value: impl Into<Option<T>>) -> Option<T> {
    std::mem::replace(slot, value.into())
}

/// Normalize a collectively optional sequence: empty input means absent.
#[inline]
pub fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// View a collectively optional sequence, absent reads as empty.
#[inline]
pub fn as_slice<T>(values: &Option<Vec<T>>) -> &[T] {
    values.as_deref().unwrap_or(&[])
}
