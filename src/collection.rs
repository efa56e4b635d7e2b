//! Collection accessors
//!
//! A [`Collection`] is anything that can report a total length and extract a
//! contiguous sub-range by index. In-memory slices and vectors implement it
//! directly; query-backed sources go through [`DeferredCollection`], where
//! counting and slicing are independent operations (offset/limit style).

use crate::error::{Error, Result};

/// Abstraction over the data source being paged through.
///
/// `slice` uses half-open `[start, end)` bounds and clips them to the actual
/// length; asking past the end yields an empty or shortened result, never an
/// error. For deferred sources `slice` may be cheap while `length` is
/// expensive, so [`crate::Page`] slices first and only forces the count
/// afterwards.
pub trait Collection {
    /// The item type produced by slicing
    type Item;

    /// Total number of items in the collection
    fn length(&self) -> Result<usize>;

    /// Extract the items in `[start, end)`, clipped to the actual length
    fn slice(&self, start: usize, end: usize) -> Result<Vec<Self::Item>>;
}

impl<T: Clone> Collection for [T] {
    type Item = T;

    fn length(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn slice(&self, start: usize, end: usize) -> Result<Vec<T>> {
        let end = end.min(self.len());
        if start >= end {
            return Ok(Vec::new());
        }
        Ok(self[start..end].to_vec())
    }
}

impl<T: Clone> Collection for Vec<T> {
    type Item = T;

    fn length(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn slice(&self, start: usize, end: usize) -> Result<Vec<T>> {
        self.as_slice().slice(start, end)
    }
}

/// Type of the count closure for a deferred source
pub type LengthFn = Box<dyn Fn() -> Result<usize>>;

/// Type of the slice closure for a deferred source
pub type SliceFn<T> = Box<dyn Fn(usize, usize) -> Result<Vec<T>>>;

/// Collection backed by a pair of closures, for sources where the items live
/// somewhere else (e.g. a database query paged with OFFSET/LIMIT).
///
/// The two capabilities are deliberately separate: the slice closure is often
/// a cheap windowed query while the count closure runs a full `COUNT(*)`, and
/// some result sets only know their real size after a window was fetched.
pub struct DeferredCollection<T> {
    length_fn: LengthFn,
    slice_fn: SliceFn<T>,
}

impl<T> DeferredCollection<T> {
    /// Create a deferred collection from a count closure and a slice closure
    pub fn new<L, S>(length_fn: L, slice_fn: S) -> Self
    where
        L: Fn() -> Result<usize> + 'static,
        S: Fn(usize, usize) -> Result<Vec<T>> + 'static,
    {
        Self {
            length_fn: Box::new(length_fn),
            slice_fn: Box::new(slice_fn),
        }
    }

    /// Create a deferred collection whose closures cannot fail
    pub fn infallible<L, S>(length_fn: L, slice_fn: S) -> Self
    where
        L: Fn() -> usize + 'static,
        S: Fn(usize, usize) -> Vec<T> + 'static,
    {
        Self {
            length_fn: Box::new(move || Ok(length_fn())),
            slice_fn: Box::new(move |start, end| Ok(slice_fn(start, end))),
        }
    }
}

impl<T> Collection for DeferredCollection<T> {
    type Item = T;

    fn length(&self) -> Result<usize> {
        (self.length_fn)().map_err(|e| Error::collection(format!("length query failed: {e}")))
    }

    fn slice(&self, start: usize, end: usize) -> Result<Vec<T>> {
        (self.slice_fn)(start, end)
            .map_err(|e| Error::collection(format!("slice query failed: {e}")))
    }
}

impl<T> std::fmt::Debug for DeferredCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredCollection").finish_non_exhaustive()
    }
}
