//! Cached computed properties.
//!
//! A [`Computed`] cell remembers the value derived from a snapshot of its
//! dependencies and hands the cached value back until the snapshot changes.
//! [`ComputedProperty`] binds such a cell to an owner type together with
//! an optional setter and deleter, mirroring a read/write/delete property.

use crate::error::{ExerciseError, Result};
use log::trace;
use std::cell::RefCell;
use std::fmt;

/// Cache cell for a value derived from dependencies of type `D`.
///
/// # Examples
///
/// ```
/// use coding_exercises::Computed;
///
/// let area = Computed::new();
/// assert_eq!(area.get_or_compute((2, 3), || 2 * 3), 6);
/// // Same dependencies: the closure is not called.
/// assert_eq!(area.get_or_compute((2, 3), || unreachable!()), 6);
/// ```
pub struct Computed<D, T> {
    cache: RefCell<Option<(D, T)>>,
}

impl<D, T> Computed<D, T>
where
    D: PartialEq,
    T: Clone,
{
    pub fn new() -> Self {
        Computed {
            cache: RefCell::new(None),
        }
    }

    /// Returns the cached value if `deps` equals the snapshot it was
    /// computed from, otherwise calls `compute` and caches its result.
    pub fn get_or_compute<F>(&self, deps: D, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        if let Some((cached_deps, value)) = self.cache.borrow().as_ref() {
            if *cached_deps == deps {
                return value.clone();
            }
        }

        trace!("Dependencies changed, recomputing");
        let value = compute();
        *self.cache.borrow_mut() = Some((deps, value.clone()));
        value
    }

    /// Drops the cached value so the next read recomputes.
    pub fn invalidate(&self) {
        self.cache.borrow_mut().take();
    }

    pub fn is_cached(&self) -> bool {
        self.cache.borrow().is_some()
    }
}

impl<D: PartialEq, T: Clone> Default for Computed<D, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, T: fmt::Debug> fmt::Debug for Computed<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.borrow();
        f.debug_struct("Computed")
            .field("value", &cache.as_ref().map(|(_, value)| value))
            .finish()
    }
}

/// A derived value of owner `S`, recomputed only when the dependencies
/// extracted by `deps` change.
///
/// Dependencies are whatever the extractor returns, so fields that do not
/// feed the value (a colour next to coordinates, say) never trigger a
/// recomputation.
pub struct ComputedProperty<S, D, T> {
    deps: fn(&S) -> D,
    getter: fn(&S) -> T,
    setter: Option<fn(&mut S, T)>,
    deleter: Option<fn(&mut S)>,
    cell: Computed<D, T>,
}

impl<S, D, T> ComputedProperty<S, D, T>
where
    D: PartialEq,
    T: Clone,
{
    /// Creates a read-only property.
    pub fn new(deps: fn(&S) -> D, getter: fn(&S) -> T) -> Self {
        ComputedProperty {
            deps,
            getter,
            setter: None,
            deleter: None,
            cell: Computed::new(),
        }
    }

    pub fn with_setter(mut self, setter: fn(&mut S, T)) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn with_deleter(mut self, deleter: fn(&mut S)) -> Self {
        self.deleter = Some(deleter);
        self
    }

    /// Reads the property, recomputing it if the owner's dependencies moved.
    pub fn get(&self, owner: &S) -> T {
        self.cell
            .get_or_compute((self.deps)(owner), || (self.getter)(owner))
    }

    /// Writes the property through its setter.
    pub fn set(&self, owner: &mut S, value: T) -> Result<()> {
        let setter = self.setter.ok_or(ExerciseError::ReadOnlyProperty)?;
        setter(owner, value);
        Ok(())
    }

    /// Deletes the property through its deleter.
    pub fn delete(&self, owner: &mut S) -> Result<()> {
        let deleter = self.deleter.ok_or(ExerciseError::NotDeletable)?;
        deleter(owner);
        self.cell.invalidate();
        Ok(())
    }
}

impl<S, D, T: fmt::Debug> fmt::Debug for ComputedProperty<S, D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedProperty")
            .field("settable", &self.setter.is_some())
            .field("deletable", &self.deleter.is_some())
            .field("cell", &self.cell)
            .finish()
    }
}
