//! Mappings as first-class values.
use std::fmt;
use std::rc::Rc;

use crate::action::LeftAction;
use crate::error::Error;

/// A function from `T` to `T`.
///
/// Applying a mapping can fail, e.g. an inverse built by
/// [`BijectionGroup`](crate::group::BijectionGroup) fails on elements without a preimage. Cloning
/// a mapping shares the wrapped closure.
pub struct Mapping<T> {
    f: Rc<dyn Fn(&T) -> Result<T, Error>>,
}

impl<T> Mapping<T> {
    /// Wrap a fallible closure.
    pub fn new<F>(f: F) -> Mapping<T>
    where
        F: Fn(&T) -> Result<T, Error> + 'static,
    {
        Mapping { f: Rc::new(f) }
    }

    /// Wrap a closure that is defined everywhere.
    pub fn from_fn<F>(f: F) -> Mapping<T>
    where
        F: Fn(&T) -> T + 'static,
    {
        Mapping::new(move |el| Ok(f(el)))
    }

    /// Apply this mapping to an element.
    pub fn apply(&self, el: &T) -> Result<T, Error> {
        (self.f)(el)
    }

    /// Whether this mapping and `other` send each of `elements` to the same value.
    pub fn agrees_with(&self, other: &Mapping<T>, elements: &[T]) -> Result<bool, Error>
    where
        T: PartialEq,
    {
        for el in elements {
            if self.apply(el)? != other.apply(el)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<T> Clone for Mapping<T> {
    fn clone(&self) -> Mapping<T> {
        Mapping { f: self.f.clone() }
    }
}

impl<T> LeftAction<T> for Mapping<T> {
    fn left_apply(&self, value: &T) -> Result<T, Error> {
        self.apply(value)
    }
}

impl<T> fmt::Debug for Mapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Mapping").finish_non_exhaustive()
    }
}
