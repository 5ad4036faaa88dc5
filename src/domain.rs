//! Finite sets with a fixed enumeration order.
use std::fmt;
use std::rc::Rc;

use crate::error::Error;

/// A non-empty finite set.
///
/// Elements only need to be comparable for equality. A domain remembers the order in which its
/// elements were first seen and this order is used everywhere an element needs a position: it
/// fixes the correspondence between elements and the images stored in a
/// [`Bijection`](crate::bijection::Bijection), and it is the order in which inverses are searched.
///
/// Cloning a domain shares the underlying storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Domain<T> {
    elements: Rc<[T]>,
}

impl<T: PartialEq> Domain<T> {
    /// Create a domain from some elements.
    ///
    /// Repeated elements are dropped, keeping the first occurrence. Returns an error if there are
    /// no elements.
    pub fn new<I>(elements: I) -> Result<Domain<T>, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut unique: Vec<T> = vec![];
        for el in elements {
            if !unique.contains(&el) {
                unique.push(el);
            }
        }

        if unique.is_empty() {
            return Err(Error::EmptyDomain);
        }

        Ok(Domain {
            elements: unique.into(),
        })
    }

    /// Position of an element in this domain's order.
    ///
    /// This is a linear scan comparing elements by equality.
    pub fn position(&self, el: &T) -> Option<usize> {
        self.elements.iter().position(|x| x == el)
    }

    pub fn contains(&self, el: &T) -> bool {
        self.position(el).is_some()
    }
}

impl<T> Domain<T> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false, domains are never empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a Domain<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Domain<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Domain::<u32>::new(vec![]), Err(Error::EmptyDomain));
    }

    #[test]
    fn first_occurrence_order() {
        let domain = Domain::new(vec![3, 1, 3, 2, 1]).unwrap();
        assert_eq!(domain.as_slice(), &[3, 1, 2]);
        assert_eq!(domain.position(&2), Some(2));
        assert_eq!(domain.position(&4), None);
        assert!(domain.contains(&3));
        assert_eq!(format!("{:?}", domain), "{3, 1, 2}");
    }

    #[test]
    fn only_equality_needed() {
        // f64 is neither Eq nor Hash
        let domain = Domain::new(vec![0.5, 1.5, 0.5]).unwrap();
        assert_eq!(domain.len(), 2);
    }
}
