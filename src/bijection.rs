//! Bijections of finite sets.
use std::fmt;
use std::rc::Rc;

use num_traits::ToPrimitive;

use crate::action::LeftAction;
use crate::domain::Domain;
use crate::error::Error;
use crate::heap::for_each_permutation;
use crate::mapping::Mapping;

/// A bijection from a finite set to itself.
///
/// A bijection is stored as a table of images: the element at position `i` of the [`Domain`] is
/// mapped to the `i`-th image. Next to the images the table keeps the domain position of each
/// image, which makes inversion, composition and cycle decomposition independent of element
/// comparisons.
///
/// Bijections are immutable. Cloning a bijection shares its storage.
#[derive(Clone)]
pub struct Bijection<T> {
    domain: Domain<T>,
    images: Rc<[T]>,
    targets: Rc<[usize]>,
}

impl<T: Clone + PartialEq> Bijection<T> {
    /// The identity bijection of a domain.
    pub fn identity(domain: &Domain<T>) -> Bijection<T> {
        Bijection {
            domain: domain.clone(),
            images: domain.as_slice().into(),
            targets: (0..domain.len()).collect(),
        }
    }

    /// Create a bijection from the images of the domain's elements, in domain order.
    ///
    /// Returns an error if the images are not an ordering of the domain.
    pub fn from_images(domain: &Domain<T>, images: Vec<T>) -> Result<Bijection<T>, Error> {
        if images.len() != domain.len() {
            return Err(Error::NotAPermutation);
        }

        let mut seen = vec![false; domain.len()];
        let mut targets = Vec::with_capacity(images.len());

        for image in images.iter() {
            match domain.position(image) {
                Some(pos) if !seen[pos] => {
                    seen[pos] = true;
                    targets.push(pos);
                }
                _ => return Err(Error::NotAPermutation),
            }
        }

        Ok(Bijection {
            domain: domain.clone(),
            images: images.into(),
            targets: targets.into(),
        })
    }

    fn from_targets(domain: &Domain<T>, targets: Vec<usize>) -> Bijection<T> {
        let elements = domain.as_slice();
        Bijection {
            domain: domain.clone(),
            images: targets.iter().map(|&t| elements[t].clone()).collect(),
            targets: targets.into(),
        }
    }

    /// The image of an element.
    ///
    /// Finding the element's position is a linear scan of the domain comparing by equality, so
    /// this is slow for large domains.
    pub fn apply(&self, el: &T) -> Result<&T, Error> {
        self.domain
            .position(el)
            .map(|pos| &self.images[pos])
            .ok_or(Error::NotInDomain)
    }

    /// The inverse of this bijection.
    pub fn inverse(&self) -> Bijection<T> {
        let mut targets = vec![0; self.targets.len()];
        for (i, &t) in self.targets.iter().enumerate() {
            targets[t] = i;
        }
        Bijection::from_targets(&self.domain, targets)
    }

    /// The composition `self ∘ other`, which applies `other` first.
    ///
    /// Returns an error if the bijections have different domains.
    pub fn compose(&self, other: &Bijection<T>) -> Result<Bijection<T>, Error> {
        if self.domain != other.domain {
            return Err(Error::DomainMismatch);
        }
        let targets = other.targets.iter().map(|&t| self.targets[t]).collect();
        Ok(Bijection::from_targets(&self.domain, targets))
    }

    /// This bijection as a [`Mapping`].
    pub fn to_mapping(&self) -> Mapping<T>
    where
        T: 'static,
    {
        Mapping::from(self.clone())
    }
}

impl<T> Bijection<T> {
    pub fn domain(&self) -> &Domain<T> {
        &self.domain
    }

    /// The images of the domain's elements, in domain order.
    pub fn images(&self) -> &[T] {
        &self.images
    }

    pub fn is_identity(&self) -> bool {
        self.targets.iter().enumerate().all(|(i, &t)| i == t)
    }

    /// Return the cycle containing an element.
    ///
    /// Returns a 1-cycle when the element is a fixed point and None when it is not in the domain.
    pub fn cycle_of(&self, el: &T) -> Option<Cycle<'_, T>>
    where
        T: PartialEq,
    {
        self.domain.position(el).map(|pos| self.cycle_at(pos))
    }

    fn cycle_at(&self, pos: usize) -> Cycle<'_, T> {
        Cycle {
            bijection: self,
            pos: Some(pos),
            start: pos,
        }
    }

    /// Returns an iterator over all proper cycles of this bijection.
    ///
    /// The returned iterator does not produce any 1-cycles.
    pub fn cycles(&self) -> Cycles<'_, T> {
        Cycles {
            bijection: self,
            seen: vec![false; self.targets.len()],
            pos: 0,
        }
    }

    /// The order of this bijection, the least `k > 0` such that applying it `k` times is the
    /// identity.
    pub fn order(&self) -> usize {
        self.cycles()
            .map(|cycle| cycle.count())
            .fold(1, num_integer::lcm)
    }
}

impl<T: Clone + PartialEq> LeftAction<T> for Bijection<T> {
    fn left_apply(&self, value: &T) -> Result<T, Error> {
        self.apply(value).cloned()
    }
}

impl<T: Clone + PartialEq + 'static> From<Bijection<T>> for Mapping<T> {
    fn from(bijection: Bijection<T>) -> Mapping<T> {
        Mapping::new(move |el| bijection.apply(el).cloned())
    }
}

impl<T: PartialEq> PartialEq for Bijection<T> {
    fn eq(&self, other: &Bijection<T>) -> bool {
        self.domain == other.domain && self.images == other.images
    }
}

impl<T: Eq> Eq for Bijection<T> {}

/// Cycle notation, e.g. `(1 2 3)(4 5)`.
impl<T: fmt::Display> fmt::Display for Bijection<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut empty = true;
        for cycle in self.cycles() {
            empty = false;
            fmt::Display::fmt(&cycle, f)?;
        }
        if empty {
            f.write_str("()")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Bijection<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(self.domain.iter().zip(self.images.iter()))
            .finish()
    }
}

/// Iterator over the elements of a bijection's cycle.
pub struct Cycle<'a, T> {
    bijection: &'a Bijection<T>,
    pos: Option<usize>,
    start: usize,
}

impl<'a, T> Clone for Cycle<'a, T> {
    fn clone(&self) -> Self {
        Cycle {
            bijection: self.bijection,
            pos: self.pos,
            start: self.start,
        }
    }
}

impl<'a, T> Iterator for Cycle<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let bijection = self.bijection;
        self.pos.map(|pos| {
            let next = bijection.targets[pos];
            self.pos = if next == self.start { None } else { Some(next) };

            &bijection.domain.as_slice()[pos]
        })
    }
}

impl<'a, T: fmt::Display> fmt::Display for Cycle<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for el in self.clone() {
            f.write_str(if first { "(" } else { " " })?;
            first = false;
            fmt::Display::fmt(el, f)?;
        }
        f.write_str(if first { "()" } else { ")" })
    }
}

/// Iterator over the proper cycles of a bijection.
pub struct Cycles<'a, T> {
    bijection: &'a Bijection<T>,
    seen: Vec<bool>,
    pos: usize,
}

impl<'a, T> Iterator for Cycles<'a, T> {
    type Item = Cycle<'a, T>;

    fn next(&mut self) -> Option<Cycle<'a, T>> {
        let targets = &self.bijection.targets;
        loop {
            if self.pos >= targets.len() {
                return None;
            } else if self.seen[self.pos] || targets[self.pos] == self.pos {
                self.pos += 1;
            } else {
                let start = self.pos;
                let mut pos = start;
                loop {
                    self.seen[pos] = true;
                    pos = targets[pos];
                    if pos == start {
                        break;
                    }
                }
                return Some(self.bijection.cycle_at(start));
            }
        }
    }
}

/// All bijections of a domain, in enumeration order.
///
/// The bijection at index `i` is built from the `i`-th ordering of the domain visited by
/// [`for_each_permutation`]. No two entries are equal.
#[derive(Clone)]
pub struct BijectionSet<T> {
    domain: Domain<T>,
    bijections: Vec<Bijection<T>>,
}

impl<T: Clone + PartialEq> BijectionSet<T> {
    /// Enumerate all bijections of a domain.
    ///
    /// There are `n!` bijections of a domain with `n` elements. The caller is responsible for
    /// keeping this tractable.
    pub fn of(domain: &Domain<T>) -> BijectionSet<T> {
        // Elements are permuted together with their positions, so no lookups are needed to build
        // the tables.
        let mut working = domain.iter().cloned().zip(0..).collect::<Vec<(T, usize)>>();
        let mut bijections = vec![];

        for_each_permutation(&mut working, |ordering| {
            bijections.push(Bijection {
                domain: domain.clone(),
                images: ordering.iter().map(|(el, _)| el.clone()).collect(),
                targets: ordering.iter().map(|&(_, pos)| pos).collect(),
            });
        });

        tracing::debug!(
            elements = domain.len(),
            bijections = bijections.len(),
            "enumerated bijections"
        );

        BijectionSet {
            domain: domain.clone(),
            bijections,
        }
    }

    /// Position of the bijection that agrees with `mapping` on every element of the domain.
    ///
    /// Returns `Ok(None)` when `mapping` restricted to the domain is not one of the bijections and
    /// an error when applying `mapping` fails.
    pub fn position_of(&self, mapping: &Mapping<T>) -> Result<Option<usize>, Error> {
        let images = self
            .domain
            .iter()
            .map(|el| mapping.apply(el))
            .collect::<Result<Vec<T>, Error>>()?;

        Ok(self
            .bijections
            .iter()
            .position(|bijection| *bijection.images == *images))
    }
}

impl<T> BijectionSet<T> {
    pub fn domain(&self) -> &Domain<T> {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.bijections.len()
    }

    /// Always false, every domain has at least the identity bijection.
    pub fn is_empty(&self) -> bool {
        self.bijections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bijection<T>> {
        self.bijections.iter()
    }

    pub fn as_slice(&self) -> &[Bijection<T>] {
        &self.bijections
    }

    /// The bijection at index `n`.
    ///
    /// Any primitive integer can be used as index. Returns an error if `n` is negative or not
    /// less than [`len`](BijectionSet::len).
    pub fn nth<N: ToPrimitive>(&self, n: N) -> Result<&Bijection<T>, Error> {
        n.to_usize()
            .and_then(|i| self.bijections.get(i))
            .ok_or_else(|| Error::IndexOutOfBounds {
                index: n.to_i128().unwrap_or(i128::MAX),
                len: self.bijections.len(),
            })
    }
}

impl<'a, T> IntoIterator for &'a BijectionSet<T> {
    type Item = &'a Bijection<T>;
    type IntoIter = std::slice::Iter<'a, Bijection<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for BijectionSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.bijections.iter()).finish()
    }
}

/// All bijections of a set onto itself.
///
/// Repeated elements are dropped, keeping the first occurrence, which fixes the domain order.
/// Returns an error if there are no elements.
pub fn bijections_of<T, I>(domain: I) -> Result<BijectionSet<T>, Error>
where
    T: Clone + PartialEq,
    I: IntoIterator<Item = T>,
{
    let domain = Domain::new(domain)?;
    Ok(BijectionSet::of(&domain))
}

/// The `n`-th bijection of a set of bijections, in enumeration order.
///
/// Returns an error if `n` is negative or not less than the number of bijections.
pub fn find_nth_bijection<T, N>(n: N, bijections: &BijectionSet<T>) -> Result<&Bijection<T>, Error>
where
    N: ToPrimitive,
{
    bijections.nth(n)
}
