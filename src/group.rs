//! Groups, and the group of bijections of a finite set.
use num_integer::Integer;

use crate::domain::Domain;
use crate::error::Error;
use crate::mapping::Mapping;

/// A group with elements of type `A`.
///
/// Implementations must satisfy the group axioms: `binary_operation` is associative, `identity` is
/// neutral on both sides, and `binary_operation` of an element and its `inverse_of`, in either
/// order, is the identity.
pub trait Group<A> {
    fn binary_operation(&self, a: &A, b: &A) -> A;

    fn identity(&self) -> A;

    fn inverse_of(&self, a: &A) -> A;
}

/// The group of bijections of a finite set under composition.
///
/// The group's elements are [`Mapping`]s. They are compared by their action on the carrier set
/// `elements` fixed on construction.
#[derive(Clone, Debug)]
pub struct BijectionGroup<T> {
    elements: Domain<T>,
}

impl<T> BijectionGroup<T> {
    pub fn new(elements: Domain<T>) -> BijectionGroup<T> {
        BijectionGroup { elements }
    }

    /// The carrier set.
    pub fn elements(&self) -> &Domain<T> {
        &self.elements
    }
}

impl<T: PartialEq> BijectionGroup<T> {
    /// Create the group of bijections of some elements.
    ///
    /// Returns an error if there are no elements.
    pub fn from_elements<I>(elements: I) -> Result<BijectionGroup<T>, Error>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(BijectionGroup::new(Domain::new(elements)?))
    }
}

impl<T: Clone + PartialEq + 'static> Group<Mapping<T>> for BijectionGroup<T> {
    /// Composition `f ∘ g`, which applies `g` first.
    fn binary_operation(&self, f: &Mapping<T>, g: &Mapping<T>) -> Mapping<T> {
        let (f, g) = (f.clone(), g.clone());
        Mapping::new(move |el| f.apply(&g.apply(el)?))
    }

    fn identity(&self) -> Mapping<T> {
        Mapping::from_fn(|el: &T| el.clone())
    }

    /// The inverse of `f` with respect to the carrier set.
    ///
    /// The inverse is searched when it is applied: the image of `x` is the first `y` of the carrier
    /// set, in its order, with `f(y) = x`. Applying the inverse fails when there is no such `y`.
    fn inverse_of(&self, f: &Mapping<T>) -> Mapping<T> {
        let f = f.clone();
        let elements = self.elements.clone();
        Mapping::new(move |el| {
            for y in elements.iter() {
                if f.apply(y)? == *el {
                    return Ok(y.clone());
                }
            }
            tracing::trace!(carrier = elements.len(), "no preimage in carrier set");
            Err(Error::NoPreimage)
        })
    }
}

/// A power of a group element.
///
/// This performs exponentiation by squaring. A negative exponent gives a power of the inverse.
pub fn power<G, A, E>(group: &G, a: &A, exponent: E) -> A
where
    G: Group<A> + ?Sized,
    A: Clone,
    E: Integer,
{
    let mut result = group.identity();
    let (mut base, mut exp) = if exponent < E::zero() {
        // a^-n = (a^-1)^(n-1) a^-1, negating -n + 1 cannot overflow
        let inverse = group.inverse_of(a);
        result = inverse.clone();
        (inverse, E::zero() - (exponent + E::one()))
    } else {
        (a.clone(), exponent)
    };

    let two = E::one() + E::one();

    while exp > E::zero() {
        if exp.is_odd() {
            result = group.binary_operation(&result, &base);
        }
        exp = exp.div_floor(&two);
        if exp > E::zero() {
            base = group.binary_operation(&base, &base);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::{prelude::*, sample::Index};

    use crate::bijection::{bijections_of, find_nth_bijection, Bijection, BijectionSet};

    fn setup(n: u32) -> (BijectionGroup<u32>, Vec<Mapping<u32>>) {
        let domain = Domain::new(1..=n).unwrap();
        let mappings = BijectionSet::of(&domain)
            .iter()
            .map(|b| b.to_mapping())
            .collect();
        (BijectionGroup::new(domain), mappings)
    }

    fn same(group: &BijectionGroup<u32>, a: &Mapping<u32>, b: &Mapping<u32>) -> bool {
        a.agrees_with(b, group.elements().as_slice()).unwrap()
    }

    #[test]
    fn rotation_and_its_inverse() {
        let set = bijections_of(vec![1, 2, 3]).unwrap();
        let group = BijectionGroup::new(set.domain().clone());

        let rotation = Mapping::from(set.nth(4).unwrap().clone());
        assert_eq!(rotation.apply(&1), Ok(2));
        assert_eq!(rotation.apply(&2), Ok(3));
        assert_eq!(rotation.apply(&3), Ok(1));

        let inverse = group.inverse_of(&rotation);
        assert_eq!(inverse.apply(&1), Ok(3));
        assert_eq!(inverse.apply(&2), Ok(1));
        assert_eq!(inverse.apply(&3), Ok(2));

        let composed = group.binary_operation(&rotation, &inverse);
        for x in 1..=3 {
            assert_eq!(composed.apply(&x), Ok(x));
        }
    }

    #[test]
    fn composition_applies_right_operand_first() {
        let group = BijectionGroup::from_elements(0..10u32).unwrap();
        let double = Mapping::from_fn(|x: &u32| 2 * x);
        let succ = Mapping::from_fn(|x: &u32| x + 1);
        assert_eq!(group.binary_operation(&double, &succ).apply(&3), Ok(8));
        assert_eq!(group.binary_operation(&succ, &double).apply(&3), Ok(7));
    }

    #[test]
    fn inverse_of_non_bijection() {
        let group = BijectionGroup::from_elements(vec![1, 2, 3, 4]).unwrap();
        let succ = Mapping::from_fn(|x: &i32| x + 1);
        let inverse = group.inverse_of(&succ);

        assert_eq!(inverse.apply(&1), Err(Error::NoPreimage));
        assert_eq!(inverse.apply(&2), Ok(1));
        assert_eq!(inverse.apply(&5), Ok(4));
        assert_eq!(inverse.apply(&6), Err(Error::NoPreimage));

        let round_trip = group.binary_operation(&succ, &inverse);
        assert_eq!(round_trip.apply(&1), Err(Error::NoPreimage));
    }

    #[test]
    fn inverse_takes_first_preimage() {
        let group = BijectionGroup::from_elements(vec![3, 1, 2]).unwrap();
        let constant = Mapping::from_fn(|_: &i32| 0);
        assert_eq!(group.inverse_of(&constant).apply(&0), Ok(3));
    }

    #[test]
    fn inverse_propagates_failures() {
        let group = BijectionGroup::from_elements(vec![1, 2, 3]).unwrap();
        let outside = Bijection::identity(&Domain::new(vec![1, 2]).unwrap()).to_mapping();
        assert_eq!(group.inverse_of(&outside).apply(&3), Err(Error::NotInDomain));
    }

    #[test]
    fn nth_bijections_of_four() {
        let set = bijections_of(vec![1, 2, 3, 4]).unwrap();
        let group = BijectionGroup::new(set.domain().clone());

        let first = find_nth_bijection(0, &set).unwrap().to_mapping();
        let last = find_nth_bijection(23, &set).unwrap().to_mapping();
        assert!(find_nth_bijection(24, &set).is_err());

        let composed = group.binary_operation(&first, &last);
        assert!(set.position_of(&composed).unwrap().is_some());
    }

    #[test]
    fn powers() {
        let (group, mappings) = setup(4);
        let identity = group.identity();

        for f in mappings.iter() {
            assert!(same(&group, &power(&group, f, 0), &identity));
            assert!(same(&group, &power(&group, f, 1), f));
            assert!(same(&group, &power(&group, f, -1), &group.inverse_of(f)));
            // The order of every element of S_4 divides 12
            assert!(same(&group, &power(&group, f, 12), &identity));
            assert!(same(&group, &power(&group, f, 13), f));
        }
    }

    /// Integers modulo `n` under addition.
    struct Cyclic(i64);

    impl Group<i64> for Cyclic {
        fn binary_operation(&self, a: &i64, b: &i64) -> i64 {
            (a + b).rem_euclid(self.0)
        }

        fn identity(&self) -> i64 {
            0
        }

        fn inverse_of(&self, a: &i64) -> i64 {
            (-a).rem_euclid(self.0)
        }
    }

    #[test]
    fn least_exponents() {
        let z6 = Cyclic(6);
        assert_eq!(power(&z6, &1, i32::MIN), power(&z6, &1, i32::MIN % 6));
        assert_eq!(power(&z6, &1, i32::MIN), (i32::MIN as i64).rem_euclid(6));
        assert_eq!(power(&z6, &5, i64::MIN), power(&z6, &5, i64::MIN % 6));
        assert_eq!(power(&z6, &1, i8::MIN), 4);

        let (group, mappings) = setup(3);
        for f in mappings.iter() {
            // Orders in S_3 divide 6
            assert!(same(&group, &power(&group, f, i8::MIN), &power(&group, f, i8::MIN % 6)));
        }
    }

    #[test]
    fn whole_group() {
        let (group, mappings) = setup(3);
        let set = BijectionSet::of(group.elements());

        for f in mappings.iter() {
            let inverses = mappings
                .iter()
                .filter(|&g| {
                    same(&group, &group.binary_operation(f, g), &group.identity())
                        && same(&group, &group.binary_operation(g, f), &group.identity())
                })
                .count();
            assert_eq!(inverses, 1);

            for g in mappings.iter() {
                let composed = group.binary_operation(f, g);
                assert!(set.position_of(&composed).unwrap().is_some());
            }
        }
    }

    proptest! {
        #[test]
        fn inverse_roundtrip(n in 1..6u32) {
            let (group, mappings) = setup(n);
            let identity = group.identity();
            for f in mappings.iter() {
                let inverse = group.inverse_of(f);
                prop_assert!(same(&group, &group.binary_operation(f, &inverse), &identity));
                prop_assert!(same(&group, &group.binary_operation(&inverse, f), &identity));
            }
        }

        #[test]
        fn identity_is_neutral(n in 1..6u32, i in any::<Index>()) {
            let (group, mappings) = setup(n);
            let f = i.get(&mappings);
            let identity = group.identity();
            prop_assert!(same(&group, &group.binary_operation(&identity, f), f));
            prop_assert!(same(&group, &group.binary_operation(f, &identity), f));
        }

        #[test]
        fn double_inverse(n in 1..6u32, i in any::<Index>()) {
            let (group, mappings) = setup(n);
            let f = i.get(&mappings);
            prop_assert!(same(&group, &group.inverse_of(&group.inverse_of(f)), f));
        }

        #[test]
        fn associativity(
            n in 1..6u32,
            i in any::<Index>(),
            j in any::<Index>(),
            k in any::<Index>(),
        ) {
            let (group, mappings) = setup(n);
            let (f, g, h) = (i.get(&mappings), j.get(&mappings), k.get(&mappings));
            let left = group.binary_operation(&group.binary_operation(f, g), h);
            let right = group.binary_operation(f, &group.binary_operation(g, h));
            prop_assert!(same(&group, &left, &right));
        }

        #[test]
        fn closure(n in 1..5u32, i in any::<Index>(), j in any::<Index>()) {
            let (group, mappings) = setup(n);
            let set = BijectionSet::of(group.elements());
            let (f, g) = (i.get(&mappings), j.get(&mappings));
            prop_assert!(set.position_of(&group.binary_operation(f, g)).unwrap().is_some());
            prop_assert!(set.position_of(&group.inverse_of(f)).unwrap().is_some());
        }

        #[test]
        fn cyclic_powers(n in 1..1000i64, a in 0..1000i64, e in any::<i64>()) {
            let a = a % n;
            let expected = (a as i128 * e as i128).rem_euclid(n as i128) as i64;
            prop_assert_eq!(power(&Cyclic(n), &a, e), expected);
        }

        #[test]
        fn adding_signed_exponents(
            i in any::<Index>(),
            a in -50..50i32,
            b in -50..50i32,
        ) {
            let (group, mappings) = setup(4);
            let f = i.get(&mappings);
            let combined = group.binary_operation(&power(&group, f, a), &power(&group, f, b));
            prop_assert!(same(&group, &combined, &power(&group, f, a + b)));
        }
    }
}
