//! Enumeration of all orderings of a list.
//!
//! Orderings are generated in place using Heap's algorithm, so every ordering differs from the
//! previous one by a single swap.
use num_integer::Integer;
use num_traits::CheckedMul;

/// Visit every ordering of a slice.
///
/// The slice is rearranged in place and passed to `visit` once per ordering, `n!` times for `n`
/// elements. An empty slice has a single, empty, ordering.
///
/// When this returns, `elements` holds some ordering of its original contents, not necessarily the
/// original one.
pub fn for_each_permutation<T, F>(elements: &mut [T], mut visit: F)
where
    F: FnMut(&[T]),
{
    let n = elements.len();
    if n == 0 {
        visit(elements);
    } else {
        heap_permute(elements, n, &mut visit);
    }
}

fn heap_permute<T, F>(elements: &mut [T], k: usize, visit: &mut F)
where
    F: FnMut(&[T]),
{
    if k == 1 {
        visit(elements);
        return;
    }

    for i in 0..k - 1 {
        heap_permute(elements, k - 1, visit);
        let j = if k % 2 == 0 { i } else { 0 };
        elements.swap(j, k - 1);
    }
    heap_permute(elements, k - 1, visit);
}

/// All orderings of a slice, in the order they are visited by [`for_each_permutation`].
///
/// Each ordering is an independent copy. The input is left untouched.
pub fn permutations<T: Clone>(elements: &[T]) -> Vec<Vec<T>> {
    let mut working = elements.to_vec();
    let mut result = Vec::with_capacity(permutation_count(elements.len()).unwrap_or(0));
    for_each_permutation(&mut working, |ordering| result.push(ordering.to_vec()));
    result
}

/// Number of orderings of `n` elements.
///
/// Returns None if `n!` does not fit into `N`.
pub fn permutation_count<N>(n: N) -> Option<N>
where
    N: Integer + CheckedMul,
{
    let mut count = N::one();
    let mut k = N::one();
    while k <= n {
        count = count.checked_mul(&k)?;
        k = k + N::one();
    }
    Some(count)
}
