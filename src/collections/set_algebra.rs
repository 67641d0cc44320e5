//! Set algebra over ordered sets.
//!
//! Every operation borrows its inputs and allocates a fresh result, so
//! callers can derive several views from the same sets without cloning
//! them up front.
//!
//! | Operation | Result |
//! |---|---|
//! | [`union`] | {x : x ∈ a ∨ x ∈ b} |
//! | [`intersect`] | {x : x ∈ a ∧ x ∈ b} |
//! | [`difference`] | {x : x ∈ a ∧ x ∉ b} |
//!
//! All functions are total. Merging is linear in `|a| + |b|` because both
//! inputs are already sorted.

use std::collections::BTreeSet;

/// Returns every element present in `a` or `b`.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use u_vaxsets::collections::union;
/// let a: BTreeSet<_> = [1, 2].into();
/// let b: BTreeSet<_> = [2, 3].into();
/// assert_eq!(union(&a, &b), BTreeSet::from([1, 2, 3]));
/// ```
pub fn union<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.union(b).cloned().collect()
}

/// Returns the elements present in both `a` and `b`.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use u_vaxsets::collections::intersect;
/// let a: BTreeSet<_> = [1, 2, 3].into();
/// let b: BTreeSet<_> = [2, 3, 4].into();
/// assert_eq!(intersect(&a, &b), BTreeSet::from([2, 3]));
/// ```
pub fn intersect<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.intersection(b).cloned().collect()
}

/// Returns the elements of `a` that are not in `b`.
///
/// Not symmetric: `difference(a, b)` and `difference(b, a)` generally differ.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use u_vaxsets::collections::difference;
/// let a: BTreeSet<_> = [1, 2, 3].into();
/// let b: BTreeSet<_> = [2].into();
/// assert_eq!(difference(&a, &b), BTreeSet::from([1, 3]));
/// assert_eq!(difference(&b, &a), BTreeSet::new());
/// ```
pub fn difference<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.difference(b).cloned().collect()
}

/// Folds [`union`] over any number of sets. Empty input yields the empty set.
pub fn union_all<'a, T, I>(sets: I) -> BTreeSet<T>
where
    T: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a BTreeSet<T>>,
{
    sets.into_iter().fold(BTreeSet::new(), |mut acc, set| {
        acc.extend(set.iter().cloned());
        acc
    })
}

// ============================================================================
// Tests
// ============================================================================
