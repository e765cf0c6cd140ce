//! Pluggable element equality.
//!
//! The engine never assumes `T: Eq`. Callers hand it a [`Comparator`]
//! describing an equivalence relation, so two elements may be "the same"
//! while differing in fields the comparison ignores.
//!
//! The exact matcher buckets elements by hash before confirming with
//! equality, so it needs the stronger [`HashComparator`]. Every other
//! strategy only calls [`Comparator::equals`].

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

// =============================================================================
// Traits
// =============================================================================

/// An equivalence relation over `T`.
///
/// Must be reflexive, symmetric and transitive. Results are unspecified
/// (but memory safe) if it is not.
pub trait Comparator<T: ?Sized> {
    /// Whether `a` and `b` are the same element.
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// A [`Comparator`] with a compatible hash.
///
/// `equals(a, b)` must imply `hash_of(a) == hash_of(b)`.
pub trait HashComparator<T: ?Sized>: Comparator<T> {
    /// Hash `value` consistently with [`Comparator::equals`].
    fn hash_of(&self, value: &T) -> u64;
}

/// Any `Fn(&T, &T) -> bool` is a comparator.
impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[inline]
fn fx_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Natural
// =============================================================================

/// The type's own `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Eq + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: Eq + Hash + ?Sized> HashComparator<T> for Natural {
    #[inline]
    fn hash_of(&self, value: &T) -> u64 {
        fx_hash(value)
    }
}

// =============================================================================
// ByKey
// =============================================================================

/// Compare elements by a projected key.
///
/// # Example
///
/// ```
/// use seqdiff::{diff_exact, ByKey, DiffKind};
///
/// let old = [10, 21, 32];
/// let new = [0, 1, 2];
/// let script = diff_exact(&old, &new, &ByKey::new(|x: &i32| x % 10));
/// assert!(script.iter().all(|e| e.kind == DiffKind::Stable));
/// assert_eq!(script[0].value, 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Wrap a key projection.
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Eq,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }
}

impl<T, K, F> HashComparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    #[inline]
    fn hash_of(&self, value: &T) -> u64 {
        fx_hash(&(self.key)(value))
    }
}
