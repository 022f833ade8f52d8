//! The capability interface that external finite sets implement.
//!
//! The set-algebra engine never inspects the concrete representation of an
//! operand. Everything it needs is expressed by two small traits:
//!
//! - [`FiniteSet`]: the observable behavior of an ordinary finite set
//!   (membership, length, iteration). Implemented out of the box for
//!   [`HashSet`] and [`BTreeSet`], and for references to any implementor so
//!   that operands can be borrowed instead of moved.
//! - [`SetOperand`]: the classification the engine dispatches on — how many
//!   elements does this operand have, or is it unbounded? Implemented by
//!   every [`FiniteSet`] and by the symbolic singletons themselves.
//!
//! The module also defines the canonical content hash for finite sets:
//! an order-independent combination of the element hashes, arranged so
//! that every zero-element set hashes to [`EMPTY_SET_HASH`]. The symbolic
//! empty set hashes to the same value, which keeps equal values hashing
//! equally across the symbolic/finite boundary.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::{BTreeSet, HashSet};
//! use symset::protocol::{set_hash, Cardinality, FiniteSet, SetOperand};
//!
//! let hashed: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let ordered: BTreeSet<i32> = [3, 2, 1].into_iter().collect();
//!
//! // Same elements, same content hash, regardless of container or order.
//! assert_eq!(set_hash(&hashed), set_hash(&ordered));
//!
//! assert_eq!(hashed.cardinality(), Cardinality::Finite(3));
//! assert!(!hashed.is_empty_set());
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, DefaultHasher, Hash, Hasher};

// =============================================================================
// Cardinality
// =============================================================================

/// The number of elements in a set, or the marker that no finite count
/// exists.
///
/// # Examples
///
/// ```rust
/// use symset::protocol::Cardinality;
///
/// assert!(Cardinality::Finite(0).is_empty());
/// assert!(Cardinality::Finite(3).is_finite());
/// assert!(Cardinality::Unbounded.is_unbounded());
/// assert_eq!(Cardinality::Finite(3).checked_len(), Some(3));
/// assert_eq!(Cardinality::Unbounded.checked_len(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// A finite element count.
    Finite(usize),
    /// No finite count exists; enumeration is not representable.
    Unbounded,
}

impl Cardinality {
    /// Returns `true` when the count is finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns `true` when no finite count exists.
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns `true` when the count is exactly zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Finite(0))
    }

    /// Returns the finite count, or `None` when unbounded.
    #[must_use]
    pub const fn checked_len(self) -> Option<usize> {
        match self {
            Self::Finite(length) => Some(length),
            Self::Unbounded => None,
        }
    }
}

// =============================================================================
// FiniteSet
// =============================================================================

/// The observable behavior of an external finite set.
///
/// The engine calls only through this interface; it never depends on the
/// operand's internal representation. Any collection with membership
/// testing, a length, and element iteration can participate in the
/// algebra by implementing it.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use symset::protocol::FiniteSet;
///
/// let set: HashSet<i32> = [1, 2].into_iter().collect();
/// assert!(FiniteSet::contains(&set, &1));
/// assert_eq!(FiniteSet::len(&set), 2);
/// assert_eq!(FiniteSet::iter(&set).count(), 2);
/// ```
pub trait FiniteSet {
    /// The element type of the set.
    type Element;

    /// Returns `true` when `element` is a member of the set.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` when the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements of the set.
    fn iter(&self) -> impl Iterator<Item = &Self::Element>;
}

impl<T: Eq + Hash, S: BuildHasher> FiniteSet for HashSet<T, S> {
    type Element = T;

    fn contains(&self, element: &T) -> bool {
        HashSet::contains(self, element)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        HashSet::iter(self)
    }
}

impl<T: Ord> FiniteSet for BTreeSet<T> {
    type Element = T;

    fn contains(&self, element: &T) -> bool {
        BTreeSet::contains(self, element)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }
}

impl<F: FiniteSet + ?Sized> FiniteSet for &F {
    type Element = F::Element;

    fn contains(&self, element: &F::Element) -> bool {
        F::contains(self, element)
    }

    fn len(&self) -> usize {
        F::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &F::Element> {
        F::iter(self)
    }
}

// =============================================================================
// SetOperand
// =============================================================================

/// The shape classification the engine dispatches on.
///
/// Every operand of the algebra is either a finite set with a known
/// element count or the unbounded universal set. In this two-singleton
/// domain, an unbounded operand is the universal set.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use symset::prelude::*;
///
/// let set: HashSet<i32> = HashSet::new();
/// assert!(set.is_empty_set());
/// assert!(!set.is_universal());
/// assert!(UNIVERSE.is_universal());
/// ```
pub trait SetOperand {
    /// Returns the operand's cardinality.
    fn cardinality(&self) -> Cardinality;

    /// Returns `true` when the operand has no elements.
    fn is_empty_set(&self) -> bool {
        self.cardinality().is_empty()
    }

    /// Returns `true` when the operand is universe-equivalent.
    fn is_universal(&self) -> bool {
        self.cardinality().is_unbounded()
    }
}

impl<S: FiniteSet> SetOperand for S {
    fn cardinality(&self) -> Cardinality {
        Cardinality::Finite(self.len())
    }
}

// =============================================================================
// Materializing the empty singleton
// =============================================================================

/// The empty singleton is interchangeable with any zero-element finite
/// set, so it converts into one. This is the bridge for APIs that expect
/// a concrete set operand, such as the standard library's own
/// `is_disjoint`:
///
/// ```rust
/// use std::collections::HashSet;
/// use symset::singleton::EMPTY;
///
/// let numbers: HashSet<i32> = [1, 2].into_iter().collect();
/// assert!(numbers.is_disjoint(&EMPTY.into()));
/// ```
impl<T, S: Default> From<crate::singleton::EmptySet> for HashSet<T, S> {
    fn from(_empty: crate::singleton::EmptySet) -> Self {
        Self::default()
    }
}

impl<T> From<crate::singleton::EmptySet> for BTreeSet<T> {
    fn from(_empty: crate::singleton::EmptySet) -> Self {
        Self::new()
    }
}

// =============================================================================
// Content hashing
// =============================================================================

/// Spreads one element hash across the word so that XOR-accumulation of
/// many elements does not cancel structure.
const fn shuffle_bits(hash: u64) -> u64 {
    ((hash ^ 89_869_747) ^ (hash << 16)).wrapping_mul(3_644_798_167)
}

/// Folds the accumulated element hashes and the element count into the
/// final content hash.
const fn finalize_set_hash(accumulated: u64, len: usize) -> u64 {
    let mut hash = accumulated ^ (len as u64 + 1).wrapping_mul(1_927_868_237);
    hash ^= (hash >> 11) ^ (hash >> 25);
    hash.wrapping_mul(69_069).wrapping_add(907_133_923)
}

/// The content hash of every zero-element set.
///
/// [`set_hash`] produces this value for any empty [`FiniteSet`], and the
/// symbolic empty set hashes to it as well. The universal set hashes to
/// its bitwise complement.
pub const EMPTY_SET_HASH: u64 = finalize_set_hash(0, 0);

/// Computes the canonical, order-independent content hash of a finite set.
///
/// Two sets with equal elements hash equally no matter the container type
/// or iteration order. An empty set hashes to [`EMPTY_SET_HASH`].
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use symset::protocol::{set_hash, EMPTY_SET_HASH};
///
/// let empty: HashSet<u8> = HashSet::new();
/// assert_eq!(set_hash(&empty), EMPTY_SET_HASH);
/// ```
#[must_use]
pub fn set_hash<S>(set: &S) -> u64
where
    S: FiniteSet,
    S::Element: Hash,
{
    let mut accumulated = 0;
    for element in set.iter() {
        let mut hasher = DefaultHasher::new();
        element.hash(&mut hasher);
        accumulated ^= shuffle_bits(hasher.finish());
    }
    finalize_set_hash(accumulated, set.len())
}
