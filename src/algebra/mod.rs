//! The set-algebra engine.
//!
//! Pure, total operations between the symbolic singletons and arbitrary
//! finite sets: equality, subset ordering, the four binary set operators
//! (with reflected forms for the standard-library set types), and
//! disjointness. Every operation is a function of its inputs — no shared
//! state, no allocation, no side effects. Results either reuse an operand
//! or are one of the two singletons.
//!
//! # Overview
//!
//! The engine dispatches exactly once, on "which singleton × operand
//! shape". With the statically-typed markers the dispatch happens at
//! compile time and the operator impls have precise output types; with
//! [`SymbolicSet`] it is a single `match`. Operands participate through
//! the [`FiniteSet`] capability interface, never through their concrete
//! representation.
//!
//! Operands that are not set-shaped have no impls, so `EMPTY & 42` or
//! `EMPTY < "text"` is rejected by the compiler on either side:
//!
//! ```compile_fail
//! let _ = symset::singleton::EMPTY & 42;
//! ```
//!
//! ```compile_fail
//! let _ = symset::singleton::EMPTY < "not a set";
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use symset::prelude::*;
//!
//! let numbers: HashSet<i32> = [1, 2, 3].into_iter().collect();
//!
//! // Absorption and identity.
//! assert_eq!(EMPTY & &numbers, EMPTY);
//! assert_eq!(UNIVERSE & &numbers, &numbers);
//! assert_eq!(EMPTY | &numbers, &numbers);
//! assert_eq!(UNIVERSE | &numbers, UNIVERSE);
//!
//! // Ordering is the subset relation.
//! assert!(EMPTY < numbers);
//! assert!(UNIVERSE > numbers);
//!
//! // The complement of a non-empty finite set is not materializable.
//! assert!((UNIVERSE - &numbers).is_err());
//! ```

mod compare;
mod ops;

use crate::protocol::{Cardinality, FiniteSet, SetOperand};
use crate::singleton::{EmptySet, SymbolicSet, UniverseSet};

// =============================================================================
// SetValue
// =============================================================================

/// The result of a binary operation whose shape is only known at runtime:
/// either one of the two singletons, or a finite set passed through
/// unchanged.
///
/// Equality is by set value: `Symbolic(EMPTY)` equals `Finite(s)` exactly
/// when `s` has no elements, and a `Finite` never equals the universal
/// set.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use symset::prelude::*;
///
/// let numbers: HashSet<i32> = [7].into_iter().collect();
///
/// let intersection = SymbolicSet::UNIVERSE & &numbers;
/// assert_eq!(intersection, SetValue::Finite(&numbers));
/// assert_eq!(intersection.as_finite(), Some(&&numbers));
///
/// let union = SymbolicSet::UNIVERSE | &numbers;
/// assert!(union.is_universe());
/// ```
#[derive(Debug, Clone, Copy)]
pub enum SetValue<S> {
    /// One of the two symbolic singletons.
    Symbolic(SymbolicSet),
    /// A finite set, passed through without copying.
    Finite(S),
}

impl<S> SetValue<S> {
    /// Returns the finite set, or `None` for a symbolic result.
    #[must_use]
    pub const fn as_finite(&self) -> Option<&S> {
        match self {
            Self::Symbolic(_) => None,
            Self::Finite(set) => Some(set),
        }
    }

    /// Consumes the value and returns the finite set, or `None` for a
    /// symbolic result.
    #[must_use]
    pub fn into_finite(self) -> Option<S> {
        match self {
            Self::Symbolic(_) => None,
            Self::Finite(set) => Some(set),
        }
    }

    /// Returns the singleton, or `None` for a finite result.
    #[must_use]
    pub const fn as_symbolic(&self) -> Option<SymbolicSet> {
        match self {
            Self::Symbolic(symbolic) => Some(*symbolic),
            Self::Finite(_) => None,
        }
    }

    /// Returns `true` when the result is the universal set.
    #[must_use]
    pub const fn is_universe(&self) -> bool {
        matches!(self, Self::Symbolic(SymbolicSet::Universe(_)))
    }
}

impl<S: FiniteSet> SetOperand for SetValue<S> {
    fn cardinality(&self) -> Cardinality {
        match self {
            Self::Symbolic(symbolic) => symbolic.cardinality(),
            Self::Finite(set) => Cardinality::Finite(set.len()),
        }
    }
}

impl<S: FiniteSet + PartialEq> PartialEq for SetValue<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Symbolic(left), Self::Symbolic(right)) => left == right,
            (Self::Finite(left), Self::Finite(right)) => left == right,
            (Self::Symbolic(symbolic), Self::Finite(finite))
            | (Self::Finite(finite), Self::Symbolic(symbolic)) => {
                symbolic.is_empty() && finite.is_empty()
            }
        }
    }
}

impl<S: FiniteSet + Eq> Eq for SetValue<S> {}

impl<S: FiniteSet + PartialEq> PartialEq<S> for SetValue<S> {
    fn eq(&self, other: &S) -> bool {
        match self {
            Self::Symbolic(symbolic) => symbolic.is_empty() && other.is_empty(),
            Self::Finite(set) => set == other,
        }
    }
}

impl<S> PartialEq<SymbolicSet> for SetValue<S>
where
    S: FiniteSet,
{
    fn eq(&self, other: &SymbolicSet) -> bool {
        match self {
            Self::Symbolic(symbolic) => symbolic == other,
            Self::Finite(set) => other.is_empty() && set.is_empty(),
        }
    }
}

impl<S> From<SymbolicSet> for SetValue<S> {
    fn from(symbolic: SymbolicSet) -> Self {
        Self::Symbolic(symbolic)
    }
}

impl<S> From<EmptySet> for SetValue<S> {
    fn from(empty: EmptySet) -> Self {
        Self::Symbolic(empty.into())
    }
}

impl<S> From<UniverseSet> for SetValue<S> {
    fn from(universe: UniverseSet) -> Self {
        Self::Symbolic(universe.into())
    }
}
