//! The binary set operations and disjointness.
//!
//! Intersection (`&`), union (`|`), symmetric difference (`^`), and
//! difference (`-`) between the symbolic singletons and arbitrary finite
//! sets, plus the reflected forms with a standard-library set on the
//! left. The algebra short-circuits symbolically:
//!
//! - `EMPTY` absorbs under `&` and is the identity under `|` and `^`.
//! - `UNIVERSE` absorbs under `|` and is the identity under `&`; the
//!   identity holds by reuse, not by copy — the operand comes back
//!   unchanged.
//! - `UNIVERSE ^ s` and `UNIVERSE - s` are the complement of `s`, which
//!   only exists when `s` is empty or symbolic; for a non-empty finite
//!   `s` they return [`UnboundedError`].
//!
//! Operands that are not set-shaped are rejected at compile time on
//! either side:
//!
//! ```compile_fail
//! let _ = vec![1, 2] - symset::singleton::EMPTY;
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::algebra::SetValue;
use crate::error::UnboundedError;
use crate::protocol::{FiniteSet, SetOperand};
use crate::singleton::{EmptySet, SymbolicSet, UniverseSet, EMPTY, UNIVERSE};

/// The complement of a finite set: the universal set when the operand is
/// empty, unrepresentable otherwise.
fn complement_of_finite<S: FiniteSet>(
    set: &S,
    operation: &'static str,
) -> Result<UniverseSet, UnboundedError> {
    if set.is_empty() {
        Ok(UNIVERSE)
    } else {
        Err(UnboundedError::new(operation))
    }
}

// =============================================================================
// Disjointness
// =============================================================================

impl EmptySet {
    /// Returns `true`: the empty set shares no element with any set.
    #[must_use]
    pub fn is_disjoint<S: SetOperand>(&self, _other: &S) -> bool {
        true
    }
}

impl UniverseSet {
    /// Returns `true` only when `other` is empty: the universal set
    /// shares every element a nonempty set has.
    #[must_use]
    pub fn is_disjoint<S: SetOperand>(&self, other: &S) -> bool {
        other.is_empty_set()
    }
}

impl SymbolicSet {
    /// Returns whether this singleton shares no element with `other`.
    #[must_use]
    pub fn is_disjoint<S: SetOperand>(&self, other: &S) -> bool {
        match self {
            Self::Empty(empty) => empty.is_disjoint(other),
            Self::Universe(universe) => universe.is_disjoint(other),
        }
    }
}

// =============================================================================
// Engine methods: SymbolicSet × finite set
// =============================================================================

impl SymbolicSet {
    /// Intersects this singleton with a finite set.
    ///
    /// The empty set absorbs; the universal set passes `other` back
    /// unchanged.
    #[must_use]
    pub fn intersection<S: FiniteSet>(self, other: S) -> SetValue<S> {
        match self {
            Self::Empty(empty) => SetValue::from(empty),
            Self::Universe(_) => SetValue::Finite(other),
        }
    }

    /// Unions this singleton with a finite set.
    ///
    /// The empty set passes `other` back unchanged; the universal set
    /// absorbs.
    #[must_use]
    pub fn union<S: FiniteSet>(self, other: S) -> SetValue<S> {
        match self {
            Self::Empty(_) => SetValue::Finite(other),
            Self::Universe(universe) => SetValue::from(universe),
        }
    }

    /// Takes the symmetric difference of this singleton and a finite set.
    ///
    /// For the empty set this is `other` unchanged. For the universal set
    /// it is the complement of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`UnboundedError`] when the result would be the complement
    /// of a non-empty finite set, which has no finite representation.
    pub fn symmetric_difference<S: FiniteSet>(
        self,
        other: S,
    ) -> Result<SetValue<S>, UnboundedError> {
        match self {
            Self::Empty(_) => Ok(SetValue::Finite(other)),
            Self::Universe(_) => {
                complement_of_finite(&other, "symmetric_difference").map(SetValue::from)
            }
        }
    }

    /// Subtracts a finite set from this singleton.
    ///
    /// For the empty set the result is empty. For the universal set it is
    /// the complement of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`UnboundedError`] when the result would be the complement
    /// of a non-empty finite set, which has no finite representation.
    pub fn difference<S: FiniteSet>(self, other: S) -> Result<SetValue<S>, UnboundedError> {
        match self {
            Self::Empty(empty) => Ok(SetValue::from(empty)),
            Self::Universe(_) => complement_of_finite(&other, "difference").map(SetValue::from),
        }
    }
}

// =============================================================================
// EmptySet (left) × finite set
// =============================================================================

impl<S: FiniteSet> BitAnd<S> for EmptySet {
    type Output = Self;

    fn bitand(self, _other: S) -> Self {
        EMPTY
    }
}

impl<S: FiniteSet> BitOr<S> for EmptySet {
    type Output = S;

    fn bitor(self, other: S) -> S {
        other
    }
}

impl<S: FiniteSet> BitXor<S> for EmptySet {
    type Output = S;

    fn bitxor(self, other: S) -> S {
        other
    }
}

impl<S: FiniteSet> Sub<S> for EmptySet {
    type Output = Self;

    fn sub(self, _other: S) -> Self {
        EMPTY
    }
}

// =============================================================================
// UniverseSet (left) × finite set
// =============================================================================

impl<S: FiniteSet> BitAnd<S> for UniverseSet {
    type Output = S;

    fn bitand(self, other: S) -> S {
        other
    }
}

impl<S: FiniteSet> BitOr<S> for UniverseSet {
    type Output = Self;

    fn bitor(self, _other: S) -> Self {
        UNIVERSE
    }
}

impl<S: FiniteSet> BitXor<S> for UniverseSet {
    type Output = Result<Self, UnboundedError>;

    fn bitxor(self, other: S) -> Self::Output {
        complement_of_finite(&other, "symmetric_difference")
    }
}

impl<S: FiniteSet> Sub<S> for UniverseSet {
    type Output = Result<Self, UnboundedError>;

    fn sub(self, other: S) -> Self::Output {
        complement_of_finite(&other, "difference")
    }
}

// =============================================================================
// SymbolicSet (left) × finite set
// =============================================================================

impl<S: FiniteSet> BitAnd<S> for SymbolicSet {
    type Output = SetValue<S>;

    fn bitand(self, other: S) -> Self::Output {
        self.intersection(other)
    }
}

impl<S: FiniteSet> BitOr<S> for SymbolicSet {
    type Output = SetValue<S>;

    fn bitor(self, other: S) -> Self::Output {
        self.union(other)
    }
}

impl<S: FiniteSet> BitXor<S> for SymbolicSet {
    type Output = Result<SetValue<S>, UnboundedError>;

    fn bitxor(self, other: S) -> Self::Output {
        self.symmetric_difference(other)
    }
}

impl<S: FiniteSet> Sub<S> for SymbolicSet {
    type Output = Result<SetValue<S>, UnboundedError>;

    fn sub(self, other: S) -> Self::Output {
        self.difference(other)
    }
}

// =============================================================================
// Symbolic × symbolic
// =============================================================================

impl BitAnd for EmptySet {
    type Output = Self;

    fn bitand(self, _other: Self) -> Self {
        EMPTY
    }
}

impl BitAnd<UniverseSet> for EmptySet {
    type Output = Self;

    fn bitand(self, _other: UniverseSet) -> Self {
        EMPTY
    }
}

impl BitAnd<SymbolicSet> for EmptySet {
    type Output = Self;

    fn bitand(self, _other: SymbolicSet) -> Self {
        EMPTY
    }
}

impl BitOr for EmptySet {
    type Output = Self;

    fn bitor(self, _other: Self) -> Self {
        EMPTY
    }
}

impl BitOr<UniverseSet> for EmptySet {
    type Output = UniverseSet;

    fn bitor(self, _other: UniverseSet) -> UniverseSet {
        UNIVERSE
    }
}

impl BitOr<SymbolicSet> for EmptySet {
    type Output = SymbolicSet;

    fn bitor(self, other: SymbolicSet) -> SymbolicSet {
        other
    }
}

impl BitXor for EmptySet {
    type Output = Self;

    fn bitxor(self, _other: Self) -> Self {
        EMPTY
    }
}

impl BitXor<UniverseSet> for EmptySet {
    type Output = UniverseSet;

    fn bitxor(self, _other: UniverseSet) -> UniverseSet {
        UNIVERSE
    }
}

impl BitXor<SymbolicSet> for EmptySet {
    type Output = SymbolicSet;

    fn bitxor(self, other: SymbolicSet) -> SymbolicSet {
        other
    }
}

impl Sub for EmptySet {
    type Output = Self;

    fn sub(self, _other: Self) -> Self {
        EMPTY
    }
}

impl Sub<UniverseSet> for EmptySet {
    type Output = Self;

    fn sub(self, _other: UniverseSet) -> Self {
        EMPTY
    }
}

impl Sub<SymbolicSet> for EmptySet {
    type Output = Self;

    fn sub(self, _other: SymbolicSet) -> Self {
        EMPTY
    }
}

impl BitAnd<EmptySet> for UniverseSet {
    type Output = EmptySet;

    fn bitand(self, _other: EmptySet) -> EmptySet {
        EMPTY
    }
}

impl BitAnd for UniverseSet {
    type Output = Self;

    fn bitand(self, _other: Self) -> Self {
        UNIVERSE
    }
}

impl BitAnd<SymbolicSet> for UniverseSet {
    type Output = SymbolicSet;

    fn bitand(self, other: SymbolicSet) -> SymbolicSet {
        other
    }
}

impl BitOr<EmptySet> for UniverseSet {
    type Output = Self;

    fn bitor(self, _other: EmptySet) -> Self {
        UNIVERSE
    }
}

impl BitOr for UniverseSet {
    type Output = Self;

    fn bitor(self, _other: Self) -> Self {
        UNIVERSE
    }
}

impl BitOr<SymbolicSet> for UniverseSet {
    type Output = Self;

    fn bitor(self, _other: SymbolicSet) -> Self {
        UNIVERSE
    }
}

impl BitXor<EmptySet> for UniverseSet {
    type Output = Self;

    fn bitxor(self, _other: EmptySet) -> Self {
        UNIVERSE
    }
}

impl BitXor for UniverseSet {
    type Output = EmptySet;

    fn bitxor(self, _other: Self) -> EmptySet {
        EMPTY
    }
}

impl BitXor<SymbolicSet> for UniverseSet {
    type Output = SymbolicSet;

    fn bitxor(self, other: SymbolicSet) -> SymbolicSet {
        other.complement()
    }
}

impl Sub<EmptySet> for UniverseSet {
    type Output = Self;

    fn sub(self, _other: EmptySet) -> Self {
        UNIVERSE
    }
}

impl Sub for UniverseSet {
    type Output = EmptySet;

    fn sub(self, _other: Self) -> EmptySet {
        EMPTY
    }
}

impl Sub<SymbolicSet> for UniverseSet {
    type Output = SymbolicSet;

    fn sub(self, other: SymbolicSet) -> SymbolicSet {
        other.complement()
    }
}

impl BitAnd<EmptySet> for SymbolicSet {
    type Output = EmptySet;

    fn bitand(self, _other: EmptySet) -> EmptySet {
        EMPTY
    }
}

impl BitAnd<UniverseSet> for SymbolicSet {
    type Output = Self;

    fn bitand(self, _other: UniverseSet) -> Self {
        self
    }
}

impl BitAnd for SymbolicSet {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        match self {
            Self::Empty(_) => Self::EMPTY,
            Self::Universe(_) => other,
        }
    }
}

impl BitOr<EmptySet> for SymbolicSet {
    type Output = Self;

    fn bitor(self, _other: EmptySet) -> Self {
        self
    }
}

impl BitOr<UniverseSet> for SymbolicSet {
    type Output = UniverseSet;

    fn bitor(self, _other: UniverseSet) -> UniverseSet {
        UNIVERSE
    }
}

impl BitOr for SymbolicSet {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        match self {
            Self::Empty(_) => other,
            Self::Universe(_) => Self::UNIVERSE,
        }
    }
}

impl BitXor<EmptySet> for SymbolicSet {
    type Output = Self;

    fn bitxor(self, _other: EmptySet) -> Self {
        self
    }
}

impl BitXor<UniverseSet> for SymbolicSet {
    type Output = Self;

    fn bitxor(self, _other: UniverseSet) -> Self {
        self.complement()
    }
}

impl BitXor for SymbolicSet {
    type Output = Self;

    fn bitxor(self, other: Self) -> Self {
        match self {
            Self::Empty(_) => other,
            Self::Universe(_) => other.complement(),
        }
    }
}

impl Sub<EmptySet> for SymbolicSet {
    type Output = Self;

    fn sub(self, _other: EmptySet) -> Self {
        self
    }
}

impl Sub<UniverseSet> for SymbolicSet {
    type Output = EmptySet;

    fn sub(self, _other: UniverseSet) -> EmptySet {
        EMPTY
    }
}

impl Sub for SymbolicSet {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        match self {
            Self::Empty(_) => Self::EMPTY,
            Self::Universe(_) => other.complement(),
        }
    }
}

// =============================================================================
// Standard-library sets (left) × symbolic
// =============================================================================

/// Stamps the reflected operator matrix for one finite-set container.
macro_rules! impl_reflected_set_ops {
    ($({$($generics:tt)*} $set:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> BitAnd<EmptySet> for $set {
                type Output = EmptySet;

                fn bitand(self, _other: EmptySet) -> EmptySet {
                    EMPTY
                }
            }

            impl<$($generics)*> BitAnd<UniverseSet> for $set {
                type Output = Self;

                fn bitand(self, _other: UniverseSet) -> Self {
                    self
                }
            }

            impl<$($generics)*> BitAnd<SymbolicSet> for $set {
                type Output = SetValue<Self>;

                fn bitand(self, other: SymbolicSet) -> Self::Output {
                    other.intersection(self)
                }
            }

            impl<$($generics)*> BitOr<EmptySet> for $set {
                type Output = Self;

                fn bitor(self, _other: EmptySet) -> Self {
                    self
                }
            }

            impl<$($generics)*> BitOr<UniverseSet> for $set {
                type Output = UniverseSet;

                fn bitor(self, _other: UniverseSet) -> UniverseSet {
                    UNIVERSE
                }
            }

            impl<$($generics)*> BitOr<SymbolicSet> for $set {
                type Output = SetValue<Self>;

                fn bitor(self, other: SymbolicSet) -> Self::Output {
                    other.union(self)
                }
            }

            impl<$($generics)*> BitXor<EmptySet> for $set {
                type Output = Self;

                fn bitxor(self, _other: EmptySet) -> Self {
                    self
                }
            }

            impl<$($generics)*> BitXor<UniverseSet> for $set {
                type Output = Result<UniverseSet, UnboundedError>;

                fn bitxor(self, _other: UniverseSet) -> Self::Output {
                    complement_of_finite(&self, "symmetric_difference")
                }
            }

            impl<$($generics)*> BitXor<SymbolicSet> for $set {
                type Output = Result<SetValue<Self>, UnboundedError>;

                fn bitxor(self, other: SymbolicSet) -> Self::Output {
                    other.symmetric_difference(self)
                }
            }

            impl<$($generics)*> Sub<EmptySet> for $set {
                type Output = Self;

                fn sub(self, _other: EmptySet) -> Self {
                    self
                }
            }

            impl<$($generics)*> Sub<UniverseSet> for $set {
                type Output = EmptySet;

                fn sub(self, _other: UniverseSet) -> EmptySet {
                    EMPTY
                }
            }

            impl<$($generics)*> Sub<SymbolicSet> for $set {
                type Output = SetValue<Self>;

                fn sub(self, other: SymbolicSet) -> Self::Output {
                    match other {
                        SymbolicSet::Empty(_) => SetValue::Finite(self),
                        SymbolicSet::Universe(_) => SetValue::from(EMPTY),
                    }
                }
            }
        )+
    };
}

impl_reflected_set_ops! {
    {T: Eq + Hash, RS: BuildHasher} HashSet<T, RS>,
    {'a, T: Eq + Hash, RS: BuildHasher} &'a HashSet<T, RS>,
    {T: Ord} BTreeSet<T>,
    {'a, T: Ord} &'a BTreeSet<T>,
}
