//! Equality and subset ordering between symbolic and finite sets.
//!
//! Two sets are equal iff both are empty or both are the universal set;
//! a finite set never equals the universal set. The comparison operators
//! are the subset relations: `a <= b` means `a ⊆ b`. The empty set is a
//! subset of everything; the universal set is a superset of everything
//! and a *strict* superset of every finite set.
//!
//! Comparisons exist only between set-shaped operands. The generic forms
//! ([`EmptySet::set_eq`], [`UniverseSet::set_cmp`], …) accept any
//! [`SetOperand`] and are total; the operator forms are implemented for
//! the symbolic types and the standard-library set types in both
//! directions.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use crate::protocol::SetOperand;
use crate::singleton::{EmptySet, SymbolicSet, UniverseSet};

// =============================================================================
// Generic predicates over any SetOperand
// =============================================================================

impl EmptySet {
    /// Returns `true` when this set equals `other`: exactly when `other`
    /// has no elements.
    #[must_use]
    pub fn set_eq<S: SetOperand>(&self, other: &S) -> bool {
        other.is_empty_set()
    }

    /// Returns `true`: the empty set is a subset of every set.
    #[must_use]
    pub fn is_subset<S: SetOperand>(&self, _other: &S) -> bool {
        true
    }

    /// Returns `true` when `other` is also empty.
    #[must_use]
    pub fn is_superset<S: SetOperand>(&self, other: &S) -> bool {
        other.is_empty_set()
    }

    /// Compares by the subset relation. Total over sets: the empty set is
    /// below every nonempty set and equal to every empty one.
    #[must_use]
    pub fn set_cmp<S: SetOperand>(&self, other: &S) -> Ordering {
        if other.is_empty_set() {
            Ordering::Equal
        } else {
            Ordering::Less
        }
    }
}

impl UniverseSet {
    /// Returns `true` when this set equals `other`: exactly when `other`
    /// is universe-equivalent, which no finite set is.
    #[must_use]
    pub fn set_eq<S: SetOperand>(&self, other: &S) -> bool {
        other.is_universal()
    }

    /// Returns `true` when `other` is also the universal set.
    #[must_use]
    pub fn is_subset<S: SetOperand>(&self, other: &S) -> bool {
        other.is_universal()
    }

    /// Returns `true`: the universal set is a superset of every set.
    #[must_use]
    pub fn is_superset<S: SetOperand>(&self, _other: &S) -> bool {
        true
    }

    /// Compares by the subset relation. Total over sets: the universal
    /// set is above every other set and equal only to itself.
    #[must_use]
    pub fn set_cmp<S: SetOperand>(&self, other: &S) -> Ordering {
        if other.is_universal() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl SymbolicSet {
    /// Returns `true` when this singleton equals `other` as a set value.
    #[must_use]
    pub fn set_eq<S: SetOperand>(&self, other: &S) -> bool {
        match self {
            Self::Empty(empty) => empty.set_eq(other),
            Self::Universe(universe) => universe.set_eq(other),
        }
    }

    /// Returns `true` when this singleton is a subset of `other`.
    #[must_use]
    pub fn is_subset<S: SetOperand>(&self, other: &S) -> bool {
        match self {
            Self::Empty(empty) => empty.is_subset(other),
            Self::Universe(universe) => universe.is_subset(other),
        }
    }

    /// Returns `true` when this singleton is a superset of `other`.
    #[must_use]
    pub fn is_superset<S: SetOperand>(&self, other: &S) -> bool {
        match self {
            Self::Empty(empty) => empty.is_superset(other),
            Self::Universe(universe) => universe.is_superset(other),
        }
    }

    /// Compares by the subset relation; total over sets.
    #[must_use]
    pub fn set_cmp<S: SetOperand>(&self, other: &S) -> Ordering {
        match self {
            Self::Empty(empty) => empty.set_cmp(other),
            Self::Universe(universe) => universe.set_cmp(other),
        }
    }
}

// =============================================================================
// Symbolic × symbolic
// =============================================================================

impl PartialEq<UniverseSet> for EmptySet {
    fn eq(&self, _other: &UniverseSet) -> bool {
        false
    }
}

impl PartialEq<EmptySet> for UniverseSet {
    fn eq(&self, _other: &EmptySet) -> bool {
        false
    }
}

impl PartialEq<SymbolicSet> for EmptySet {
    fn eq(&self, other: &SymbolicSet) -> bool {
        other.is_empty()
    }
}

impl PartialEq<EmptySet> for SymbolicSet {
    fn eq(&self, _other: &EmptySet) -> bool {
        self.is_empty()
    }
}

impl PartialEq<SymbolicSet> for UniverseSet {
    fn eq(&self, other: &SymbolicSet) -> bool {
        other.is_universe()
    }
}

impl PartialEq<UniverseSet> for SymbolicSet {
    fn eq(&self, _other: &UniverseSet) -> bool {
        self.is_universe()
    }
}

impl PartialOrd for EmptySet {
    fn partial_cmp(&self, _other: &Self) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

impl PartialOrd for UniverseSet {
    fn partial_cmp(&self, _other: &Self) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

impl PartialOrd<UniverseSet> for EmptySet {
    fn partial_cmp(&self, _other: &UniverseSet) -> Option<Ordering> {
        Some(Ordering::Less)
    }
}

impl PartialOrd<EmptySet> for UniverseSet {
    fn partial_cmp(&self, _other: &EmptySet) -> Option<Ordering> {
        Some(Ordering::Greater)
    }
}

impl PartialOrd<SymbolicSet> for EmptySet {
    fn partial_cmp(&self, other: &SymbolicSet) -> Option<Ordering> {
        Some(self.set_cmp(other))
    }
}

impl PartialOrd<EmptySet> for SymbolicSet {
    fn partial_cmp(&self, other: &EmptySet) -> Option<Ordering> {
        Some(self.set_cmp(other))
    }
}

impl PartialOrd<SymbolicSet> for UniverseSet {
    fn partial_cmp(&self, other: &SymbolicSet) -> Option<Ordering> {
        Some(self.set_cmp(other))
    }
}

impl PartialOrd<UniverseSet> for SymbolicSet {
    fn partial_cmp(&self, other: &UniverseSet) -> Option<Ordering> {
        Some(self.set_cmp(other))
    }
}

impl PartialOrd for SymbolicSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The two-point chain: `Empty < Universe`.
impl Ord for SymbolicSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.set_cmp(other)
    }
}

// =============================================================================
// Symbolic × standard-library sets, both directions
// =============================================================================

/// Stamps the comparison matrix against one finite-set container.
/// No element bounds are needed: only emptiness is consulted.
macro_rules! impl_finite_set_comparisons {
    ($(<$($generic:ident),+> $set:ty),+ $(,)?) => {
        $(
            impl<$($generic),+> PartialEq<$set> for EmptySet {
                fn eq(&self, other: &$set) -> bool {
                    other.is_empty()
                }
            }

            impl<$($generic),+> PartialEq<EmptySet> for $set {
                fn eq(&self, _other: &EmptySet) -> bool {
                    self.is_empty()
                }
            }

            impl<$($generic),+> PartialEq<$set> for UniverseSet {
                fn eq(&self, _other: &$set) -> bool {
                    false
                }
            }

            impl<$($generic),+> PartialEq<UniverseSet> for $set {
                fn eq(&self, _other: &UniverseSet) -> bool {
                    false
                }
            }

            impl<$($generic),+> PartialEq<$set> for SymbolicSet {
                fn eq(&self, other: &$set) -> bool {
                    self.is_empty() && other.is_empty()
                }
            }

            impl<$($generic),+> PartialEq<SymbolicSet> for $set {
                fn eq(&self, other: &SymbolicSet) -> bool {
                    other.is_empty() && self.is_empty()
                }
            }

            impl<$($generic),+> PartialOrd<$set> for EmptySet {
                fn partial_cmp(&self, other: &$set) -> Option<Ordering> {
                    Some(if other.is_empty() {
                        Ordering::Equal
                    } else {
                        Ordering::Less
                    })
                }
            }

            impl<$($generic),+> PartialOrd<EmptySet> for $set {
                fn partial_cmp(&self, _other: &EmptySet) -> Option<Ordering> {
                    Some(if self.is_empty() {
                        Ordering::Equal
                    } else {
                        Ordering::Greater
                    })
                }
            }

            impl<$($generic),+> PartialOrd<$set> for UniverseSet {
                fn partial_cmp(&self, _other: &$set) -> Option<Ordering> {
                    Some(Ordering::Greater)
                }
            }

            impl<$($generic),+> PartialOrd<UniverseSet> for $set {
                fn partial_cmp(&self, _other: &UniverseSet) -> Option<Ordering> {
                    Some(Ordering::Less)
                }
            }

            impl<$($generic),+> PartialOrd<$set> for SymbolicSet {
                fn partial_cmp(&self, other: &$set) -> Option<Ordering> {
                    Some(match self {
                        Self::Empty(_) => {
                            if other.is_empty() {
                                Ordering::Equal
                            } else {
                                Ordering::Less
                            }
                        }
                        Self::Universe(_) => Ordering::Greater,
                    })
                }
            }

            impl<$($generic),+> PartialOrd<SymbolicSet> for $set {
                fn partial_cmp(&self, other: &SymbolicSet) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )+
    };
}

impl_finite_set_comparisons! {
    <T, RS> HashSet<T, RS>,
    <T> BTreeSet<T>,
}
