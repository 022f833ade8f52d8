//! Unit tests for the symbolic singleton sets.
//!
//! These tests cover the unary surface of `EMPTY` and `UNIVERSE`:
//! display, membership, length, iteration, boolean coercion, hashing,
//! cardinality, and the complement relationship.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, RandomState};

use rstest::rstest;
use symset::prelude::*;

// =============================================================================
// Rendering
// =============================================================================

#[rstest]
fn test_empty_display_is_the_empty_set_glyph() {
    assert_eq!(format!("{EMPTY}"), "∅");
    assert_eq!(format!("{}", SymbolicSet::EMPTY), "∅");
}

#[rstest]
fn test_universe_display_is_u() {
    assert_eq!(format!("{UNIVERSE}"), "U");
    assert_eq!(format!("{}", SymbolicSet::UNIVERSE), "U");
}

#[rstest]
fn test_debug_forms_are_unambiguous_identifiers() {
    assert_eq!(format!("{EMPTY:?}"), "Empty");
    assert_eq!(format!("{UNIVERSE:?}"), "Universe");
    assert_eq!(format!("{:?}", SymbolicSet::EMPTY), "Empty");
    assert_eq!(format!("{:?}", SymbolicSet::UNIVERSE), "Universe");
}

// =============================================================================
// Membership
// =============================================================================

#[rstest]
fn test_empty_contains_nothing() {
    assert!(!EMPTY.contains(&42));
    assert!(!EMPTY.contains("anything"));
    assert!(!EMPTY.contains(&f64::NAN));
    assert!(!EMPTY.contains(&()));
    assert!(!EMPTY.contains(&UNIVERSE));
    assert!(!EMPTY.contains(&EMPTY));
}

#[rstest]
fn test_universe_contains_everything() {
    assert!(UNIVERSE.contains(&42));
    assert!(UNIVERSE.contains("anything"));
    assert!(UNIVERSE.contains(&f64::NAN));
    assert!(UNIVERSE.contains(&()));
    assert!(UNIVERSE.contains(&EMPTY));
    assert!(UNIVERSE.contains(&UNIVERSE));
}

#[rstest]
fn test_symbolic_membership_follows_the_variant() {
    assert!(!SymbolicSet::EMPTY.contains(&1));
    assert!(SymbolicSet::UNIVERSE.contains(&1));
}

// =============================================================================
// Boolean coercion analogue
// =============================================================================

#[rstest]
fn test_empty_is_falsy_universe_is_truthy() {
    assert!(!EMPTY.is_inhabited());
    assert!(UNIVERSE.is_inhabited());
    assert!(!SymbolicSet::EMPTY.is_inhabited());
    assert!(SymbolicSet::UNIVERSE.is_inhabited());
}

// =============================================================================
// Length and iteration
// =============================================================================

#[rstest]
fn test_empty_has_length_zero() {
    assert_eq!(EMPTY.len(), 0);
    assert!(EMPTY.is_empty());
    assert_eq!(SymbolicSet::EMPTY.try_len(), Ok(0));
}

#[rstest]
fn test_empty_iteration_yields_nothing_and_restarts() {
    assert_eq!(EMPTY.iter::<i32>().count(), 0);
    assert_eq!(EMPTY.iter::<String>().count(), 0);
    // A fresh iterator restarts the (empty) sequence.
    assert_eq!(EMPTY.iter::<i32>().next(), None);
    assert_eq!(EMPTY.into_iter().count(), 0);
}

#[rstest]
fn test_universe_length_is_an_error() {
    let error = UNIVERSE.try_len().unwrap_err();
    assert_eq!(error.operation, "len");
    assert_eq!(SymbolicSet::UNIVERSE.try_len(), Err(error));
}

#[rstest]
fn test_universe_iteration_is_an_error() {
    let error = UNIVERSE.try_iter::<i32>().unwrap_err();
    assert_eq!(error.operation, "iter");
    assert!(SymbolicSet::UNIVERSE.try_iter::<i32>().is_err());
    assert_eq!(
        format!("{error}"),
        "Universe::iter: infinite set has no finite representation"
    );
}

#[rstest]
fn test_symbolic_empty_iteration_succeeds() {
    let iterator = SymbolicSet::EMPTY.try_iter::<u8>().unwrap();
    assert_eq!(iterator.count(), 0);
}

// =============================================================================
// Cardinality
// =============================================================================

#[rstest]
fn test_cardinalities() {
    assert_eq!(EMPTY.cardinality(), Cardinality::Finite(0));
    assert_eq!(UNIVERSE.cardinality(), Cardinality::Unbounded);
    assert_eq!(SymbolicSet::EMPTY.cardinality(), Cardinality::Finite(0));
    assert_eq!(SymbolicSet::UNIVERSE.cardinality(), Cardinality::Unbounded);
}

#[rstest]
fn test_operand_classification() {
    assert!(EMPTY.is_empty_set());
    assert!(!EMPTY.is_universal());
    assert!(!UNIVERSE.is_empty_set());
    assert!(UNIVERSE.is_universal());
}

// =============================================================================
// Hashing
// =============================================================================

#[rstest]
fn test_empty_hashes_like_an_empty_finite_set() {
    let no_numbers: HashSet<i64> = HashSet::new();
    let no_words: BTreeSet<String> = BTreeSet::new();

    assert_eq!(EMPTY.set_hash(), set_hash(&no_numbers));
    assert_eq!(EMPTY.set_hash(), set_hash(&no_words));
    assert_eq!(EMPTY.set_hash(), EMPTY_SET_HASH);
}

#[rstest]
fn test_universe_hashes_to_the_bitwise_complement() {
    assert_eq!(UNIVERSE.set_hash(), !EMPTY.set_hash());
    assert_ne!(UNIVERSE.set_hash(), EMPTY.set_hash());
}

#[rstest]
fn test_hash_impl_agrees_with_set_hash() {
    let state = RandomState::new();
    assert_eq!(state.hash_one(EMPTY), state.hash_one(SymbolicSet::EMPTY));
    assert_eq!(state.hash_one(UNIVERSE), state.hash_one(SymbolicSet::UNIVERSE));
    assert_ne!(state.hash_one(EMPTY), state.hash_one(UNIVERSE));
}

#[rstest]
fn test_singletons_work_as_hash_table_keys() {
    let mut table = HashSet::new();
    table.insert(EMPTY);
    table.insert(EMPTY);
    assert_eq!(table.len(), 1);

    let mut symbolic_table = HashSet::new();
    symbolic_table.insert(SymbolicSet::EMPTY);
    symbolic_table.insert(SymbolicSet::UNIVERSE);
    symbolic_table.insert(SymbolicSet::EMPTY.complement());
    assert_eq!(symbolic_table.len(), 2);
}

// =============================================================================
// Complement
// =============================================================================

#[rstest]
fn test_complement_returns_the_other_singleton() {
    assert_eq!(EMPTY.complement(), UNIVERSE);
    assert_eq!(UNIVERSE.complement(), EMPTY);
    assert_eq!(SymbolicSet::EMPTY.complement(), SymbolicSet::UNIVERSE);
    assert_eq!(SymbolicSet::UNIVERSE.complement(), SymbolicSet::EMPTY);
}

#[rstest]
#[case(SymbolicSet::EMPTY)]
#[case(SymbolicSet::UNIVERSE)]
fn test_complement_is_an_involution(#[case] singleton: SymbolicSet) {
    assert_ne!(singleton.complement(), singleton);
    assert_eq!(singleton.complement().complement(), singleton);
}

#[rstest]
fn test_not_operator_spells_complement() {
    assert_eq!(!EMPTY, UNIVERSE);
    assert_eq!(!UNIVERSE, EMPTY);
    assert_eq!(!SymbolicSet::EMPTY, SymbolicSet::UNIVERSE);
    assert_eq!(!!SymbolicSet::UNIVERSE, SymbolicSet::UNIVERSE);
}

// =============================================================================
// Constants and conversions
// =============================================================================

#[rstest]
fn test_nothing_is_an_alias_for_empty() {
    assert_eq!(NOTHING, EMPTY);
    assert_eq!(format!("{NOTHING}"), "∅");
}

#[rstest]
fn test_from_conversions_preserve_the_variant() {
    assert_eq!(SymbolicSet::from(EMPTY), SymbolicSet::EMPTY);
    assert_eq!(SymbolicSet::from(UNIVERSE), SymbolicSet::UNIVERSE);
    assert!(SymbolicSet::from(EMPTY).is_empty());
    assert!(SymbolicSet::from(UNIVERSE).is_universe());
}
