//! Property-based tests for FixedList.
//!
//! These tests verify the size invariant, the identity laws and the
//! get/set and insert/erase relationships over randomly generated lists.

use fixlist::persistent::FixedList;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

const SIZE: usize = 8;

/// Generates a `FixedList<i32, 8>`.
fn fixed_list() -> impl Strategy<Value = FixedList<i32, SIZE>> {
    prop::array::uniform8(any::<i32>()).prop_map(FixedList::<i32, SIZE>::from_items)
}

/// One step of a random update chain.
#[derive(Debug, Clone)]
enum Update {
    Set(usize, i32),
    Insert(usize, i32),
    InsertAll(usize, Vec<i32>),
    Erase(usize),
    EraseRange(usize, usize),
}

fn update() -> impl Strategy<Value = Update> {
    prop_oneof![
        (0..SIZE, any::<i32>()).prop_map(|(position, value)| Update::Set(position, value)),
        (0..=SIZE, any::<i32>()).prop_map(|(position, value)| Update::Insert(position, value)),
        (0..=SIZE, prop::collection::vec(any::<i32>(), 0..12))
            .prop_map(|(position, values)| Update::InsertAll(position, values)),
        (0..SIZE).prop_map(Update::Erase),
        (0..=SIZE, 0..=SIZE).prop_map(|(first, last)| Update::EraseRange(first.min(last), first.max(last))),
    ]
}

fn apply(list: &FixedList<i32, SIZE>, update: &Update) -> FixedList<i32, SIZE> {
    match update {
        Update::Set(position, value) => list.set(*position, *value),
        Update::Insert(position, value) => list.insert(*position, *value),
        Update::InsertAll(position, values) => list.insert_all(*position, values),
        Update::Erase(position) => list.erase(*position),
        Update::EraseRange(first, last) => list.erase_range(*first, *last),
    }
    .expect("generated updates stay within the contract")
}

/// Reference model of `insert_all` on a `Vec`.
fn model_insert_all(list: &FixedList<i32, SIZE>, position: usize, values: &[i32]) -> Vec<i32> {
    let mut model = list.as_slice().to_vec();
    for (offset, value) in values.iter().enumerate() {
        model.insert(position + offset, *value);
    }
    model.truncate(SIZE);
    model
}

/// Reference model of `erase_range_with` on a `Vec`.
fn model_erase_range(list: &FixedList<i32, SIZE>, first: usize, last: usize, fill: i32) -> Vec<i32> {
    let mut model = list.as_slice().to_vec();
    model.drain(first..last);
    model.resize(SIZE, fill);
    model
}

proptest! {
    // =========================================================================
    // Size Invariant
    // =========================================================================

    #[test]
    fn prop_size_never_changes(list in fixed_list(), updates in prop::collection::vec(update(), 0..20)) {
        let result = updates.iter().fold(list, |current, step| apply(&current, step));
        prop_assert_eq!(result.size(), SIZE);
        prop_assert_eq!(result.iter().count(), SIZE);
    }

    #[test]
    fn prop_receiver_is_never_modified(list in fixed_list(), step in update()) {
        let snapshot = list;
        let _ = apply(&list, &step);
        prop_assert_eq!(list, snapshot);
    }

    // =========================================================================
    // Identity Laws
    // =========================================================================

    #[test]
    fn prop_set_to_current_value_is_identity(list in fixed_list(), position in 0..SIZE) {
        let current = *list.get(position).unwrap();
        prop_assert_eq!(list.set(position, current).unwrap(), list);
    }

    #[test]
    fn prop_empty_erase_range_is_identity(list in fixed_list(), first in 0..=SIZE) {
        prop_assert_eq!(list.erase_range(first, first).unwrap(), list);
    }

    #[test]
    fn prop_empty_insert_is_identity(list in fixed_list(), position in 0..=SIZE) {
        prop_assert_eq!(list.insert_all(position, &[]).unwrap(), list);
    }

    #[test]
    fn prop_insert_at_end_is_identity(list in fixed_list(), value: i32) {
        prop_assert_eq!(list.insert(SIZE, value).unwrap(), list);
    }

    // =========================================================================
    // Get/Set Round-Trip
    // =========================================================================

    #[test]
    fn prop_get_after_set_returns_value(list in fixed_list(), position in 0..SIZE, value: i32) {
        let updated = list.set(position, value).unwrap();
        prop_assert_eq!(updated.get(position), Ok(&value));
    }

    #[test]
    fn prop_set_leaves_other_positions(list in fixed_list(), position in 0..SIZE, other in 0..SIZE, value: i32) {
        prop_assume!(position != other);
        let updated = list.set(position, value).unwrap();
        prop_assert_eq!(updated.get(other), list.get(other));
    }

    // =========================================================================
    // Insert/Erase Duality
    // =========================================================================

    #[test]
    fn prop_insert_then_erase_loses_only_last(list in fixed_list(), position in 0..SIZE, value: i32) {
        let round_trip = list.insert(position, value).unwrap().erase(position).unwrap();
        prop_assert_eq!(&round_trip.as_slice()[..SIZE - 1], &list.as_slice()[..SIZE - 1]);
        prop_assert_eq!(round_trip.get(SIZE - 1), Ok(&0));
    }

    #[test]
    fn prop_insert_then_erase_with_last_restores(list in fixed_list(), position in 0..SIZE, value: i32) {
        let last = *list.get(SIZE - 1).unwrap();
        let round_trip = list.insert(position, value).unwrap().erase_with(position, last).unwrap();
        prop_assert_eq!(round_trip, list);
    }

    // =========================================================================
    // Agreement With A Vec Model
    // =========================================================================

    #[test]
    fn prop_insert_all_matches_model(
        list in fixed_list(),
        position in 0..=SIZE,
        values in prop::collection::vec(any::<i32>(), 0..12),
    ) {
        let result = list.insert_all(position, &values).unwrap();
        let model = model_insert_all(&list, position, &values);
        prop_assert_eq!(result.as_slice(), model.as_slice());
    }

    #[test]
    fn prop_erase_range_matches_model(list in fixed_list(), bounds in (0..=SIZE, 0..=SIZE), fill: i32) {
        let (first, last) = (bounds.0.min(bounds.1), bounds.0.max(bounds.1));
        let result = list.erase_range_with(first, last, fill).unwrap();
        let model = model_erase_range(&list, first, last, fill);
        prop_assert_eq!(result.as_slice(), model.as_slice());
    }

    // =========================================================================
    // Contract Violations
    // =========================================================================

    #[test]
    fn prop_positions_past_end_fail(list in fixed_list(), excess in 0usize..100, value: i32) {
        let position = SIZE + excess;
        prop_assert!(list.get(position).unwrap_err().is_out_of_range());
        prop_assert!(list.set(position, value).unwrap_err().is_out_of_range());
        prop_assert!(list.erase(position).unwrap_err().is_out_of_range());
        prop_assert!(list.erase_range(0, position + 1).unwrap_err().is_out_of_range());
        prop_assert!(list.insert(position + 1, value).unwrap_err().is_out_of_range());
    }

    #[test]
    fn prop_reversed_range_fails(list in fixed_list(), first in 1..=SIZE) {
        prop_assert!(list.erase_range(first, first - 1).unwrap_err().is_invalid_range());
    }
}
