#![cfg(feature = "serde")]

//! Integration tests for serde support in fixlist.
//!
//! A `FixedList<T, N>` serializes as a plain sequence and only deserializes
//! from a sequence of exactly `N` elements.

use fixlist::persistent::FixedList;
use rstest::rstest;

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
fn test_list_json_roundtrip() {
    let list = FixedList::from([1, 5, 6, 3, 4]);
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,5,6,3,4]");
    let restored: FixedList<i32, 5> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_empty_list_json_roundtrip() {
    let empty = FixedList::<u8, 0>::new();
    let json = serde_json::to_string(&empty).unwrap();
    assert_eq!(json, "[]");
    let restored: FixedList<u8, 0> = serde_json::from_str(&json).unwrap();
    assert_eq!(empty, restored);
}

#[rstest]
fn test_list_nested_structures() {
    let outer = FixedList::from([FixedList::from([1, 2]), FixedList::from([3, 4])]);
    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[1,2],[3,4]]");
    let restored: FixedList<FixedList<i32, 2>, 2> = serde_json::from_str(&json).unwrap();
    assert_eq!(outer, restored);
}

#[rstest]
fn test_list_of_strings_roundtrip() {
    let list = FixedList::from(["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&list).unwrap();
    let restored: FixedList<String, 2> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

// =============================================================================
// Length Mismatches
// =============================================================================

#[rstest]
#[case("[1,2]")]
#[case("[1,2,3,4]")]
#[case("[]")]
fn test_wrong_length_is_rejected(#[case] json: &str) {
    let result: Result<FixedList<i32, 3>, _> = serde_json::from_str(json);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("exactly 3 elements"), "unexpected message: {message}");
}

#[rstest]
fn test_non_sequence_is_rejected() {
    let result: Result<FixedList<i32, 1>, _> = serde_json::from_str("{\"value\":1}");
    assert!(result.is_err());
}
