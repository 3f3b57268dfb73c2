#![cfg(not(feature = "hydrate"))]

use super::*;

// ===== generation counter =====

#[test]
fn first_generation_is_one() {
    assert_eq!(next_generation(None), 1);
}

#[test]
fn generations_count_up_from_the_stored_stamp() {
    assert_eq!(next_generation(Some("1")), 2);
    assert_eq!(next_generation(Some("41")), 42);
}

#[test]
fn malformed_stamp_restarts_the_counter() {
    assert_eq!(next_generation(Some("soon")), 1);
    assert_eq!(next_generation(Some("")), 1);
}

#[test]
fn counter_wraps_instead_of_overflowing() {
    assert_eq!(next_generation(Some(&u64::MAX.to_string())), 0);
}

// ===== staleness check =====

#[test]
fn matching_stamp_is_current() {
    assert!(is_current(7, Some("7")));
}

#[test]
fn newer_stamp_on_the_input_makes_the_read_stale() {
    assert!(!is_current(7, Some("8")));
}

#[test]
fn missing_or_malformed_stamp_is_never_current() {
    assert!(!is_current(7, None));
    assert!(!is_current(7, Some("sevenish")));
}

// ===== markup constants =====

#[test]
fn holder_and_image_classes_match_the_page_styling() {
    assert_eq!(HOLDER_CLASSES, "image-preview mt-2");
    assert_eq!(IMAGE_CLASSES, "img-fluid rounded shadow-sm");
    assert_eq!(IMAGE_STYLE, "max-height: 200px;");
    assert_eq!(GENERATION_ATTR, "data-preview-generation");
}
