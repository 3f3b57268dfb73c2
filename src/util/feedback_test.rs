#![cfg(not(feature = "hydrate"))]

use super::*;

// ===== toast levels =====

#[test]
fn default_level_is_info() {
    assert_eq!(ToastLevel::default(), ToastLevel::Info);
}

#[test]
fn class_suffix_matches_contextual_names() {
    assert_eq!(ToastLevel::Info.class_suffix(), "info");
    assert_eq!(ToastLevel::Success.class_suffix(), "success");
    assert_eq!(ToastLevel::Warning.class_suffix(), "warning");
    assert_eq!(ToastLevel::Danger.class_suffix(), "danger");
}

// ===== markup fragments =====

#[test]
fn toast_classes_carry_the_severity_background() {
    assert_eq!(
        toast_classes(ToastLevel::Success),
        "toast align-items-center text-white bg-success border-0"
    );
    assert_eq!(
        toast_classes(ToastLevel::Danger),
        "toast align-items-center text-white bg-danger border-0"
    );
}

#[test]
fn container_classes_pin_it_to_the_top_right() {
    assert_eq!(
        TOAST_CONTAINER_CLASSES,
        "toast-container position-fixed top-0 end-0 p-3"
    );
}

#[test]
fn loading_markup_is_a_spinner_with_label() {
    assert!(LOADING_MARKUP.contains("spinner-border"));
    assert!(LOADING_MARKUP.ends_with("Loading..."));
    assert!(LOADING_MARKUP.contains("aria-hidden=\"true\""));
}
