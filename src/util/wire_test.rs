#![cfg(not(feature = "hydrate"))]

use super::*;

// ===== selection planning =====

#[test]
fn small_image_previews_and_is_accepted() {
    let plan = plan_selection("image/png", 320.0 * 1024.0);
    assert!(plan.start_preview);
    assert!(plan.accept);
}

#[test]
fn non_image_is_accepted_without_a_preview() {
    let plan = plan_selection("application/pdf", 1024.0);
    assert!(!plan.start_preview);
    assert!(plan.accept);
}

#[test]
fn file_exactly_at_the_cap_is_accepted() {
    let plan = plan_selection("image/jpeg", f64::from(MAX_UPLOAD_BYTES));
    assert!(plan.accept);
}

#[test]
fn file_one_byte_over_the_cap_is_rejected() {
    let plan = plan_selection("image/jpeg", f64::from(MAX_UPLOAD_BYTES) + 1.0);
    assert!(!plan.accept);
}

#[test]
fn oversized_image_still_starts_its_preview() {
    let plan = plan_selection("image/gif", f64::from(MAX_UPLOAD_BYTES) * 2.0);
    assert!(plan.start_preview);
    assert!(!plan.accept);
}

#[test]
fn empty_file_is_accepted() {
    let plan = plan_selection("text/plain", 0.0);
    assert!(!plan.start_preview);
    assert!(plan.accept);
}

// ===== policy constants =====

#[test]
fn upload_cap_is_sixteen_mebibytes() {
    assert_eq!(MAX_UPLOAD_BYTES, 16_777_216);
}

#[test]
fn oversize_message_names_the_limit() {
    assert_eq!(OVERSIZE_MESSAGE, "File size is too large. Maximum size is 16MB.");
}

#[test]
fn sweep_fires_after_five_seconds() {
    assert_eq!(ALERT_SWEEP_DELAY_MS, 5000);
}

// ===== wiring markers =====

#[test]
fn submit_wiring_selects_every_form() {
    // No class or attribute filter: a form that never opted in through
    // markup still gets the interceptor.
    assert_eq!(FORM_SELECTOR, "form");
}

#[test]
fn marker_attributes_are_distinct() {
    let markers = [
        TOOLTIP_WIRED_ATTR,
        POPOVER_WIRED_ATTR,
        SUBMIT_WIRED_ATTR,
        FILE_WIRED_ATTR,
        ALERT_SWEEP_ATTR,
    ];
    for (i, a) in markers.iter().enumerate() {
        for b in &markers[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
