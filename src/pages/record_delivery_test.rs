use super::*;

use crate::util::wire::MAX_UPLOAD_BYTES;

#[test]
fn accepted_photo_keeps_its_name() {
    assert_eq!(
        accepted_photo_name("image/jpeg", 1024.0, "slip.jpg").as_deref(),
        Some("slip.jpg")
    );
}

#[test]
fn oversized_photo_loses_its_name() {
    assert_eq!(
        accepted_photo_name("image/jpeg", f64::from(MAX_UPLOAD_BYTES) + 1.0, "huge.jpg"),
        None
    );
}

#[test]
fn non_image_attachments_keep_their_name_when_small_enough() {
    assert_eq!(
        accepted_photo_name("application/pdf", 2048.0, "ticket.pdf").as_deref(),
        Some("ticket.pdf")
    );
}

#[test]
fn draft_autosave_waits_half_a_second() {
    assert_eq!(DRAFT_AUTOSAVE_MS, 500);
}
