use super::*;

#[test]
fn delete_prompt_names_the_material() {
    assert_eq!(
        delete_prompt("Cement"),
        "Delete the Cement delivery? This cannot be undone."
    );
}

#[test]
fn search_waits_a_short_beat_before_filtering() {
    assert_eq!(SEARCH_DEBOUNCE_MS, 300);
}
