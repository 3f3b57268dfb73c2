//! Document wiring: the progressive-enhancement pass that upgrades
//! server-rendered markup after hydration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render plain annotated markup; this module walks the document and
//! attaches the behavior those annotations ask for. Every registration
//! stamps its element with a marker attribute first, so the pass is
//! idempotent and each page can re-run it after client-side navigation swaps
//! the content under it. Elements already stamped are skipped, elements new
//! to the document are picked up.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[cfg(feature = "hydrate")]
use crate::util::{preview, widgets};

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

/// Largest file a picker will accept, in bytes.
pub const MAX_UPLOAD_BYTES: u32 = 16 * 1024 * 1024;

/// Shown when a selected file exceeds [`MAX_UPLOAD_BYTES`].
pub const OVERSIZE_MESSAGE: &str = "File size is too large. Maximum size is 16MB.";

#[cfg(any(test, feature = "hydrate"))]
const ALERT_SWEEP_DELAY_MS: u32 = 5000;

#[cfg(any(test, feature = "hydrate"))]
const TOOLTIP_WIRED_ATTR: &str = "data-wired-tooltip";
#[cfg(any(test, feature = "hydrate"))]
const POPOVER_WIRED_ATTR: &str = "data-wired-popover";
#[cfg(any(test, feature = "hydrate"))]
const SUBMIT_WIRED_ATTR: &str = "data-wired-validation";
#[cfg(any(test, feature = "hydrate"))]
const FILE_WIRED_ATTR: &str = "data-wired-file";
#[cfg(any(test, feature = "hydrate"))]
const ALERT_SWEEP_ATTR: &str = "data-alert-sweep";

/// Every form in the document gets the submit interceptor, whatever its
/// classes.
#[cfg(any(test, feature = "hydrate"))]
const FORM_SELECTOR: &str = "form";

/// What a file selection should do, decided before any side effect runs.
///
/// The preview decision is independent of acceptance: an oversized image
/// still starts its preview, then gets rejected, which mirrors how the
/// change handler is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPlan {
    pub start_preview: bool,
    pub accept: bool,
}

#[must_use]
pub fn plan_selection(mime: &str, size_bytes: f64) -> SelectionPlan {
    SelectionPlan {
        start_preview: mime.starts_with("image/"),
        accept: size_bytes <= f64::from(MAX_UPLOAD_BYTES),
    }
}

/// Runs the full enhancement pass over the current document: tooltip and
/// popover bindings, the dismissible-alert sweep, submit validation on
/// every form, and change handling on file pickers. Call it after every
/// mount; repeated calls only touch elements not yet wired.
#[cfg(feature = "hydrate")]
pub fn wire_document() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    for element in select_all(&document, "[data-bs-toggle=\"tooltip\"]") {
        if mark_once(&element, TOOLTIP_WIRED_ATTR) {
            widgets::bind_tooltip(&element);
        }
    }

    for element in select_all(&document, "[data-bs-toggle=\"popover\"]") {
        if mark_once(&element, POPOVER_WIRED_ATTR) {
            widgets::bind_popover(&element);
        }
    }

    schedule_alert_sweep(&document);

    for element in select_all(&document, FORM_SELECTOR) {
        let Ok(form) = element.dyn_into::<web_sys::HtmlFormElement>() else {
            continue;
        };
        wire_form(&form);
    }

    for element in select_all(&document, "input[type=\"file\"]") {
        let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() else {
            continue;
        };
        wire_file_input(&input);
    }
}

/// Registers the shared submit-validation handler on `form`. Safe to call
/// repeatedly; calls after the first are no-ops.
#[cfg(feature = "hydrate")]
pub fn wire_form(form: &web_sys::HtmlFormElement) {
    if !mark_once(form, SUBMIT_WIRED_ATTR) {
        return;
    }

    let form_for_submit = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let _ = apply_submit_validation(&form_for_submit, &event);
    }) as Box<dyn FnMut(web_sys::Event)>);
    if form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .is_ok()
    {
        on_submit.forget();
    }
}

/// Applies the submit policy: an invalid form swallows the event, and either
/// way the form is flagged so field-level feedback becomes visible. Returns
/// whether the form passed validation.
#[cfg(feature = "hydrate")]
pub fn apply_submit_validation(form: &web_sys::HtmlFormElement, event: &web_sys::Event) -> bool {
    let valid = form.check_validity();
    if !valid {
        event.prevent_default();
        event.stop_propagation();
    }
    let _ = form.class_list().add_1("was-validated");
    valid
}

/// Registers the change handler on a file picker. Safe to call repeatedly;
/// calls after the first are no-ops.
#[cfg(feature = "hydrate")]
pub fn wire_file_input(input: &web_sys::HtmlInputElement) {
    if !mark_once(input, FILE_WIRED_ATTR) {
        return;
    }

    let input_for_change = input.clone();
    let on_change = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        handle_file_selection(&input_for_change);
    }) as Box<dyn FnMut(web_sys::Event)>);
    if input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .is_ok()
    {
        on_change.forget();
    }
}

/// Change-handler body for file pickers: previews images, rejects files over
/// the upload cap, and mirrors the accepted file's name into the adjacent
/// caption label.
#[cfg(feature = "hydrate")]
pub fn handle_file_selection(input: &web_sys::HtmlInputElement) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };

    let plan = plan_selection(&file.type_(), file.size());
    if plan.start_preview {
        preview::start_preview(input, &file);
    }
    if !plan.accept {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(OVERSIZE_MESSAGE);
        }
        input.set_value("");
        return;
    }

    let Some(label) = input.next_element_sibling() else {
        return;
    };
    if label.class_list().contains("form-label") {
        label.set_text_content(Some(&file.name()));
    }
}

/// Arms the one-shot sweep that closes every dismissible alert still in the
/// document after the delay. Only one sweep is pending at a time; once it
/// fires, the next wiring pass can arm a fresh one.
#[cfg(feature = "hydrate")]
fn schedule_alert_sweep(document: &web_sys::Document) {
    let Some(body) = document.body() else {
        return;
    };
    if body.get_attribute(ALERT_SWEEP_ATTR).is_some() {
        return;
    }
    let _ = body.set_attribute(ALERT_SWEEP_ATTR, "pending");

    let document = document.clone();
    Timeout::new(ALERT_SWEEP_DELAY_MS, move || {
        // Query at fire time: alerts dismissed or replaced during the wait
        // are not our business.
        for element in select_all(&document, ".alert-dismissible") {
            widgets::close_alert(&element);
        }
        if let Some(body) = document.body() {
            let _ = body.remove_attribute(ALERT_SWEEP_ATTR);
        }
    })
    .forget();
}

#[cfg(feature = "hydrate")]
fn select_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

#[cfg(feature = "hydrate")]
fn mark_once(element: &web_sys::Element, attr: &str) -> bool {
    if element.get_attribute(attr).is_some() {
        return false;
    }
    let _ = element.set_attribute(attr, "true");
    true
}
