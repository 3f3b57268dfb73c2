//! User-feedback helpers: stacked toasts, busy buttons, confirmation.
//!
//! Toast elements are built imperatively and animated by the widget bundle;
//! the fixed-position stacking container is created on first use, appended to
//! the document body, and shared by every toast thereafter. Message text is
//! set as text content, never as markup.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use crate::util::widgets;

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Severity of a toast notification, mapped onto the widget bundle's
/// contextual background classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastLevel {
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
const TOAST_CONTAINER_CLASSES: &str = "toast-container position-fixed top-0 end-0 p-3";

#[cfg(any(test, feature = "hydrate"))]
const LOADING_MARKUP: &str = concat!(
    "<span class=\"spinner-border spinner-border-sm me-2\" ",
    "role=\"status\" aria-hidden=\"true\"></span>Loading..."
);

#[cfg(any(test, feature = "hydrate"))]
fn toast_classes(level: ToastLevel) -> String {
    format!("toast align-items-center text-white bg-{} border-0", level.class_suffix())
}

/// Appends a dismissible toast to the shared container (creating the
/// container on first use), plays the show animation, and removes the toast
/// from the DOM once its hide animation completes. Concurrent toasts stack
/// in call order.
#[cfg(feature = "hydrate")]
pub fn show_toast(message: &str, level: ToastLevel) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let container = match document.query_selector(".toast-container").ok().flatten() {
        Some(existing) => existing,
        None => {
            let Ok(created) = document.create_element("div") else {
                return;
            };
            created.set_class_name(TOAST_CONTAINER_CLASSES);
            if body.append_child(&created).is_err() {
                return;
            }
            created
        }
    };

    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(&toast_classes(level));
    let _ = toast.set_attribute("role", "alert");
    let _ = toast.set_attribute("aria-live", "assertive");
    let _ = toast.set_attribute("aria-atomic", "true");

    let Ok(layout) = document.create_element("div") else {
        return;
    };
    layout.set_class_name("d-flex");
    let Ok(text) = document.create_element("div") else {
        return;
    };
    text.set_class_name("toast-body");
    text.set_text_content(Some(message));
    let Ok(dismiss) = document.create_element("button") else {
        return;
    };
    let _ = dismiss.set_attribute("type", "button");
    dismiss.set_class_name("btn-close btn-close-white me-2 m-auto");
    let _ = dismiss.set_attribute("data-bs-dismiss", "toast");

    let _ = layout.append_child(&text);
    let _ = layout.append_child(&dismiss);
    let _ = toast.append_child(&layout);
    let _ = container.append_child(&toast);

    // Self-removal once the hide transition finishes.
    let toast_for_removal = toast.clone();
    let on_hidden = Closure::wrap(Box::new(move || {
        toast_for_removal.remove();
    }) as Box<dyn FnMut()>);
    if toast
        .add_event_listener_with_callback("hidden.bs.toast", on_hidden.as_ref().unchecked_ref())
        .is_ok()
    {
        on_hidden.forget();
    }

    widgets::show_toast_element(&toast);
}

/// Swaps `target`'s content for a spinner-and-label and disables it. The
/// returned closure restores the original content and re-enables the element;
/// the caller invokes it exactly once when the work settles.
#[cfg(feature = "hydrate")]
#[must_use = "dropping the restore closure leaves the element disabled"]
pub fn show_loading(target: &web_sys::Element) -> impl FnOnce() + 'static + use<> {
    let original = target.inner_html();
    target.set_inner_html(LOADING_MARKUP);
    let _ = target.set_attribute("disabled", "disabled");

    let element = target.clone();
    move || {
        element.set_inner_html(&original);
        let _ = element.remove_attribute("disabled");
    }
}

/// Blocks on the browser's native confirm dialog and runs `on_confirm` only
/// when the user accepts.
#[cfg(feature = "hydrate")]
pub fn confirm_action(message: &str, on_confirm: impl FnOnce()) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.confirm_with_message(message).unwrap_or(false) {
        on_confirm();
    }
}
