//! Bindings to the page's Bootstrap widget bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The document shell loads `bootstrap.bundle.min.js`, which installs the
//! widget constructors on the global `bootstrap` namespace; this module is
//! the only place that talks to them. Binding failures (bundle missing from
//! the page, a constructor throwing on malformed markup) are not caught
//! anywhere in this crate: they surface through the host's global error
//! reporting.

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;
#[cfg(feature = "hydrate")]
use web_sys::Element;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;
    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(target: &Element) -> Tooltip;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;
    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Popover")]
    fn new(target: &Element) -> Popover;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;
    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Alert")]
    fn new(target: &Element) -> Alert;
    #[wasm_bindgen(method)]
    fn close(this: &Alert);

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Toast;
    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Toast")]
    fn new(target: &Element) -> Toast;
    #[wasm_bindgen(method)]
    fn show(this: &Toast);
}

/// Attaches hover tooltip behavior to `target`. Bootstrap tracks the
/// instance on the element itself, so the returned handle is not kept.
#[cfg(feature = "hydrate")]
pub fn bind_tooltip(target: &Element) {
    let _ = Tooltip::new(target);
}

/// Attaches click popover behavior to `target`.
#[cfg(feature = "hydrate")]
pub fn bind_popover(target: &Element) {
    let _ = Popover::new(target);
}

/// Plays the dismiss transition on an alert element and removes it.
#[cfg(feature = "hydrate")]
pub fn close_alert(target: &Element) {
    Alert::new(target).close();
}

/// Plays the show transition on an already-inserted toast element.
#[cfg(feature = "hydrate")]
pub fn show_toast_element(target: &Element) {
    Toast::new(target).show();
}
