//! Inline image preview for file pickers.
//!
//! DESIGN
//! ======
//! File reads resolve asynchronously, so two picks in quick succession can
//! complete out of order. Each read is stamped with the input's generation
//! counter at start; a completion whose stamp no longer matches the input's
//! current counter is stale and is dropped instead of applied. The counter
//! lives in a data attribute on the input itself, which keeps the guard
//! per-element without any registry.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

#[cfg(any(test, feature = "hydrate"))]
const GENERATION_ATTR: &str = "data-preview-generation";

#[cfg(any(test, feature = "hydrate"))]
const HOLDER_CLASSES: &str = "image-preview mt-2";

#[cfg(any(test, feature = "hydrate"))]
const IMAGE_CLASSES: &str = "img-fluid rounded shadow-sm";

#[cfg(any(test, feature = "hydrate"))]
const IMAGE_STYLE: &str = "max-height: 200px;";

#[cfg(any(test, feature = "hydrate"))]
fn next_generation(current: Option<&str>) -> u64 {
    current
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(0)
        .wrapping_add(1)
}

#[cfg(any(test, feature = "hydrate"))]
fn is_current(stamp: u64, attr: Option<&str>) -> bool {
    attr.and_then(|raw| raw.parse::<u64>().ok()) == Some(stamp)
}

/// Begins reading `file` as a data URL and, when the read completes and is
/// still the input's newest, renders it into a holder `<div>` next to the
/// input (created on first use, reused afterwards).
#[cfg(feature = "hydrate")]
pub fn start_preview(input: &web_sys::HtmlInputElement, file: &web_sys::File) {
    let stamp = bump_generation(input);

    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };

    let input = input.clone();
    let reader_for_load = reader.clone();
    let on_load = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if !is_current(stamp, input.get_attribute(GENERATION_ATTR).as_deref()) {
            return;
        }
        let Some(data_url) = reader_for_load.result().ok().and_then(|value| value.as_string())
        else {
            return;
        };
        apply_preview(&input, &data_url);
    }) as Box<dyn FnMut(web_sys::Event)>);
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    if reader.read_as_data_url(file).is_err() {
        leptos::logging::warn!("image preview read failed to start");
    }
}

#[cfg(feature = "hydrate")]
fn bump_generation(input: &web_sys::HtmlInputElement) -> u64 {
    let next = next_generation(input.get_attribute(GENERATION_ATTR).as_deref());
    let _ = input.set_attribute(GENERATION_ATTR, &next.to_string());
    next
}

#[cfg(feature = "hydrate")]
fn apply_preview(input: &web_sys::HtmlInputElement, data_url: &str) {
    let Some(parent) = input.parent_element() else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let holder = match parent.query_selector(".image-preview").ok().flatten() {
        Some(existing) => existing,
        None => {
            let Ok(created) = document.create_element("div") else {
                return;
            };
            created.set_class_name(HOLDER_CLASSES);
            if parent.append_child(&created).is_err() {
                return;
            }
            created
        }
    };

    let Ok(image) = document.create_element("img") else {
        return;
    };
    let _ = image.set_attribute("src", data_url);
    image.set_class_name(IMAGE_CLASSES);
    let _ = image.set_attribute("style", IMAGE_STYLE);
    let _ = image.set_attribute("alt", "Preview");

    holder.set_inner_html("");
    let _ = holder.append_child(&image);
}
