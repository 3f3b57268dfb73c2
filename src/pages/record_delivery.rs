//! Record-delivery page: the validated entry form with draft persistence.
//!
//! DESIGN
//! ======
//! Field edits keep a draft in browser storage after a short quiet period,
//! so an accidental reload or navigation loses nothing. A successful save
//! appends to the persisted log, clears the draft, confirms with a toast,
//! and returns to the list. Validation itself stays in the markup (required
//! fields, numeric minimums); submit only decides whether to proceed.

use leptos::prelude::*;

use crate::state::delivery::{self, DeliveryDraft};
use crate::util::debounce;
use crate::util::storage;

#[cfg(feature = "hydrate")]
use chrono::Utc;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::state::delivery::DeliveryLog;
#[cfg(feature = "hydrate")]
use crate::util::feedback;
#[cfg(feature = "hydrate")]
use crate::util::wire;

#[cfg(test)]
#[path = "record_delivery_test.rs"]
mod record_delivery_test;

const DRAFT_AUTOSAVE_MS: u32 = 500;
#[cfg(feature = "hydrate")]
const SAVE_SETTLE_MS: u32 = 400;

/// Photo names are only kept when the selection passes the picker policy.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn accepted_photo_name(mime: &str, size_bytes: f64, name: &str) -> Option<String> {
    crate::util::wire::plan_selection(mime, size_bytes)
        .accept
        .then(|| name.to_owned())
}

#[component]
pub fn RecordDeliveryPage() -> impl IntoView {
    let draft = RwSignal::new(DeliveryDraft::default());
    #[cfg(feature = "hydrate")]
    let photo_name = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Restore any half-finished draft, then wire the fresh markup.
    Effect::new(move || {
        if let Some(saved) = storage::load_json::<DeliveryDraft>(delivery::DRAFT_STORAGE_KEY) {
            draft.set(saved);
        }
        #[cfg(feature = "hydrate")]
        {
            super::wire_after_mount();
        }
    });

    let persist_draft = debounce::debounce(DRAFT_AUTOSAVE_MS, |draft: DeliveryDraft| {
        if draft.is_blank() {
            storage::remove(delivery::DRAFT_STORAGE_KEY);
        } else {
            storage::save_json(delivery::DRAFT_STORAGE_KEY, &draft);
        }
    });

    #[cfg(feature = "hydrate")]
    let persist_after_save = persist_draft.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(form) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
            else {
                return;
            };
            if !wire::apply_submit_validation(&form, &ev) {
                return;
            }
            ev.prevent_default();

            let restore = form
                .query_selector("button[type=\"submit\"]")
                .ok()
                .flatten()
                .map(|button| feedback::show_loading(&button));

            let record = draft
                .get_untracked()
                .into_record(photo_name.get_untracked(), Utc::now());
            let mut log = storage::load_json::<DeliveryLog>(delivery::LOG_STORAGE_KEY)
                .unwrap_or_default();
            log.record(record);
            storage::save_json(delivery::LOG_STORAGE_KEY, &log);

            draft.set(DeliveryDraft::default());
            photo_name.set(None);
            // Supersedes any autosave still pending from the last keystroke.
            persist_after_save.call(DeliveryDraft::default());

            let navigate = navigate.clone();
            Timeout::new(SAVE_SETTLE_MS, move || {
                if let Some(restore) = restore {
                    restore();
                }
                feedback::show_toast("Delivery recorded successfully", feedback::ToastLevel::Success);
                navigate("/", NavigateOptions::default());
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &ev;
        }
    };

    view! {
        <div class="row justify-content-center">
            <div class="col-lg-8">
                <div class="card shadow-sm">
                    <div class="card-header d-flex justify-content-between align-items-center">
                        <h1 class="h4 mb-0">"Record delivery"</h1>
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-secondary"
                            data-bs-toggle="popover"
                            data-bs-trigger="focus"
                            data-bs-placement="left"
                            title="Photo tips"
                            data-bs-content="Catch the delivery slip and the material in one frame. Photos never leave this device."
                        >
                            "Photo tips"
                        </button>
                    </div>
                    <div class="card-body">
                        <form class="needs-validation" novalidate=true on:submit=on_submit>
                            <div class="mb-3">
                                <label class="form-label" for="material">
                                    "Material"
                                </label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="material"
                                    required=true
                                    placeholder="Portland cement"
                                    prop:value=move || draft.get().material
                                    on:input={
                                        let persist = persist_draft.clone();
                                        move |ev| {
                                            draft.update(|d| d.material = event_target_value(&ev));
                                            persist.call(draft.get_untracked());
                                        }
                                    }
                                />
                                <div class="invalid-feedback">"Enter the material name."</div>
                            </div>

                            <div class="row">
                                <div class="col-md-6 mb-3">
                                    <label class="form-label" for="quantity">
                                        "Quantity"
                                        <span
                                            class="badge text-bg-light ms-1"
                                            data-bs-toggle="tooltip"
                                            title="Fractions are fine. Count in the unit you enter next."
                                        >
                                            "?"
                                        </span>
                                    </label>
                                    <input
                                        type="number"
                                        class="form-control"
                                        id="quantity"
                                        required=true
                                        min="0.01"
                                        step="any"
                                        prop:value=move || draft.get().quantity
                                        on:input={
                                            let persist = persist_draft.clone();
                                            move |ev| {
                                                draft.update(|d| d.quantity = event_target_value(&ev));
                                                persist.call(draft.get_untracked());
                                            }
                                        }
                                    />
                                    <div class="invalid-feedback">"Enter a quantity above zero."</div>
                                </div>
                                <div class="col-md-6 mb-3">
                                    <label class="form-label" for="unit">
                                        "Unit"
                                    </label>
                                    <input
                                        type="text"
                                        class="form-control"
                                        id="unit"
                                        required=true
                                        placeholder="bags"
                                        prop:value=move || draft.get().unit
                                        on:input={
                                            let persist = persist_draft.clone();
                                            move |ev| {
                                                draft.update(|d| d.unit = event_target_value(&ev));
                                                persist.call(draft.get_untracked());
                                            }
                                        }
                                    />
                                    <div class="invalid-feedback">"Enter the unit of measure."</div>
                                </div>
                            </div>

                            <div class="mb-3">
                                <label class="form-label" for="unit-cost">
                                    "Unit cost"
                                </label>
                                <div class="input-group">
                                    <span class="input-group-text">"$"</span>
                                    <input
                                        type="number"
                                        class="form-control"
                                        id="unit-cost"
                                        required=true
                                        min="0"
                                        step="0.01"
                                        prop:value=move || draft.get().unit_cost
                                        on:input={
                                            let persist = persist_draft.clone();
                                            move |ev| {
                                                draft.update(|d| d.unit_cost = event_target_value(&ev));
                                                persist.call(draft.get_untracked());
                                            }
                                        }
                                    />
                                    <div class="invalid-feedback">"Enter the cost per unit."</div>
                                </div>
                            </div>

                            <div class="mb-3">
                                <label class="form-label" for="notes">
                                    "Notes"
                                </label>
                                <textarea
                                    class="form-control"
                                    id="notes"
                                    rows="3"
                                    placeholder="Optional: supplier, ticket number, where it went"
                                    prop:value=move || draft.get().notes
                                    on:input={
                                        let persist = persist_draft.clone();
                                        move |ev| {
                                            draft.update(|d| d.notes = event_target_value(&ev));
                                            persist.call(draft.get_untracked());
                                        }
                                    }
                                ></textarea>
                            </div>

                            <div class="mb-3">
                                <label class="form-label" for="photo">
                                    "Delivery photo"
                                </label>
                                <input
                                    type="file"
                                    class="form-control"
                                    id="photo"
                                    accept="image/*"
                                    on:change=move |ev| {
                                        #[cfg(feature = "hydrate")]
                                        {
                                            let Some(input) = ev
                                                .target()
                                                .and_then(|t| {
                                                    t.dyn_into::<web_sys::HtmlInputElement>().ok()
                                                })
                                            else {
                                                return;
                                            };
                                            let selected = input
                                                .files()
                                                .and_then(|files| files.get(0))
                                                .and_then(|file| {
                                                    accepted_photo_name(
                                                        &file.type_(),
                                                        file.size(),
                                                        &file.name(),
                                                    )
                                                });
                                            photo_name.set(selected);
                                        }
                                        #[cfg(not(feature = "hydrate"))]
                                        {
                                            let _ = &ev;
                                        }
                                    }
                                />
                                <div class="form-label small text-muted mt-1">"No photo selected"</div>
                            </div>

                            <div class="d-flex gap-2">
                                <button class="btn btn-primary" type="submit">
                                    "Save delivery"
                                </button>
                                <a class="btn btn-outline-secondary" href="/">
                                    "Cancel"
                                </a>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
