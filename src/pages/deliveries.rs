//! Deliveries page: the searchable log of recorded deliveries.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::delivery_table::DeliveryTable;
use crate::state::delivery::{self, DeliveryLog};
use crate::util::debounce;
use crate::util::storage;

#[cfg(feature = "hydrate")]
use crate::util::feedback;

#[cfg(test)]
#[path = "deliveries_test.rs"]
mod deliveries_test;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Confirmation prompt for deleting one delivery.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn delete_prompt(material: &str) -> String {
    format!("Delete the {material} delivery? This cannot be undone.")
}

/// Deliveries page: loads the persisted log on mount, filters it with a
/// debounced search box, and deletes rows after confirmation.
#[component]
pub fn DeliveriesPage() -> impl IntoView {
    let log = RwSignal::new(DeliveryLog::default());
    let query = RwSignal::new(String::new());

    // Storage is only reachable after hydration, so the server renders the
    // empty state and the mount effect fills it in.
    Effect::new(move || {
        if let Some(saved) = storage::load_json::<DeliveryLog>(delivery::LOG_STORAGE_KEY) {
            log.set(saved);
        }
        #[cfg(feature = "hydrate")]
        {
            super::wire_after_mount();
        }
    });

    let apply_search = debounce::debounce(SEARCH_DEBOUNCE_MS, move |value: String| {
        query.set(value);
    });

    let on_delete = Callback::new(move |id: Uuid| {
        #[cfg(feature = "hydrate")]
        {
            let Some(material) = log
                .get_untracked()
                .entries
                .iter()
                .find(|record| record.id == id)
                .map(|record| record.material.clone())
            else {
                return;
            };
            feedback::confirm_action(&delete_prompt(&material), move || {
                let mut removed = false;
                log.update(|current| removed = current.remove(id));
                if removed {
                    storage::save_json(delivery::LOG_STORAGE_KEY, &log.get_untracked());
                    feedback::show_toast("Delivery deleted", feedback::ToastLevel::Success);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="d-flex justify-content-between align-items-center mb-3">
            <h1 class="h3 mb-0">"Deliveries"</h1>
            <a class="btn btn-primary" href="/record">
                "Record delivery"
            </a>
        </div>

        <div class="alert alert-info alert-dismissible fade show" role="alert">
            "Deliveries are stored in this browser. Deleting a record cannot be undone."
            <button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>
        </div>

        <div class="mb-3">
            <input
                type="search"
                class="form-control"
                placeholder="Search material, unit, or notes"
                aria-label="Search deliveries"
                on:input=move |ev| {
                    apply_search.call(event_target_value(&ev));
                }
            />
        </div>

        <DeliveryTable log=log query=query on_delete=on_delete/>
    }
}
