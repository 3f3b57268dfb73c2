//! Delivery list table with search-aware rows and per-row delete.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::delivery::{DeliveryLog, DeliveryRecord};
use crate::util::format;

/// Striped table over the filtered delivery log. Deletion is delegated to
/// the owner through `on_delete` so confirmation and persistence stay in one
/// place. The footer always totals the full log, not the filtered view.
#[component]
pub fn DeliveryTable(
    log: RwSignal<DeliveryLog>,
    query: RwSignal<String>,
    on_delete: Callback<Uuid>,
) -> impl IntoView {
    let rows = move || -> Vec<DeliveryRecord> {
        log.get()
            .filtered(&query.get())
            .into_iter()
            .cloned()
            .collect()
    };

    let count_label = move || {
        let count = log.get().len();
        if count == 1 {
            "1 delivery".to_owned()
        } else {
            format!("{count} deliveries")
        }
    };

    view! {
        <div class="table-responsive">
            <table class="table table-striped table-hover align-middle">
                <thead>
                    <tr>
                        <th scope="col">"Material"</th>
                        <th scope="col" class="text-end">"Quantity"</th>
                        <th scope="col" class="text-end">"Unit cost"</th>
                        <th scope="col" class="text-end">
                            "Line total "
                            <span
                                class="badge text-bg-light"
                                data-bs-toggle="tooltip"
                                title="Quantity times unit cost."
                            >
                                "?"
                            </span>
                        </th>
                        <th scope="col">"Recorded"</th>
                        <th scope="col"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="6" class="text-center text-muted py-4">
                                        "No deliveries match."
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|record| {
                                    view! { <DeliveryRow record=record on_delete=on_delete/> }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="3" class="text-end text-muted">{count_label}</td>
                        <td class="text-end fw-semibold">
                            {move || format::format_usd(log.get().total_value())}
                        </td>
                        <td colspan="2"></td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}

#[component]
fn DeliveryRow(record: DeliveryRecord, on_delete: Callback<Uuid>) -> impl IntoView {
    let id = record.id;
    let quantity = format!("{} {}", format::format_number(record.quantity, 1), record.unit);
    let unit_cost = format::format_usd(record.unit_cost);
    let line_total = format::format_usd(record.line_total());
    let recorded = format::format_date(record.recorded_at, format::DateFormatOptions::default());

    view! {
        <tr>
            <td>
                <div class="fw-semibold">{record.material}</div>
                {record
                    .notes
                    .map(|notes| view! { <div class="small text-muted">{notes}</div> })}
                {record
                    .photo_name
                    .map(|name| view! { <span class="badge bg-secondary">{name}</span> })}
            </td>
            <td class="text-end">{quantity}</td>
            <td class="text-end">{unit_cost}</td>
            <td class="text-end">{line_total}</td>
            <td>{recorded}</td>
            <td class="text-end">
                <button
                    class="btn btn-sm btn-outline-danger"
                    title="Delete delivery"
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
