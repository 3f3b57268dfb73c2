//! Top navigation bar shared by every page.

use leptos::prelude::*;

/// Navbar with the brand and page links. Links are plain anchors; the router
/// intercepts same-origin clicks for client-side navigation.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-primary mb-4">
            <div class="container">
                <a class="navbar-brand" href="/">
                    "Sitestock"
                </a>
                <ul class="navbar-nav ms-auto flex-row gap-3">
                    <li class="nav-item">
                        <a class="nav-link" href="/">
                            "Deliveries"
                        </a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/record">
                            "Record delivery"
                        </a>
                    </li>
                </ul>
                <span class="navbar-text ms-3">
                    <span
                        class="badge text-bg-light"
                        data-bs-toggle="tooltip"
                        data-bs-placement="bottom"
                        title="Records stay in this browser. Nothing is uploaded."
                    >
                        "?"
                    </span>
                </span>
            </div>
        </nav>
    }
}
