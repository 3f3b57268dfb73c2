//! Root application component with routing and the document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::pages::{deliveries::DeliveriesPage, record_delivery::RecordDeliveryPage};

/// HTML shell rendered on the server for SSR + hydration. The widget bundle
/// ships from the CDN and self-initializes; the wiring pass binds against
/// its `bootstrap` global after hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-light">
                <App/>
                <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"></script>
            </body>
        </html>
    }
}

/// Root application component: shared chrome plus client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/sitestock.css"/>
        <Title text="Sitestock"/>

        <Router>
            <SiteHeader/>
            <main class="container pb-5">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DeliveriesPage/>
                    <Route path=StaticSegment("record") view=RecordDeliveryPage/>
                </Routes>
            </main>
        </Router>
    }
}
