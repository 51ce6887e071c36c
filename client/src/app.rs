//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_toast::NoticeToast;
use crate::net::api::{API_BASE_META_NAME, ApiConfig};
use crate::pages::{home::HomePage, manuscripts::ManuscriptsPage, payments::PaymentsPage};
use crate::state::notice::NoticeState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host provides an [`ApiConfig`] context; its base URL is written into
/// the head so the hydrated app talks to the same API.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_base = use_context::<ApiConfig>().unwrap_or_default().base_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the notice and API config contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    let notices = RwSignal::new(NoticeState::default());

    provide_context(config);
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/press-dashboard.css"/>
        <Title text="Press Dashboard"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("transactions")) view=PaymentsPage/>
                    <Route path=(StaticSegment("author"), StaticSegment("manuscripts")) view=ManuscriptsPage/>
                </Routes>
            </main>
        </Router>
        <NoticeToast/>
    }
}
