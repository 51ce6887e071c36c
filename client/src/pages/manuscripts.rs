//! Author manuscripts page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the author's manuscript table (or the first-use section), swaps in
//! the expanded card when a row is opened, and reloads the whole page after a
//! successful revision upload so list and card reflect the new status.

use leptos::prelude::*;

use crate::actions::manuscripts::{
    UPLOADING_TITLE, UploadOutcome, load_manuscript_detail, load_manuscript_view, submit_revision,
};
use crate::components::first_use::FirstUseSection;
use crate::components::manuscript_detail::ManuscriptDetail;
use crate::components::manuscript_table::ManuscriptTable;
use crate::net::api::{ApiConfig, HttpApi, UploadFile};
use crate::state::manuscripts::{LOAD_FAILED_MESSAGE, LOADING_MESSAGE, ManuscriptListView, ManuscriptsState};
use crate::state::notice::{Notice, NoticeState};

#[component]
pub fn ManuscriptsPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(ManuscriptsState::default());

    if let Some(api) = HttpApi::from_local_storage(config.clone()) {
        leptos::task::spawn_local(async move {
            let list = load_manuscript_view(&api).await;
            if list == ManuscriptListView::Failed {
                notices.update(|n| {
                    n.show(Notice::error(LOAD_FAILED_MESSAGE));
                });
            }
            state.update(|s| s.list = list);
        });
    }

    let detail_config = config.clone();
    let on_detail = Callback::new(move |manuscript_id: String| {
        let Some(api) = HttpApi::from_local_storage(detail_config.clone()) else {
            return;
        };
        state.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let result = load_manuscript_detail(&api, &manuscript_id).await;
            state.update(|s| s.loading = false);
            match result {
                Ok(detail) => state.update(|s| s.detail = Some(detail)),
                Err(notice) => notices.update(|n| {
                    n.show(notice);
                }),
            }
        });
    });

    let on_back = Callback::new(move |()| state.update(|s| s.detail = None));

    let on_upload = Callback::new(move |(manuscript_id, file): (String, Option<UploadFile>)| {
        let Some(api) = HttpApi::from_local_storage(config.clone()) else {
            return;
        };
        if file.is_some() {
            notices.update(|n| {
                n.show(Notice::progress(UPLOADING_TITLE));
            });
        }
        leptos::task::spawn_local(async move {
            let outcome = submit_revision(&api, &manuscript_id, file).await;
            notices.update(|n| {
                n.show(outcome.notice());
            });
            if outcome == UploadOutcome::Uploaded {
                reload_after_notice().await;
            }
        });
    });

    view! {
        <section class="page manuscripts-page">
            <header class="page__header">
                <h1>"My manuscripts"</h1>
                <Show when=move || state.with(|s| s.loading)>
                    <span class="spinner" aria-label="Loading"></span>
                </Show>
            </header>
            {move || {
                if let Some(detail) = state.with(|s| s.detail.clone()) {
                    return view! { <ManuscriptDetail detail=detail on_back=on_back on_upload=on_upload/> }
                        .into_any();
                }
                match state.with(|s| s.list.clone()) {
                    ManuscriptListView::Loading => view! { <p class="page__message">{LOADING_MESSAGE}</p> }.into_any(),
                    ManuscriptListView::FirstUse => view! { <FirstUseSection/> }.into_any(),
                    ManuscriptListView::Failed => {
                        view! { <p class="page__message text-danger">{LOAD_FAILED_MESSAGE}</p> }.into_any()
                    }
                    ManuscriptListView::Table(rows) => {
                        view! { <ManuscriptTable rows=rows on_detail=on_detail/> }.into_any()
                    }
                }
            }}
        </section>
    }
}

/// Let the success notice show briefly, then reload the page.
#[allow(clippy::unused_async)]
async fn reload_after_notice() {
    #[cfg(feature = "hydrate")]
    {
        let delay = u64::from(crate::state::notice::SUCCESS_DISMISS_MS);
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                log::error!("page reload failed: {err:?}");
            }
        }
    }
}
