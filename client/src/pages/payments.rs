//! Admin transactions page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page loads the package catalog, then the payment list, so
//! every row resolves against a filled cache. Status changes and detail
//! requests go through `actions::payments`; this module only moves their
//! results into signals.

use leptos::prelude::*;

use crate::actions::payments::{load_package_cache, load_payment_detail, load_payment_view, update_payment_status};
use crate::components::payment_detail_modal::PaymentDetailModal;
use crate::components::payment_row::PaymentRowView;
use crate::net::api::{ApiConfig, HttpApi};
use crate::net::types::PaymentStatus;
use crate::state::notice::NoticeState;
use crate::state::payments::PaymentsState;

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(PaymentsState::default());

    if let Some(api) = HttpApi::from_local_storage(config.clone()) {
        leptos::task::spawn_local(async move {
            let cache = load_package_cache(&api).await;
            let list = load_payment_view(&api, &cache).await;
            state.set(PaymentsState { cache, list, detail: None });
        });
    }

    let status_config = config.clone();
    let on_status = Callback::new(move |(payment_id, target): (String, PaymentStatus)| {
        let Some(api) = HttpApi::from_local_storage(status_config.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let cache = state.with_untracked(|s| s.cache.clone());
            let update = update_payment_status(&api, &cache, &payment_id, target).await;
            state.update(|s| s.list = update.view);
            notices.update(|n| {
                n.show(update.notice);
            });
        });
    });

    let on_detail = Callback::new(move |payment_id: String| {
        let Some(api) = HttpApi::from_local_storage(config.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let cache = state.with_untracked(|s| s.cache.clone());
            match load_payment_detail(&api, &cache, &payment_id).await {
                Ok(detail) => state.update(|s| s.detail = Some(detail)),
                Err(notice) => notices.update(|n| {
                    n.show(notice);
                }),
            }
        });
    });

    let on_close = Callback::new(move |()| state.update(|s| s.detail = None));

    view! {
        <section class="page payments-page">
            <header class="page__header">
                <h1>"Transactions"</h1>
            </header>
            {move || match state.with(|s| s.list.message()) {
                Some(message) => view! { <p class="page__message">{message}</p> }.into_any(),
                None => {
                    let rows = state.with(|s| s.list.rows().to_vec());
                    view! {
                        <table class="table payments-table">
                            <thead>
                                <tr>
                                    <th>"Proof"</th>
                                    <th>"Detail"</th>
                                    <th>"Email"</th>
                                    <th>"Package"</th>
                                    <th>"Price"</th>
                                    <th>"Date"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| view! { <PaymentRowView row=row on_status=on_status on_detail=on_detail/> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
            {move || {
                state.with(|s| s.detail.clone()).map(|detail| view! { <PaymentDetailModal detail=detail on_close=on_close/> })
            }}
        </section>
    }
}
