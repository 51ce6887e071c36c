//! Modal showing one transaction in full.

#[cfg(test)]
#[path = "payment_detail_modal_test.rs"]
mod payment_detail_modal_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::proof_preview::{PreviewVariant, ProofPreview};
use crate::state::payments::PaymentDetail;

/// Key that dismisses the modal.
fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

/// Transaction detail modal. Closes via the button, a backdrop click, or
/// Escape.
#[component]
pub fn PaymentDetailModal(detail: PaymentDetail, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<Div>::new();

    // Focus the dialog once mounted so Escape reaches its keydown handler.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.focus();
            }
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let fields = [
        ("Author", detail.author_name),
        ("Package", detail.package_title),
        ("Amount", detail.amount_label),
        ("Date", detail.date_label),
        ("Bank", detail.bank_name),
    ];

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                node_ref=dialog_ref
                class="dialog dialog--payment"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Transaction detail"</h2>
                {fields
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="dialog__row">
                                <span class="dialog__label">{label}</span>
                                <span class="dialog__value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="dialog__proof">
                    <ProofPreview proof=detail.proof variant=PreviewVariant::Modal/>
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=on_close_click>"Close"</button>
                </div>
            </div>
        </div>
    }
}
