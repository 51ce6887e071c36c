//! One row of the admin transactions table.

use leptos::prelude::*;

use crate::components::proof_preview::{PreviewVariant, ProofPreview};
use crate::net::types::PaymentStatus;
use crate::state::payments::{PaymentRow, STATUS_OPTIONS, status_class};

/// Payment row with proof thumbnail, detail button, and status selector.
///
/// Changing the selector calls `on_status` with the payment id and the picked
/// status; the row itself keeps no local status, so the next list fetch
/// decides what is shown.
#[component]
pub fn PaymentRowView(
    row: PaymentRow,
    on_status: Callback<(String, PaymentStatus)>,
    on_detail: Callback<String>,
) -> impl IntoView {
    let current = row.status;
    let status_id = row.id.clone();
    let detail_id = row.id.clone();

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match PaymentStatus::from_option_value(&value) {
            Some(target) => on_status.run((status_id.clone(), target)),
            None => log::warn!("ignoring unknown status option: {value}"),
        }
    };

    view! {
        <tr class="payment-row">
            <td class="payment-row__proof">
                <ProofPreview proof=row.proof variant=PreviewVariant::Row/>
            </td>
            <td>
                <button class="btn btn--small" on:click=move |_| on_detail.run(detail_id.clone())>
                    "Transaction detail"
                </button>
            </td>
            <td class="payment-row__email">{row.email}</td>
            <td>{row.package_title}</td>
            <td class="payment-row__price">{row.price_label}</td>
            <td>{row.date_label}</td>
            <td>
                <select class=format!("status-select {}", status_class(current)) on:change=on_change>
                    {STATUS_OPTIONS
                        .iter()
                        .map(|&(status, label)| {
                            view! {
                                <option value=status.as_str() selected={status == current}>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
        </tr>
    }
}
