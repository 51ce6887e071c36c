//! Table of the author's manuscripts.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadgeView;
use crate::state::manuscripts::ManuscriptRow;

#[component]
pub fn ManuscriptTable(rows: Vec<ManuscriptRow>, on_detail: Callback<String>) -> impl IntoView {
    view! {
        <table class="table manuscript-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Series"</th>
                    <th>"Status"</th>
                    <th>"Revisions"</th>
                    <th>"Created"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let id = row.id;
                        view! {
                            <tr>
                                <td>{row.title}</td>
                                <td>{row.series}</td>
                                <td><StatusBadgeView badge=row.badge/></td>
                                <td>{row.revision_count}</td>
                                <td>{row.created_label}</td>
                                <td>
                                    <button class="btn btn--small" on:click=move |_| on_detail.run(id.clone())>
                                        "Detail"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
