//! Section shown to an author who has no manuscripts yet.

use leptos::prelude::*;

#[component]
pub fn FirstUseSection() -> impl IntoView {
    view! {
        <section class="card first-use">
            <h2>"Upload your first manuscript"</h2>
            <p class="text-muted">
                "You have not submitted any manuscripts yet. Once your first manuscript is uploaded it will appear here with its review status."
            </p>
        </section>
    }
}
