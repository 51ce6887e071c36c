//! Landing page linking to the two dashboards.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page home-page">
            <h1>"Press Dashboard"</h1>
            <nav class="home-page__links">
                <a class="btn" href="/admin/transactions">"Transactions (admin)"</a>
                <a class="btn" href="/author/manuscripts">"My manuscripts (author)"</a>
            </nav>
        </section>
    }
}
