//! Colored manuscript status pill.

use leptos::prelude::*;

use crate::state::manuscripts::StatusBadge;

#[component]
pub fn StatusBadgeView(badge: StatusBadge) -> impl IntoView {
    view! { <span class=format!("badge {}", badge.tone.css_class())>{badge.label}</span> }
}
