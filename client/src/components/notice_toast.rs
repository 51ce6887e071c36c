//! Modal notice overlay driven by the shared `NoticeState`.
//!
//! Auto-dismissing notices start a timer when shown; the timer only closes
//! the notice it was started for.

use leptos::prelude::*;

use crate::state::notice::{NoticeLevel, NoticeState};

fn level_modifier(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice--success",
        NoticeLevel::Error => "notice--error",
        NoticeLevel::Warning => "notice--warning",
        NoticeLevel::Progress => "notice--progress",
    }
}

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let (seq, delay) = notices.with(|s| (s.seq, s.current.as_ref().and_then(|n| n.auto_dismiss_ms)));
        let Some(ms) = delay else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
                notices.update(|s| s.dismiss_if_current(seq));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seq, ms);
        }
    });

    let dismiss = move || notices.update(NoticeState::dismiss);

    view! {
        {move || {
            notices.get().current.map(|notice| {
                let dismissible = notice.dismissible();
                view! {
                    <div
                        class="dialog-backdrop notice-backdrop"
                        on:click=move |_| {
                            if dismissible {
                                dismiss();
                            }
                        }
                    >
                        <div
                            class=format!("dialog notice {}", level_modifier(notice.level))
                            role="alertdialog"
                            on:click=move |ev| ev.stop_propagation()
                        >
                            <h2 class="notice__title">{notice.title}</h2>
                            {notice.text.map(|text| view! { <p class="notice__text">{text}</p> })}
                            <Show when=move || dismissible>
                                <div class="dialog__actions">
                                    <button class="btn btn--primary" on:click=move |_| dismiss()>"OK"</button>
                                </div>
                            </Show>
                        </div>
                    </div>
                }
            })
        }}
    }
}
