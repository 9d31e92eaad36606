//! Transient notice banners with auto-dismissal.
//!
//! DESIGN
//! ======
//! One error banner and one success banner, independently visible. Each
//! show starts a dismissal timer tagged with the notice's sequence number,
//! so a timer for a replaced message expires as a no-op instead of cutting
//! a newer notice short.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Hosts the error and success banners and their auto-dismiss timers.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::notice::NOTICE_DISMISS_MS;

        // One timer per shown message; the seq latch keeps re-renders from
        // stacking duplicate timers for the same notice.
        let timed_error_seq = RwSignal::new(0_u64);
        Effect::new(move || {
            let state = notices.get();
            if state.error.is_some() && timed_error_seq.get_untracked() != state.error_seq {
                timed_error_seq.set(state.error_seq);
                let seq = state.error_seq;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_DISMISS_MS))
                        .await;
                    notices.update(|n| {
                        n.expire_error(seq);
                    });
                });
            }
        });

        let timed_success_seq = RwSignal::new(0_u64);
        Effect::new(move || {
            let state = notices.get();
            if state.success.is_some() && timed_success_seq.get_untracked() != state.success_seq {
                timed_success_seq.set(state.success_seq);
                let seq = state.success_seq;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_DISMISS_MS))
                        .await;
                    notices.update(|n| {
                        n.expire_success(seq);
                    });
                });
            }
        });
    }

    view! {
        <div class="notice-host">
            <Show when=move || notices.get().error.is_some()>
                <div class="notice notice--error">
                    <span class="notice__text">
                        {move || notices.get().error.unwrap_or_default()}
                    </span>
                    <button
                        class="notice__dismiss"
                        title="Dismiss"
                        on:click=move |_| notices.update(NoticeState::dismiss_error)
                    >
                        "\u{d7}"
                    </button>
                </div>
            </Show>
            <Show when=move || notices.get().success.is_some()>
                <div class="notice notice--success">
                    <span class="notice__text">
                        {move || notices.get().success.unwrap_or_default()}
                    </span>
                    <button
                        class="notice__dismiss"
                        title="Dismiss"
                        on:click=move |_| notices.update(NoticeState::dismiss_success)
                    >
                        "\u{d7}"
                    </button>
                </div>
            </Show>
        </div>
    }
}
