//! Draft-generation panel: topic input, pending draft, save/discard.

use leptos::prelude::*;

use crate::net::ops;
use crate::state::generate::GenerateState;
use crate::state::notice::NoticeState;
use crate::state::posts::PostsState;

/// Generate tab: a topic prompt and, once generation succeeds, the draft
/// card awaiting acceptance.
///
/// A blank topic is a no-op. Saving posts the draft with the originating
/// topic through the regular create endpoint; Discard drops it with zero
/// network calls.
#[component]
pub fn GeneratePanel() -> impl IntoView {
    let generate = expect_context::<RwSignal<GenerateState>>();
    let posts = expect_context::<RwSignal<PostsState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let do_generate = move || ops::run_generate(generate, notices);

    view! {
        <section class="generate-panel">
            <div class="generate-panel__input-row">
                <input
                    class="generate-panel__input"
                    type="text"
                    placeholder="e.g., machine learning, climate change, productivity tips"
                    prop:value=move || generate.get().topic
                    on:input=move |ev| generate.update(|g| g.topic = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            do_generate();
                        }
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || generate.get().generating
                    on:click=move |_| do_generate()
                >
                    {move || if generate.get().generating { "Generating..." } else { "Generate" }}
                </button>
            </div>
            <Show when=move || generate.get().draft.is_some()>
                <article class="draft-card">
                    <h2 class="draft-card__title">
                        {move || generate.get().draft.map(|d| d.title).unwrap_or_default()}
                    </h2>
                    <p class="draft-card__content">
                        {move || generate.get().draft.map(|d| d.content).unwrap_or_default()}
                    </p>
                    <div class="draft-card__actions">
                        <button
                            class="btn btn--primary"
                            disabled=move || generate.get().saving
                            on:click=move |_| ops::save_generated(generate, posts, notices)
                        >
                            "Save Post"
                        </button>
                        <button
                            class="btn"
                            on:click=move |_| generate.update(GenerateState::discard_draft)
                        >
                            "Discard"
                        </button>
                    </div>
                </article>
            </Show>
        </section>
    }
}
