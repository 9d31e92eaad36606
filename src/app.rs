//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::editor::EditorState;
use crate::state::generate::GenerateState;
use crate::state::notice::NoticeState;
use crate::state::posts::PostsState;
use crate::state::search::SearchState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides one shared state context per domain and sets up client-side
/// routing for the single home route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let posts = RwSignal::new(PostsState::default());
    let search = RwSignal::new(SearchState::default());
    let generate = RwSignal::new(GenerateState::default());
    let editor = RwSignal::new(EditorState::default());
    let notices = RwSignal::new(NoticeState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(posts);
    provide_context(search);
    provide_context(generate);
    provide_context(editor);
    provide_context(notices);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/postboard.css"/>
        <Title text="Blog Post Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
