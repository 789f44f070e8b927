//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::ide::IdePage;
use crate::state::{auth::AuthState, chat::ChatState, files::FilesState, ui::UiState};
use crate::util::time::now_ms;

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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::checking());
    let chat = RwSignal::new(ChatState::new(now_ms()));
    let files = RwSignal::new(FilesState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(chat);
    provide_context(files);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/buildchat.css"/>
        <Title text="AI App Builder"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IdePage/>
            </Routes>
        </Router>
    }
}
