//! Root application component with routing and the shared store.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{category::CategoryPage, home::HomePage, not_found::NotFoundPage};
use crate::state::auth::AuthState;
use crate::state::store::AppStore;
use crate::state::ui::UiState;

pub const STORE_NAME: &str = "Storefront";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
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
/// Owns the [`AppStore`] and hands it to each route explicitly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AppStore::new(AuthState::default(), UiState::default());

    // Effects only run in the browser, so SSR always renders signed out.
    Effect::new(move || store.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text=STORE_NAME/>

        <Router>
            <Routes fallback=move || view! { <NotFoundPage store=store/> }>
                <Route path=StaticSegment("") view=move || view! { <HomePage store=store/> }/>
                <Route
                    path=(StaticSegment("category"), ParamSegment("slug"))
                    view=move || view! { <CategoryPage store=store/> }
                />
            </Routes>
        </Router>
    }
}
