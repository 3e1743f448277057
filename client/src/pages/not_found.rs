use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::Layout;
use crate::state::store::AppStore;

#[component]
pub fn NotFoundPage(store: AppStore) -> impl IntoView {
    view! {
        <Layout store=store>
            <section class="not-found">
                <h1>"Page not found"</h1>
                <A href="/" {..} class="btn btn--primary">"Back to the store"</A>
            </section>
        </Layout>
    }
}
