//! Heading row above a storefront section.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(#[prop(into)] heading: String) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-header__title">{heading}</h2>
        </div>
    }
}
