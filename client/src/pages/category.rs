//! Category landing page at `/category/{slug}`.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::app::STORE_NAME;
use crate::components::category_block::CategoryBlock;
use crate::components::category_card::CardVariant;
use crate::components::layout::{HeaderVariant, Layout};
use crate::state::store::AppStore;

/// Human-readable title for a category slug: `fruits-vegetables` -> `Fruits Vegetables`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn CategoryPage(store: AppStore) -> impl IntoView {
    let params = use_params_map();
    let title = move || params.with(|p| title_from_slug(&p.get("slug").unwrap_or_default()));

    view! {
        <Title text=move || format!("{} | {STORE_NAME}", title())/>
        <Layout store=store header_variant=HeaderVariant::Two>
            <section class="category-page">
                <h1 class="category-page__title">{title}</h1>
                <CategoryBlock
                    section_heading="More categories"
                    variant=CardVariant::Rounded
                    rounded_item_count=6
                    disable_border_radius=true
                />
            </section>
        </Layout>
    }
}
