//! Storefront landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::STORE_NAME;
use crate::components::category_block::CategoryBlock;
use crate::components::category_card::CardVariant;
use crate::components::layout::{HeaderVariant, Layout};
use crate::net::api::DemoVariant;
use crate::state::store::AppStore;

#[component]
pub fn HomePage(store: AppStore) -> impl IntoView {
    let query = use_query_map();
    let demo_variant = query.with_untracked(|q| q.get("variant").as_deref().and_then(DemoVariant::parse));

    view! {
        <Layout store=store header_variant=HeaderVariant::Classic>
            <section class="hero">
                <h1 class="hero__title">{format!("Welcome to {STORE_NAME}")}</h1>
                <p class="hero__subtitle">"Groceries, essentials and more, delivered to your door."</p>
            </section>
            {match demo_variant {
                Some(variant) => {
                    view! {
                        <CategoryBlock
                            section_heading="Shop by category"
                            variant=CardVariant::Circle
                            demo_variant=variant
                        />
                    }
                        .into_any()
                }
                None => view! { <CategoryBlock section_heading="Shop by category" variant=CardVariant::Circle/> }.into_any(),
            }}
        </Layout>
    }
}
