//! Horizontally scrolling block of category cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches one page of categories in the browser after hydration. While the
//! request is pending the block shows skeleton cards shaped like the chosen
//! variant; a failure renders the error text in an alert.

#[cfg(test)]
#[path = "category_block_test.rs"]
mod category_block_test;

use leptos::prelude::*;

use super::alert::{Alert, AlertKind};
use super::card_loader::CardLoader;
use super::category_card::{CardVariant, CategoryCard, ImageSize};
use super::section_header::SectionHeader;
use crate::config::AppConfig;
use crate::net::api::{CategoryQuery, DemoVariant, fetch_categories};

/// Skeleton count when no `rounded_item_count` is given.
pub const DEFAULT_SKELETON_COUNT: usize = 10;

/// Link target for a category card.
pub fn category_href(slug: &str) -> String {
    format!("/category/{slug}")
}

/// Number of skeleton cards shown while loading.
pub fn skeleton_count(rounded_item_count: Option<usize>) -> usize {
    rounded_item_count.unwrap_or(DEFAULT_SKELETON_COUNT)
}

/// Stable keys for `count` skeleton cards of `variant`.
pub fn placeholder_keys(variant: CardVariant, count: usize) -> Vec<String> {
    let prefix = match variant {
        CardVariant::Circle => "card-circle",
        CardVariant::Rounded => "card-rounded",
    };
    (0..count).map(|i| format!("{prefix}-{i}")).collect()
}

#[component]
pub fn CategoryBlock(
    #[prop(into, optional)] section_heading: Option<String>,
    #[prop(into, optional)] class: Option<String>,
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] rounded_item_count: Option<usize>,
    #[prop(optional)] demo_variant: Option<DemoVariant>,
    #[prop(optional)] img_size: Option<ImageSize>,
    #[prop(optional)] disable_border_radius: bool,
) -> impl IntoView {
    let config = AppConfig::load();
    let query = CategoryQuery { limit: config.category_limit, variant: demo_variant };
    let categories = LocalResource::new(move || {
        let config = config.clone();
        async move { fetch_categories(&config, query).await }
    });

    let class = match class {
        Some(extra) => format!("category-block {extra}"),
        None => "category-block".to_owned(),
    };
    let keys = placeholder_keys(variant, skeleton_count(rounded_item_count));

    view! {
        <section class=class>
            {section_heading.map(|heading| view! { <SectionHeader heading=heading/> })}
            {move || match categories.get() {
                Some(Err(e)) => view! { <Alert message=e.to_string() kind=AlertKind::Error/> }.into_any(),
                Some(Ok(list)) => {
                    view! {
                        <div class="category-block__track">
                            {list
                                .into_iter()
                                .map(|category| {
                                    let href = category_href(&category.slug);
                                    view! {
                                        <CategoryCard
                                            category=category
                                            href=href
                                            variant=variant
                                            img_size=img_size
                                            disable_border_radius=disable_border_radius
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="category-block__track">
                            {keys
                                .iter()
                                .map(|key| view! { <CardLoader unique_key=key.clone() variant=variant/> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
