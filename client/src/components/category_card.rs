//! Category tile linking to the category page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Category;

/// Card shape used by a category block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Circle,
    Rounded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSize {
    Small,
    Medium,
}

impl CardSize {
    pub fn for_variant(variant: CardVariant) -> Self {
        match variant {
            CardVariant::Circle => Self::Small,
            CardVariant::Rounded => Self::Medium,
        }
    }
}

/// Image size override; `Large` renders the original asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    Large,
}

#[component]
pub fn CategoryCard(
    category: Category,
    #[prop(into)] href: String,
    variant: CardVariant,
    img_size: Option<ImageSize>,
    #[prop(optional)] disable_border_radius: bool,
) -> impl IntoView {
    let size = CardSize::for_variant(variant);
    let mut class = String::from("category-card");
    class.push_str(match variant {
        CardVariant::Circle => " category-card--circle",
        CardVariant::Rounded => " category-card--rounded",
    });
    class.push_str(match size {
        CardSize::Small => " category-card--small",
        CardSize::Medium => " category-card--medium",
    });
    if disable_border_radius {
        class.push_str(" category-card--square");
    }

    let image = category.image.as_ref().and_then(|img| match img_size {
        Some(ImageSize::Large) => img.original.clone().or_else(|| img.thumbnail.clone()),
        None => img.thumbnail.clone().or_else(|| img.original.clone()),
    });
    let name = category.name.clone();

    view! {
        <A href={href} {..} class=class>
            <div class="category-card__image">
                {image.map(|src| view! { <img src=src alt=name.clone() loading="lazy"/> })}
            </div>
            <span class="category-card__name">{category.name}</span>
            {category
                .product_count
                .map(|n| view! { <span class="category-card__count">{format!("{n} items")}</span> })}
        </A>
    }
}
