//! Skeleton placeholders shown while categories load.

use leptos::prelude::*;

use super::category_card::CardVariant;

/// Pulsing placeholder shaped like a category card of `variant`.
#[component]
pub fn CardLoader(#[prop(into)] unique_key: String, variant: CardVariant) -> impl IntoView {
    let class = match variant {
        CardVariant::Circle => "card-loader card-loader--circle",
        CardVariant::Rounded => "card-loader card-loader--rounded",
    };
    view! {
        <div class=class data-key=unique_key aria-hidden="true">
            <div class="card-loader__image"></div>
            <div class="card-loader__label"></div>
        </div>
    }
}
