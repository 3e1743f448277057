//! Alert banner for error and info messages.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Error,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert--error",
            Self::Info => "alert alert--info",
        }
    }
}

#[component]
pub fn Alert(#[prop(into)] message: String, #[prop(optional)] kind: AlertKind) -> impl IntoView {
    view! { <div class=kind.class() role="alert">{message}</div> }
}
