//! UI Components

use leptos::prelude::*;

/// A registration tier shown in the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierOption {
    pub key: &'static str,
    pub label: &'static str,
    pub cents: u32,
}

/// Formatted dollar amount, e.g. "$60"
#[component]
pub fn Price(#[prop(into)] cents: Signal<u32>) -> impl IntoView {
    view! {
        <span class="price">{move || format!("${}", cents.get() / 100)}</span>
    }
}
