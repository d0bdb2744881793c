//! Payment Success Page
//!
//! Displays the session id from the redirect query string. No local
//! verification of payment state: the represented outcome is Stripe's.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let query = use_query_map();
    let session_id = move || query.with(|q| q.get("session_id"));

    view! {
        <main class="outcome">
            <h1>"Payment successful 🎉"</h1>
            <p>
                "Thanks for registering! Your Stripe session id: "
                {move || session_id().unwrap_or_else(|| "(none)".into())}
            </p>
            <a href="/">"Go back home"</a>
        </main>
    }
}
