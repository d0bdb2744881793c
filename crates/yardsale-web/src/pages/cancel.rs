//! Payment Cancelled Page

use leptos::prelude::*;

#[component]
pub fn CancelPage() -> impl IntoView {
    view! {
        <main class="outcome outcome-cancel">
            <h1>"Payment Cancelled"</h1>
            <p>
                "Your payment was cancelled or did not complete. "
                "If this was a mistake, you can try registering again."
            </p>
            <a href="/" class="btn">"Return to Registration"</a>
        </main>
    }
}
