//! Vendor Registration Page

use leptos::prelude::*;

use crate::api;
use crate::components::{Price, TierOption};

/// Registration tiers shown in the form. Display prices only; the server
/// resolves the tier to a configured Stripe price.
static TIERS: [TierOption; 3] = [
    TierOption {
        key: "early-bird",
        label: "Early Bird - $20 (First 20 vendors)",
        cents: 2000,
    },
    TierOption {
        key: "regular",
        label: "Regular - $30",
        cents: 3000,
    },
    TierOption {
        key: "day-of",
        label: "Day Of - $40",
        cents: 4000,
    },
];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (tier, set_tier) = signal("regular".to_string());
    let (quantity, set_quantity) = signal(1u32);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let total_cents = move || {
        TIERS
            .iter()
            .find(|t| t.key == tier.get())
            .map_or(0, |t| t.cents * quantity.get())
    };

    let checkout = move |_| {
        set_error.set(None);
        set_loading.set(true);
        let tier = tier.get();
        let quantity = quantity.get();
        leptos::task::spawn_local(async move {
            match api::create_checkout_session(&tier, quantity).await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Lyons Community Yard Sale"</h1>
                <p class="tagline">"A Day of Bargains and Community Spirit!"</p>
                <div class="cta">
                    <a href="#registration" class="btn btn-primary">"Register as Vendor"</a>
                </div>
            </header>

            <section id="registration" class="registration">
                <h2>"Vendor Registration"</h2>

                <label>
                    <span>"Registration Type"</span>
                    <select
                        prop:value=move || tier.get()
                        on:change=move |ev| set_tier.set(event_target_value(&ev))
                    >
                        {TIERS
                            .iter()
                            .map(|t| view! { <option value=t.key>{t.label}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label>
                    <span>"Number of Spaces"</span>
                    <select
                        prop:value=move || quantity.get().to_string()
                        on:change=move |ev| {
                            set_quantity.set(event_target_value(&ev).parse().unwrap_or(1));
                        }
                    >
                        <option value="1">"1"</option>
                        <option value="2">"2"</option>
                        <option value="3">"3"</option>
                    </select>
                </label>

                <p class="total">"Total: " <Price cents=Signal::derive(total_cents) /></p>

                <button
                    class="btn btn-primary"
                    disabled=move || loading.get()
                    on:click=checkout
                >
                    {move || if loading.get() { "Redirecting…" } else { "Continue to Payment" }}
                </button>

                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
            </section>

            <footer>
                <p>"© 2025 Town of Lyons. All rights reserved."</p>
            </footer>
        </div>
    }
}
