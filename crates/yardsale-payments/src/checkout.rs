//! Stripe Checkout Integration
//!
//! Implements the "Stripe Checkout (Hosted)" approach for one-time vendor
//! registration payments.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems,
};

use crate::config::{Config, PriceTable};
use crate::error::{PaymentError, Result};
use crate::tier::Tier;

/// Stripe client wrapper
///
/// Constructed once during process initialization and shared read-only
/// across request handlers.
pub struct CheckoutClient {
    client: Client,
    prices: PriceTable,
    site_url: String,
}

impl CheckoutClient {
    /// Create a new checkout client from validated configuration
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(config.stripe_secret_key.clone()),
            prices: config.prices.clone(),
            site_url: config.site_url.clone(),
        }
    }

    /// Create a Stripe Checkout session for a vendor registration.
    ///
    /// Returns a URL to redirect the vendor to Stripe's hosted checkout
    /// page. Each call creates a distinct billable session; the caller must
    /// not retry or deduplicate.
    pub async fn create_registration_session(
        &self,
        request: RegistrationRequest,
    ) -> Result<CheckoutSession> {
        let price = self.prices.price_for(request.tier);
        let urls = RedirectUrls::for_site(&self.site_url);
        let params = session_params(request.tier, price, request.quantity, &urls);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let url = session
            .url
            .ok_or_else(|| PaymentError::Stripe("No checkout URL returned".into()))?;

        tracing::info!(
            session_id = %session.id,
            tier = %request.tier,
            quantity = request.quantity,
            "Created checkout session"
        );

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url,
            tier: request.tier,
            quantity: request.quantity,
        })
    }

    /// Get the underlying Stripe client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Redirect targets for a checkout session, derived from the public origin.
///
/// `{CHECKOUT_SESSION_ID}` is a Stripe-side template token, substituted by
/// Stripe when redirecting back.
struct RedirectUrls {
    success: String,
    cancel: String,
}

impl RedirectUrls {
    fn for_site(site_url: &str) -> Self {
        Self {
            success: format!("{site_url}/success?session_id={{CHECKOUT_SESSION_ID}}"),
            cancel: format!("{site_url}/cancel"),
        }
    }
}

/// Build the session-creation request: a single line item for the tier's
/// price, one-time payment mode, and promotion codes allowed.
fn session_params<'a>(
    tier: Tier,
    price: &str,
    quantity: u64,
    urls: &'a RedirectUrls,
) -> CreateCheckoutSession<'a> {
    let mut params = CreateCheckoutSession::new();
    params.mode = Some(CheckoutSessionMode::Payment);
    params.success_url = Some(&urls.success);
    params.cancel_url = Some(&urls.cancel);
    params.allow_promotion_codes = Some(true);

    params.line_items = Some(vec![CreateCheckoutSessionLineItems {
        price: Some(price.to_owned()),
        quantity: Some(quantity),
        ..Default::default()
    }]);

    // Metadata for tracking in the Stripe dashboard
    let mut metadata = HashMap::new();
    metadata.insert("tier".to_string(), tier.as_str().to_string());
    metadata.insert("quantity".to_string(), quantity.to_string());
    params.metadata = Some(metadata);

    params
}

/// A validated registration: tier plus space count
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Pricing tier selected on the form
    pub tier: Tier,

    /// Number of vendor spaces, already clamped to the valid range
    pub quantity: u64,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Stripe session ID
    pub id: String,

    /// URL to redirect the vendor to
    pub url: String,

    /// Tier being purchased
    pub tier: Tier,

    /// Number of spaces reserved
    pub quantity: u64,
}
