//! Application State

use std::sync::Arc;

use yardsale_payments::CheckoutClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Stripe checkout client (None if required configuration is missing)
    pub checkout: Option<Arc<CheckoutClient>>,

    /// Aggregated configuration error, set when `checkout` is None so the
    /// handler can fail closed with the full list of missing variables
    pub config_error: Option<String>,
}
