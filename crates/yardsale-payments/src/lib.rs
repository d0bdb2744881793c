//! # yardsale-payments
//!
//! Stripe integration for vendor registration at the community yard sale.
//!
//! Uses the "Stripe Checkout (Hosted)" approach: the server only validates
//! the registration, creates a checkout session, and redirects the vendor to
//! Stripe's hosted payment page. Stripe owns the payment state machine, card
//! handling, receipts, and retries.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Your Site  │────▶│  Stripe Hosted  │────▶│  Your Site  │
//! │ (register)  │     │  Checkout Page  │     │  (success)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use yardsale_payments::{CheckoutClient, Config, RegistrationRequest, Tier};
//!
//! let config = Config::from_env()?;
//! let client = CheckoutClient::new(&config);
//!
//! let session = client.create_registration_session(RegistrationRequest {
//!     tier: Tier::EarlyBird,
//!     quantity: 2,
//! }).await?;
//!
//! // Redirect user to: session.url
//! ```

mod checkout;
mod config;
mod error;
mod tier;

pub use checkout::{CheckoutClient, CheckoutSession, RegistrationRequest};
pub use config::{Config, PriceTable};
pub use error::{PaymentError, Result};
pub use tier::{MAX_SPACES, Tier, effective_quantity};
