//! Process Configuration
//!
//! All settings come from the environment, read once at startup. Missing
//! variables are reported together in a single aggregated error so a
//! misconfigured deployment surfaces every problem at once instead of one
//! field at a time.

use crate::error::{PaymentError, Result};
use crate::tier::Tier;

pub const ENV_STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
pub const ENV_SITE_URL: &str = "SITE_URL";
pub const ENV_PRICE_ID_EARLY_BIRD: &str = "STRIPE_PRICE_ID_EARLY_BIRD";
pub const ENV_PRICE_ID_REGULAR: &str = "STRIPE_PRICE_ID_REGULAR";
pub const ENV_PRICE_ID_DAY_OF: &str = "STRIPE_PRICE_ID_DAY_OF";

/// Stripe price reference for each registration tier.
///
/// Price IDs are opaque configuration data, never inline constants, so they
/// can be rotated without a code change.
#[derive(Clone, Debug)]
pub struct PriceTable {
    early_bird: String,
    regular: String,
    day_of: String,
}

impl PriceTable {
    pub fn new(
        early_bird: impl Into<String>,
        regular: impl Into<String>,
        day_of: impl Into<String>,
    ) -> Self {
        Self {
            early_bird: early_bird.into(),
            regular: regular.into(),
            day_of: day_of.into(),
        }
    }

    /// Price ID for a tier. Total because configuration is validated up
    /// front: a `PriceTable` only exists with all three tiers populated.
    pub fn price_for(&self, tier: Tier) -> &str {
        match tier {
            Tier::EarlyBird => &self.early_bird,
            Tier::Regular => &self.regular,
            Tier::DayOf => &self.day_of,
        }
    }
}

/// Validated process configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Stripe secret key (`sk_...`)
    pub stripe_secret_key: String,

    /// Public origin for redirect targets, no trailing slash
    pub site_url: String,

    /// Per-tier Stripe price IDs
    pub prices: PriceTable,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an injectable lookup.
    ///
    /// Empty values count as missing. Every missing variable is collected
    /// before failing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut missing = Vec::new();
        let mut require = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => Some(value),
            _ => {
                missing.push(key.to_string());
                None
            }
        };

        let stripe_secret_key = require(ENV_STRIPE_SECRET_KEY);
        let site_url = require(ENV_SITE_URL);
        let early_bird = require(ENV_PRICE_ID_EARLY_BIRD);
        let regular = require(ENV_PRICE_ID_REGULAR);
        let day_of = require(ENV_PRICE_ID_DAY_OF);

        match (stripe_secret_key, site_url, early_bird, regular, day_of) {
            (Some(key), Some(site), Some(early_bird), Some(regular), Some(day_of)) => Ok(Self {
                stripe_secret_key: key,
                site_url: site.trim_end_matches('/').to_string(),
                prices: PriceTable::new(early_bird, regular, day_of),
            }),
            _ => Err(PaymentError::Config(missing)),
        }
    }
}
