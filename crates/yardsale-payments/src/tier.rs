//! Registration Tiers & Input Validation
//!
//! Pure validation of the attacker-controlled form input. Tier handling is
//! strict (unknown values are rejected); quantity handling is deliberately
//! lenient (anything out of range becomes a single space).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaymentError;

/// Maximum number of vendor spaces a single registration may reserve.
pub const MAX_SPACES: u64 = 3;

/// Registration pricing tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    EarlyBird,
    Regular,
    DayOf,
}

impl Tier {
    /// All valid tiers, in pricing order
    pub const ALL: [Tier; 3] = [Tier::EarlyBird, Tier::Regular, Tier::DayOf];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::EarlyBird => "early-bird",
            Tier::Regular => "regular",
            Tier::DayOf => "day-of",
        }
    }
}

impl FromStr for Tier {
    type Err = PaymentError;

    /// Parse the wire form of a tier. Matching is exact; anything else is
    /// rejected rather than silently mapped to a default tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "early-bird" => Ok(Tier::EarlyBird),
            "regular" => Ok(Tier::Regular),
            "day-of" => Ok(Tier::DayOf),
            _ => Err(PaymentError::InvalidTier),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coerce a raw quantity value into a space count.
///
/// Accepts JSON numbers and numeric strings. An integral value in
/// `1..=MAX_SPACES` is used exactly; everything else (missing, null,
/// non-numeric, negative, zero, fractional, too large) falls back to a
/// single space. Out-of-range quantity is normalized, never rejected.
pub fn effective_quantity(raw: &serde_json::Value) -> u64 {
    let number = match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss
        )]
        Some(q) if q.fract() == 0.0 && (1.0..=MAX_SPACES as f64).contains(&q) => q as u64,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tier_round_trip() {
        for tier in Tier::ALL {
            assert_eq!(tier.as_str().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_unknown_tier_rejected() {
        for bad in ["", "gold", "Early-Bird", "EARLY-BIRD", "day of", " regular"] {
            let err = bad.parse::<Tier>().unwrap_err();
            assert!(err.is_client_error());
            // The rejection names the allowed set
            let msg = err.to_string();
            assert!(msg.contains("early-bird"));
            assert!(msg.contains("regular"));
            assert!(msg.contains("day-of"));
        }
    }

    #[test]
    fn test_valid_quantities_pass_through() {
        for q in 1..=3u64 {
            assert_eq!(effective_quantity(&json!(q)), q);
        }
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        assert_eq!(effective_quantity(&json!("2")), 2);
        assert_eq!(effective_quantity(&json!(" 3 ")), 3);
    }

    #[test]
    fn test_out_of_range_defaults_to_one() {
        for raw in [json!(0), json!(4), json!(-1), json!(2.5), json!(100)] {
            assert_eq!(effective_quantity(&raw), 1);
        }
    }

    #[test]
    fn test_garbage_defaults_to_one() {
        for raw in [
            serde_json::Value::Null,
            json!("abc"),
            json!(""),
            json!(false),
            json!([2]),
            json!({"n": 2}),
        ] {
            assert_eq!(effective_quantity(&raw), 1);
        }
    }
}
