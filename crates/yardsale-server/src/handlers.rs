//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use yardsale_payments::{PaymentError, RegistrationRequest, Tier, effective_quantity};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

/// Raw form input. `tier` must parse; `quantity` is accepted as any JSON
/// value and normalized, so an odd client never gets a quantity rejection.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub quantity: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: state.checkout.is_some(),
    })
}

/// Create a Stripe checkout session for a vendor registration.
///
/// Configuration is checked first, then the tier; no outbound call is made
/// until both pass.
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let checkout = state.checkout.as_ref().ok_or_else(|| {
        let error = state
            .config_error
            .clone()
            .unwrap_or_else(|| "Payments not configured".into());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error,
                code: "CONFIG_ERROR".into(),
            }),
        )
    })?;

    let tier: Tier = payload.tier.parse().map_err(|e: PaymentError| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
                code: "INVALID_TIER".into(),
            }),
        )
    })?;

    let quantity = effective_quantity(&payload.quantity);

    let session = checkout
        .create_registration_session(RegistrationRequest { tier, quantity })
        .await
        .map_err(|e| {
            tracing::error!("Checkout error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                    code: "CHECKOUT_ERROR".into(),
                }),
            )
        })?;

    Ok(Json(CreateSessionResponse { url: session.url }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::{get, post};
    use tower::ServiceExt;

    use yardsale_payments::{CheckoutClient, Config};

    use super::*;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/api/create-checkout-session", post(create_checkout_session))
            .with_state(state)
    }

    fn configured_state() -> AppState {
        let config = Config::from_lookup(|key| Some(format!("test-{key}"))).unwrap();
        AppState {
            checkout: Some(Arc::new(CheckoutClient::new(&config))),
            config_error: None,
        }
    }

    fn unconfigured_state() -> AppState {
        let error = Config::from_lookup(|_| None).unwrap_err();
        AppState {
            checkout: None,
            config_error: Some(error.to_string()),
        }
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/create-checkout-session")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_tier_rejected_without_outbound_call() {
        // A configured client with a bogus key: a 400 here proves the
        // handler rejects before ever talking to Stripe.
        let response = app(configured_state())
            .oneshot(post_json(r#"{"tier":"platinum","quantity":2}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let error = json["error"].as_str().unwrap();
        assert!(error.contains("early-bird"));
        assert!(error.contains("regular"));
        assert!(error.contains("day-of"));
    }

    #[tokio::test]
    async fn test_missing_tier_rejected() {
        let response = app(configured_state())
            .oneshot(post_json(r#"{"quantity":1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_config_lists_every_var() {
        let response = app(unconfigured_state())
            .oneshot(post_json(r#"{"tier":"regular","quantity":1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        let error = json["error"].as_str().unwrap();
        for key in [
            "STRIPE_SECRET_KEY",
            "SITE_URL",
            "STRIPE_PRICE_ID_EARLY_BIRD",
            "STRIPE_PRICE_ID_REGULAR",
            "STRIPE_PRICE_ID_DAY_OF",
        ] {
            assert!(error.contains(key), "missing {key} in: {error}");
        }
    }

    #[tokio::test]
    async fn test_config_checked_before_tier() {
        // Even an invalid tier gets the config error while unconfigured
        let response = app(unconfigured_state())
            .oneshot(post_json(r#"{"tier":"platinum"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_on_session_endpoint_is_rejected() {
        let request = Request::builder()
            .method("GET")
            .uri("/api/create-checkout-session")
            .body(Body::empty())
            .unwrap();
        let response = app(configured_state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_reports_stripe_state() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app(unconfigured_state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["stripe_configured"], false);
    }
}
