//! API Client

use serde::Serialize;

/// Body for the session-creation endpoint
#[derive(Debug, Serialize)]
pub struct CheckoutBody<'a> {
    pub tier: &'a str,
    pub quantity: u32,
}

/// Create a Stripe checkout session and return the redirect URL
pub async fn create_checkout_session(tier: &str, quantity: u32) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post("/api/create-checkout-session")
        .json(&CheckoutBody { tier, quantity })
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        match data["url"].as_str() {
            Some(url) if !url.is_empty() => Ok(url.to_string()),
            _ => Err("No checkout URL returned from API".into()),
        }
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"]
            .as_str()
            .unwrap_or("Failed to create session")
            .to_string())
    }
}
