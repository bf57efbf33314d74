use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{config::Config, types::Token};

/// Mints a fresh access token from the configured refresh token.
///
/// Performs the OAuth 2.0 refresh-token grant against the token endpoint.
/// The request authenticates with HTTP Basic auth carrying the client id and
/// secret, as required for tokens that were originally issued through the
/// authorization-code flow.
///
/// # Arguments
///
/// * `config` - Runtime configuration holding client credentials, the
///   refresh token, and the token endpoint URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh access token with its type, scope, and lifetime
/// - `Err(String)` - Error message describing the failure
///
/// # Error Conditions
///
/// Common failures include:
/// - Network connectivity issues
/// - Invalid client credentials or a revoked refresh token
/// - A response without an `access_token` field
///
/// # Example
///
/// ```
/// let token = refresh_access_token(&config).await?;
/// println!("Access token expires in {} seconds", token.expires_in);
/// ```
pub async fn refresh_access_token(config: &Config) -> Result<Token, String> {
    let basic = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));

    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .header("Authorization", format!("Basic {}", basic))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", &config.refresh_token),
            ("client_id", &config.client_id),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"].as_str().unwrap_or_default();
    if access_token.is_empty() {
        return Err(format!("token endpoint returned no access token: {}", json));
    }

    Ok(Token {
        access_token: access_token.to_string(),
        token_type: json["token_type"].as_str().unwrap_or("Bearer").to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
    })
}
