//! Userinfo-endpoint identity provider.
//!
//! The OAuth front channel (redirects, code exchange) happens outside this
//! service. What reaches us is a provider access token; this client trades
//! it for the holder's profile at the provider's OIDC userinfo endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use quill_core::ports::{AuthError, IdentityProvider, ProviderProfile};

/// Userinfo endpoint configuration.
#[derive(Debug, Clone)]
pub struct UserinfoConfig {
    /// Endpoint returning the token holder's profile as JSON.
    pub userinfo_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for UserinfoConfig {
    fn default() -> Self {
        Self {
            userinfo_url: "https://openidconnect.googleapis.com/v1/userinfo".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl UserinfoConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            userinfo_url: std::env::var("OAUTH_USERINFO_URL").unwrap_or(default.userinfo_url),
            timeout: Duration::from_secs(
                std::env::var("OAUTH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}

/// Wire shape of the userinfo response. Providers differ in which claims
/// they populate, so everything is optional until checked.
#[derive(Debug, Deserialize)]
struct RawProfile {
    name: Option<String>,
    email: Option<String>,
    picture: Option<String>,
}

/// HTTP client for the provider's userinfo endpoint.
pub struct UserinfoClient {
    client: reqwest::Client,
    config: UserinfoConfig,
}

impl UserinfoClient {
    pub fn new(config: UserinfoConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    pub fn from_env() -> Self {
        Self::new(UserinfoConfig::from_env())
    }
}

fn profile_from_raw(raw: RawProfile) -> Result<ProviderProfile, AuthError> {
    let email = raw
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AuthError::Provider("profile is missing an email claim".to_string()))?;

    // Some providers omit the display name; fall back to the mailbox part.
    let name = raw
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or(&email).to_string());

    Ok(ProviderProfile {
        name,
        email,
        picture: raw.picture,
    })
}

#[async_trait]
impl IdentityProvider for UserinfoClient {
    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, AuthError> {
        let response = self
            .client
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(AuthError::Rejected),
            status if !status.is_success() => {
                return Err(AuthError::Provider(format!(
                    "userinfo endpoint returned {status}"
                )));
            }
            _ => {}
        }

        let raw: RawProfile = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        profile_from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_userinfo_payload() {
        let raw: RawProfile = serde_json::from_str(
            r#"{"sub":"1","name":"Jane Doe","email":"jane@example.com","picture":"https://cdn.example.com/jane.png"}"#,
        )
        .unwrap();

        let profile = profile_from_raw(raw).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane@example.com");
        assert_eq!(
            profile.picture.as_deref(),
            Some("https://cdn.example.com/jane.png")
        );
    }

    #[test]
    fn missing_name_falls_back_to_mailbox() {
        let raw: RawProfile =
            serde_json::from_str(r#"{"email":"jane@example.com"}"#).unwrap();

        let profile = profile_from_raw(raw).unwrap();
        assert_eq!(profile.name, "jane");
        assert!(profile.picture.is_none());
    }

    #[test]
    fn missing_email_is_a_provider_error() {
        let raw: RawProfile = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();

        let result = profile_from_raw(raw);
        assert!(matches!(result, Err(AuthError::Provider(_))));
    }
}
