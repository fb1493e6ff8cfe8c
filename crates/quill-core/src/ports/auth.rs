//! Identity provider port.

use async_trait::async_trait;

/// Profile attributes the identity provider supplies at login.
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

/// Resolves a provider-issued access token to the holder's profile.
///
/// The authorization-code dance happens outside this service; by the time
/// a token reaches us it is opaque and only the provider can judge it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("identity provider rejected the token")]
    Rejected,

    #[error("identity provider error: {0}")]
    Provider(String),

    #[error("missing or invalid session")]
    MissingSession,

    #[error("insufficient role")]
    InsufficientRole,
}
