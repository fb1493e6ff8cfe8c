//! Session authentication extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use quill_core::domain::{Role, SessionUser};
use quill_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the session id.
pub static SESSION_COOKIE: &str = "session_id";

/// Authenticated user identity extractor.
///
/// Resolves the `session_id` cookie against the session store before the
/// handler runs; requests without a live session never reach handler logic.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub session_id: Uuid,
    pub user: SessionUser,
    pub role: Role,
}

impl Identity {
    /// Check that the session's role is `role` or higher.
    pub fn require_role(&self, role: Role) -> Result<(), AuthError> {
        if self.role >= role {
            Ok(())
        } else {
            Err(AuthError::InsufficientRole)
        }
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let cookie = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        Box::pin(async move {
            let state = match state {
                Some(state) => state,
                None => {
                    tracing::error!("AppState not found in app data");
                    return Err(AppError::Internal("server configuration error".to_string()));
                }
            };

            let raw = cookie.ok_or(AuthError::MissingSession)?;
            let session_id =
                Uuid::parse_str(&raw).map_err(|_| AuthError::MissingSession)?;

            // The store evicts expired sessions on load.
            let session = state
                .sessions
                .load(session_id)
                .await?
                .ok_or(AuthError::MissingSession)?;

            Ok(Identity {
                session_id,
                user: session.user,
                role: session.role,
            })
        })
    }
}
