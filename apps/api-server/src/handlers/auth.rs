//! Login, logout and current-profile handlers.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, web};

use quill_core::domain::{Session, SessionUser};
use quill_shared::dto::{LoginRequest, ProfileResponse};

use crate::middleware::auth::{Identity, SESSION_COOKIE};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/login
///
/// Trades a provider access token for a server-side session: the token is
/// resolved to a profile, the user row is saved-or-updated, and the new
/// session id travels back in an HttpOnly cookie.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let profile = state.identity.fetch_profile(&body.access_token).await?;
    let user = state.auth.login(profile).await?;

    let session = Session::new(SessionUser::from(&user), user.role, state.session_ttl);
    let cookie = session_cookie(&session);
    state.sessions.insert(session).await?;

    tracing::info!(user_id = user.id, "user logged in");

    Ok(HttpResponse::Ok().cookie(cookie).json(ProfileResponse {
        name: user.name,
        email: user.email,
        picture: user.picture,
    }))
}

/// POST /api/auth/logout - drops the session and clears the cookie.
pub async fn logout(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    state.sessions.remove(identity.session_id).await?;

    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();

    Ok(HttpResponse::Ok().cookie(cookie).finish())
}

/// GET /api/auth/me - the logged-in user's profile.
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ProfileResponse {
        name: identity.user.name,
        email: identity.user.email,
        picture: identity.user.picture,
    }))
}

fn session_cookie(session: &Session) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session.id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}
