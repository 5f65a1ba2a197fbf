use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entity::{role, user};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::access::has_role;
use crate::utils::{jwt, queries};

pub const SESSION_COOKIE: &str = "session";

/// The user a request is made on behalf of, resolved from the session cookie.
#[derive(Clone, Debug)]
pub struct Identity {
    pub user_id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    /// Role name, `None` when the user has no role assigned.
    pub role: Option<String>,
}

impl Identity {
    pub fn new(user: user::Model, role: Option<String>) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        has_role(Some(self), role::ADMIN_ROLE)
    }
}

/// Per-request identity context. Anonymous requests carry `identity: None`.
///
/// Resolved once per request and cached in the request extensions, so
/// `AuthUser`/`AdminUser` and a handler's own `Session` share one lookup.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub identity: Option<Identity>,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(session.clone());
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let identity = match jar.get(SESSION_COOKIE) {
            Some(cookie) => {
                resolve_identity(&state.db, cookie.value(), &state.config.auth.session_secret)
                    .await?
            }
            None => None,
        };

        let session = Session { identity };
        parts.extensions.insert(session.clone());
        Ok(session)
    }
}

/// Turn a session token into an identity. Bad tokens and deleted users are anonymous.
async fn resolve_identity<C: ConnectionTrait>(
    db: &C,
    token: &str,
    secret: &str,
) -> Result<Option<Identity>, AppError> {
    let claims = match jwt::verify(token, secret) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Ignoring invalid session token: {}", e);
            return Ok(None);
        }
    };

    let Some(user) = user::Entity::find_by_id(claims.uid).one(db).await? else {
        return Ok(None);
    };
    let role = queries::role_name(db, user.role_id).await?;

    Ok(Some(Identity::new(user, role)))
}

/// Any authenticated user. Anonymous requests are redirected to `/login`.
pub struct AuthUser(pub Identity);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        session
            .identity
            .map(AuthUser)
            .ok_or(AppError::Unauthenticated)
    }
}

/// An authenticated user holding the admin role.
pub struct AdminUser(pub Identity);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(identity) = Session::from_request_parts(parts, state).await?.identity else {
            tracing::info!("Rejected anonymous admin console access");
            return Err(AppError::AdminRequired);
        };
        if !has_role(Some(&identity), role::ADMIN_ROLE) {
            tracing::info!(user_id = identity.user_id, "Rejected admin console access");
            return Err(AppError::AdminRequired);
        }
        Ok(AdminUser(identity))
    }
}

/// Cookie carrying a freshly signed session token.
pub fn session_cookie(token: String, ttl_hours: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(ttl_hours))
        .build()
}

/// Drop the session cookie, returning the client to the anonymous state.
pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
