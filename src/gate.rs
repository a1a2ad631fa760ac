use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::{AppState, config::Env};

/// Access gate for the admin area.
///
/// Every request passes through `admin_gate`; non-admin paths and the login
/// page itself go straight through, everything else under `/admin` must carry
/// the shared secret in the `admin_session` cookie or the `secret` query
/// parameter. A query-parameter match also plants the cookie so subsequent
/// requests authenticate silently. Failure is always a redirect to the login
/// page, never an error body.

pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";
pub const SESSION_COOKIE: &str = "admin_session";

// Fixed session lifetime; there is no refresh or rotation mechanism.
const SESSION_MAX_AGE: time::Duration = time::Duration::days(7);

/// GateDecision
///
/// Outcome of evaluating one request against the gate. `PassAndSetCookie`
/// means the request authenticated via the query parameter and the session
/// cookie should be planted on the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    PassAndSetCookie,
    RedirectToLogin,
}

fn is_admin_path(path: &str) -> bool {
    // Prefix match must not catch sibling paths like "/administrate".
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

/// evaluate
///
/// The single-step allow/redirect decision. Pure function over the request
/// path, the configured secret, and the two credential carriers.
///
/// An unset (or empty) configured secret fails closed: every admin path
/// except the login page redirects.
pub fn evaluate(
    path: &str,
    configured_secret: Option<&str>,
    cookie_value: Option<&str>,
    query_secret: Option<&str>,
) -> GateDecision {
    if !is_admin_path(path) {
        return GateDecision::Pass;
    }
    if path == LOGIN_PATH {
        return GateDecision::Pass;
    }

    let Some(secret) = configured_secret.filter(|s| !s.is_empty()) else {
        return GateDecision::RedirectToLogin;
    };

    if cookie_value == Some(secret) {
        return GateDecision::Pass;
    }
    if query_secret == Some(secret) {
        return GateDecision::PassAndSetCookie;
    }

    GateDecision::RedirectToLogin
}

/// session_cookie
///
/// Builds the `admin_session` cookie carrying the shared secret. HttpOnly,
/// SameSite=Lax, site-wide, Secure outside local development.
pub fn session_cookie(secret: &str, env: &Env) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, secret.to_owned()))
        .http_only(true)
        .secure(*env == Env::Production)
        .same_site(SameSite::Lax)
        .max_age(SESSION_MAX_AGE)
        .path("/")
        .build()
}

/// GateParams
///
/// The only query parameter the gate inspects; anything else in the query
/// string is ignored.
#[derive(Debug, Deserialize)]
pub struct GateParams {
    pub secret: Option<String>,
}

/// admin_gate
///
/// Middleware wrapper around `evaluate`. Applied router-wide so the decision
/// table covers non-admin paths too (they pass unconditionally).
pub async fn admin_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<GateParams>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    let decision = evaluate(
        &path,
        state.config.admin_secret.as_deref(),
        jar.get(SESSION_COOKIE).map(|c| c.value()),
        params.secret.as_deref(),
    );

    match decision {
        GateDecision::Pass => next.run(request).await,
        GateDecision::PassAndSetCookie => {
            let response = next.run(request).await;
            // The decision guarantees a configured secret here.
            match state.config.admin_secret.as_deref() {
                Some(secret) => {
                    let jar = jar.add(session_cookie(secret, &state.config.env));
                    (jar, response).into_response()
                }
                None => response,
            }
        }
        GateDecision::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
    }
}
