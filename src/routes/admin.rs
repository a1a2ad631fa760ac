use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Admin Router Module
///
/// Defines the content-editing routes, nested under `/admin` by
/// `create_router`. Access control is handled entirely by the shared-secret
/// gate middleware applied to the whole router: every path here except
/// `/admin/login` requires the `admin_session` cookie (or the `secret` query
/// parameter) to carry the configured secret. The handlers themselves perform
/// no further authorization — there is a single admin identity, not a role
/// system.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // POST /admin/login
        // Exchanges the configured email/password for the session cookie.
        // This is the only admin path the gate lets through unauthenticated.
        .route("/login", post(handlers::admin_login))
        // GET/POST /admin/profile
        // Read and save the single profile row (insert-or-update semantics).
        .route(
            "/profile",
            get(handlers::get_profile).post(handlers::upsert_profile),
        )
        // GET/POST /admin/projects
        // The full project table for the editor, and case-study creation.
        .route(
            "/projects",
            get(handlers::get_admin_projects).post(handlers::create_project),
        )
        // PUT/DELETE /admin/projects/{id}
        // Partial update (COALESCE semantics) and removal of one case study.
        .route(
            "/projects/{id}",
            put(handlers::update_project).delete(handlers::delete_project),
        )
        // GET/PUT /admin/settings
        // Theme values and per-tab caps. Submitted caps are bounds-checked
        // before they are persisted.
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        // GET/POST /admin/reviews + PUT/DELETE /admin/reviews/{id}
        .route(
            "/reviews",
            get(handlers::get_reviews).post(handlers::create_review),
        )
        .route(
            "/reviews/{id}",
            put(handlers::update_review).delete(handlers::delete_review),
        )
        // GET/POST /admin/articles + PUT/DELETE /admin/articles/{id}
        .route(
            "/articles",
            get(handlers::get_articles).post(handlers::create_article),
        )
        .route(
            "/articles/{id}",
            put(handlers::update_article).delete(handlers::delete_article),
        )
        // POST /admin/upload
        // Multipart asset upload, proxied into the storage bucket; responds
        // with the public URL of the stored object.
        .route("/upload", post(handlers::upload_asset))
}
