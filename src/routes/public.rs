use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any client.
/// These routes serve the read-only content of the portfolio site plus the
/// contact form. Everything mutable lives under `/admin`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load balancer checks.
        // Returns "ok" immediately to verify the service is running and responsive.
        .route("/health", get(|| async { "ok" }))
        // GET /profile
        // The site owner's biography, socials, and CTAs. Serves the built-in
        // fallback profile until the table is seeded.
        .route("/profile", get(handlers::get_profile))
        // GET /projects?category=...&capped=...
        // The ordered project listing, optionally filtered to one display tab
        // and truncated to the configured per-tab cap.
        .route("/projects", get(handlers::get_projects))
        // GET /projects/counts
        // Badge numbers for the filter tabs (min of cap and actual count).
        // Registered before the slug route; static segments win over captures.
        .route("/projects/counts", get(handlers::get_project_counts))
        // GET /projects/{slug}
        // One case study addressed by its URL slug, with the computed gallery
        // display mode.
        .route("/projects/{slug}", get(handlers::get_case_study))
        // GET /reviews
        // Client reviews in display order.
        .route("/reviews", get(handlers::get_reviews))
        // GET /articles
        // Newsletter article links in display order.
        .route("/articles", get(handlers::get_articles))
        // GET /settings
        // The raw site settings row (theme values + per-tab caps).
        .route("/settings", get(handlers::get_settings))
        // GET /theme.css
        // The resolved theme as CSS custom properties, with computed
        // foreground contrast. Linked directly from the frontend document head.
        .route("/theme.css", get(handlers::get_theme_css))
        // POST /contact
        // Relays a visitor message to the site owner via the transactional
        // email API. Validation and relay failures surface as JSON errors.
        .route("/contact", post(handlers::submit_contact))
}
