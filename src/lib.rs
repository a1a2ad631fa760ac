use axum::{Router, extract::FromRef, http::HeaderName, middleware};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod catalog;
pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod mailer;
pub mod models;
pub mod repository;
pub mod storage;
pub mod theme;

// Module for routing segregation (Public, Admin).
pub mod routes;
use routes::{admin, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;
pub use mailer::{BrevoMailer, DisabledMailer, MailerState, MockMailer};
pub use repository::{PostgresRepository, RepositoryState};
pub use storage::{MockStorageService, S3StorageClient, StorageState};

/// ApiDoc
///
/// This struct auto-generates the OpenAPI documentation (Swagger JSON) for the application.
/// It aggregates all API paths and data schemas that have been decorated with
/// the `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros.
/// The resulting JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    // List all public handler functions here for documentation generation.
    paths(
        handlers::get_profile, handlers::get_projects, handlers::get_project_counts,
        handlers::get_case_study, handlers::get_reviews, handlers::get_articles,
        handlers::get_settings, handlers::get_theme_css, handlers::submit_contact,
        handlers::admin_login, handlers::upsert_profile, handlers::get_admin_projects,
        handlers::create_project, handlers::update_project, handlers::delete_project,
        handlers::update_settings, handlers::create_review, handlers::update_review,
        handlers::delete_review, handlers::create_article, handlers::update_article,
        handlers::delete_article, handlers::upload_asset
    ),
    // List all models (schemas) used in the request/response bodies.
    components(
        schemas(
            models::Project, models::ProjectSection, models::ProjectCategory,
            models::SectionType, models::SiteSettings, models::TabCaps, models::Profile,
            models::SocialLink, models::CtaLink, models::Review, models::SubstackArticle,
            models::CreateProjectRequest, models::UpdateProjectRequest,
            models::UpsertProfileRequest, models::UpdateSettingsRequest,
            models::CreateReviewRequest, models::UpdateReviewRequest,
            models::CreateArticleRequest, models::UpdateArticleRequest,
            models::LoginRequest, models::ContactRequest, models::UploadResponse,
            catalog::DisplayFilter, catalog::GalleryLayout,
            handlers::TabCounts, handlers::CaseStudy,
        )
    ),
    tags(
        (name = "folio-portal", description = "Portfolio Content API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Implements the **Unified State Pattern**. This is the single, thread-safe, and immutable
/// container holding all essential application services and configuration.
/// The application state is shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository Layer: Abstracts database access via the PgPool connection.
    pub repo: RepositoryState,
    /// Storage Layer: Abstracts S3/MinIO access for asset uploads.
    pub storage: StorageState,
    /// Mailer Layer: Abstracts the transactional email relay for the contact form.
    pub mailer: MailerState,
    /// Configuration: The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These implementations allow handlers to selectively pull components from the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for StorageState {
    fn from_ref(app_state: &AppState) -> StorageState {
        app_state.storage.clone()
    }
}

impl FromRef<AppState> for MailerState {
    fn from_ref(app_state: &AppState) -> MailerState {
        app_state.mailer.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and scoped middleware,
/// and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public Routes: read-only content plus the contact form.
        .merge(public::public_routes())
        // Admin Routes: content editing, nested under '/admin'.
        .nest("/admin", admin::admin_routes())
        // Access Gate: applied router-wide so the full decision table runs on
        // every request. Non-admin paths and the login page pass through; all
        // other admin paths require the shared secret (cookie or query
        // parameter) and redirect to the login page otherwise.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate::admin_gate,
        ))
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: Generates a unique UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: Wraps the entire request/response lifecycle in a tracing span.
                // Uses the `trace_span_logger` to include the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: Ensures the generated x-request-id header is
                // returned to the client and injected into subsequent service calls.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer (Applied last, allowing all traffic in/out after processing)
        .layer(cors)
}

/// trace_span_logger
///
/// Helper function used by `TraceLayer` to customize the tracing span creation.
/// It extracts the `x-request-id` header (if present) and includes it in the
/// structured logging metadata alongside the HTTP method and URI.
///
/// *Goal*: Ensure every log line for a single request is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    // The structured log format used by the tracing macros.
    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
