use crate::{
    AppState,
    catalog::{self, DisplayFilter, GalleryLayout},
    error::ApiError,
    gate,
    mailer::MailError,
    models::{
        ContactRequest, CreateArticleRequest, CreateProjectRequest, CreateReviewRequest,
        LoginRequest, Profile, Project, Review, SiteSettings, SubstackArticle,
        UpdateArticleRequest, UpdateProjectRequest, UpdateReviewRequest, UpdateSettingsRequest,
        UploadResponse, UpsertProfileRequest,
    },
    theme,
};
use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Filter Structs ---

/// ProjectListQuery
///
/// Defines the accepted query parameters for the public project listing endpoint
/// (GET /projects). Used by Axum's Query extractor to safely bind HTTP query
/// parameters for tab filtering and capping.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ProjectListQuery {
    /// Optional display tab to filter by; omitted means the "all" tab.
    pub category: Option<DisplayFilter>,
    /// When true, the listing is truncated to the configured per-tab cap.
    pub capped: Option<bool>,
}

/// TabCounts
///
/// Output schema of the badge-count endpoint: one number per display tab,
/// each already capped to the configured maximum.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TabCounts {
    pub all: usize,
    pub brand_identity: usize,
    pub motion: usize,
    pub illustrations_decks_flyers: usize,
}

/// CaseStudy
///
/// Output schema of the case-study detail endpoint: the project row plus the
/// computed display mode for its gallery images.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CaseStudy {
    pub project: Project,
    pub gallery_layout: GalleryLayout,
}

// --- Public Handlers ---

/// get_profile
///
/// [Public Route] The site owner's profile. Falls back to the built-in
/// profile while the table is empty so a fresh deployment still renders.
#[utoipa::path(
    get,
    path = "/profile",
    responses((status = 200, description = "Owner profile", body = Profile))
)]
pub async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    let profile = state
        .repo
        .get_profile()
        .await
        .unwrap_or_else(Profile::fallback);
    Json(profile)
}

/// get_projects
///
/// [Public Route] Lists projects in their stable display order, optionally
/// restricted to one display tab and truncated to the configured per-tab cap.
///
/// Filtering happens in process (`catalog`), not in SQL: the full catalog is
/// small and the merge rule for the combined illustrations bucket lives in one
/// place this way.
#[utoipa::path(
    get,
    path = "/projects",
    params(ProjectListQuery),
    responses((status = 200, description = "Ordered project listing", body = [Project]))
)]
pub async fn get_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Json<Vec<Project>> {
    let projects = state.repo.list_projects().await;
    let filter = query.category.unwrap_or_default();

    if query.capped.unwrap_or(false) {
        let caps = state
            .repo
            .get_settings()
            .await
            .map(|s| s.projects_per_tab)
            .unwrap_or_default();
        let cap = catalog::cap_for(&caps, filter);
        Json(catalog::visible_projects(&projects, filter, cap))
    } else {
        Json(catalog::filter_projects(&projects, filter))
    }
}

/// get_project_counts
///
/// [Public Route] Badge numbers for the filter tabs. Each value is
/// `min(configured cap, actual count)` for that tab.
#[utoipa::path(
    get,
    path = "/projects/counts",
    responses((status = 200, description = "Per-tab badge counts", body = TabCounts))
)]
pub async fn get_project_counts(State(state): State<AppState>) -> Json<TabCounts> {
    let projects = state.repo.list_projects().await;
    let caps = state
        .repo
        .get_settings()
        .await
        .map(|s| s.projects_per_tab)
        .unwrap_or_default();

    let badge = |filter: DisplayFilter| {
        catalog::badge_count(
            catalog::cap_for(&caps, filter),
            catalog::filter_count(&projects, filter),
        )
    };

    Json(TabCounts {
        all: badge(DisplayFilter::All),
        brand_identity: badge(DisplayFilter::BrandIdentity),
        motion: badge(DisplayFilter::Motion),
        illustrations_decks_flyers: badge(DisplayFilter::IllustrationsDecksFlyers),
    })
}

/// get_case_study
///
/// [Public Route] Retrieves one case study by slug, enriched with the
/// computed layout for its gallery images.
#[utoipa::path(
    get,
    path = "/projects/{slug}",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Case study", body = CaseStudy),
        (status = 404, description = "Unknown slug")
    )
)]
pub async fn get_case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CaseStudy>, ApiError> {
    match state.repo.get_project_by_slug(&slug).await {
        Some(project) => {
            let gallery_layout = catalog::gallery_layout(project.gallery_urls.len());
            Ok(Json(CaseStudy {
                project,
                gallery_layout,
            }))
        }
        None => Err(ApiError::NotFound),
    }
}

/// get_reviews
///
/// [Public Route] Client reviews in display order.
#[utoipa::path(
    get,
    path = "/reviews",
    responses((status = 200, description = "Reviews", body = [Review]))
)]
pub async fn get_reviews(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.repo.list_reviews().await)
}

/// get_articles
///
/// [Public Route] Newsletter article links in display order.
#[utoipa::path(
    get,
    path = "/articles",
    responses((status = 200, description = "Articles", body = [SubstackArticle]))
)]
pub async fn get_articles(State(state): State<AppState>) -> Json<Vec<SubstackArticle>> {
    Json(state.repo.list_articles().await)
}

/// get_settings
///
/// [Public Route] The raw site settings row (theme values + per-tab caps).
/// 404 until the row is seeded; the CSS endpoint below has its own fallback.
#[utoipa::path(
    get,
    path = "/settings",
    responses(
        (status = 200, description = "Site settings", body = SiteSettings),
        (status = 404, description = "Settings not seeded")
    )
)]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SiteSettings>, ApiError> {
    match state.repo.get_settings().await {
        Some(settings) => Ok(Json(settings)),
        None => Err(ApiError::NotFound),
    }
}

/// get_theme_css
///
/// [Public Route] The resolved theme as a CSS custom property sheet,
/// including the computed foreground contrast colors. Served as `text/css`
/// so the frontend can link it directly.
#[utoipa::path(
    get,
    path = "/theme.css",
    responses((status = 200, description = "Theme stylesheet", body = String, content_type = "text/css"))
)]
pub async fn get_theme_css(State(state): State<AppState>) -> impl IntoResponse {
    let settings = state.repo.get_settings().await;
    let css = theme::render_css(settings.as_ref());
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css)
}

/// submit_contact
///
/// [Public Route] Relays a contact-form message to the site owner via the
/// transactional email API. All three fields are required after trimming.
#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message relayed"),
        (status = 400, description = "Missing fields"),
        (status = 502, description = "Email relay failed")
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    let message = payload.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ApiError::BadRequest(
            "Name, email, and message are required".to_string(),
        ));
    }

    match state.mailer.send_contact(name, email, message).await {
        Ok(()) => Ok(Json(serde_json::json!({ "success": true }))),
        Err(MailError::NotConfigured) => {
            Err(ApiError::NotConfigured("Contact form is not configured"))
        }
        Err(MailError::Upstream(e)) => {
            tracing::error!("Contact relay failed: {}", e);
            Err(ApiError::RelayFailed)
        }
    }
}

// --- Admin Handlers ---

/// admin_login
///
/// [Admin Route, gate-exempt] Exchanges the admin email/password for the
/// session cookie. The email comparison is trimmed and case-insensitive; the
/// password must match exactly. 500 when the credentials are not configured.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session cookie set"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Admin not configured")
    )
)]
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(email), Some(password), Some(secret)) = (
        state.config.admin_email.as_deref(),
        state.config.admin_password.as_deref(),
        state.config.admin_secret.as_deref(),
    ) else {
        return Err(ApiError::NotConfigured("Admin not configured"));
    };

    if payload.email.trim().to_lowercase() != email.to_lowercase()
        || payload.password != password
    {
        return Err(ApiError::InvalidCredentials);
    }

    let jar = jar.add(gate::session_cookie(secret, &state.config.env));
    Ok((jar, Json(serde_json::json!({ "success": true }))))
}

/// upsert_profile
///
/// [Admin Route] Saves the single profile row (update when present, insert
/// otherwise).
#[utoipa::path(
    post,
    path = "/admin/profile",
    request_body = UpsertProfileRequest,
    responses((status = 200, description = "Saved", body = Profile))
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    Json(payload): Json<UpsertProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    match state.repo.upsert_profile(payload).await {
        Some(profile) => Ok(Json(profile)),
        None => Err(ApiError::Internal),
    }
}

/// get_admin_projects
///
/// [Admin Route] The full project table for the admin editor. Same rows and
/// order as the public listing (the portfolio has no hidden tier), without
/// any tab filtering.
#[utoipa::path(
    get,
    path = "/admin/projects",
    responses((status = 200, description = "All projects", body = [Project]))
)]
pub async fn get_admin_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.repo.list_projects().await)
}

/// create_project
///
/// [Admin Route] Inserts a new case study.
#[utoipa::path(
    post,
    path = "/admin/projects",
    request_body = CreateProjectRequest,
    responses((status = 200, description = "Created", body = Project))
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    match state.repo.create_project(payload).await {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::Internal),
    }
}

/// update_project
///
/// [Admin Route] Partial update of a case study; absent fields keep their
/// stored values.
#[utoipa::path(
    put,
    path = "/admin/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Updated", body = Project),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    match state.repo.update_project(id, payload).await {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::NotFound),
    }
}

/// delete_project
///
/// [Admin Route] Removes a case study.
#[utoipa::path(
    delete,
    path = "/admin/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.repo.delete_project(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// update_settings
///
/// [Admin Route] Partial update of the theme settings. A submitted
/// `projects_per_tab` must carry every tab with caps inside the allowed
/// bounds, otherwise the request is rejected.
#[utoipa::path(
    put,
    path = "/admin/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Updated", body = SiteSettings),
        (status = 400, description = "Cap out of bounds"),
        (status = 404, description = "Settings not seeded")
    )
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SiteSettings>, ApiError> {
    if let Some(caps) = &payload.projects_per_tab {
        if !catalog::caps_in_bounds(caps) {
            return Err(ApiError::BadRequest(format!(
                "projects_per_tab values must be between {} and {}",
                catalog::MIN_TAB_CAP,
                catalog::MAX_TAB_CAP
            )));
        }
    }

    match state.repo.update_settings(payload).await {
        Some(settings) => Ok(Json(settings)),
        None => Err(ApiError::NotFound),
    }
}

/// create_review
///
/// [Admin Route] Adds a client review.
#[utoipa::path(
    post,
    path = "/admin/reviews",
    request_body = CreateReviewRequest,
    responses((status = 200, description = "Created", body = Review))
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<Json<Review>, ApiError> {
    match state.repo.create_review(payload).await {
        Some(review) => Ok(Json(review)),
        None => Err(ApiError::Internal),
    }
}

/// update_review
#[utoipa::path(
    put,
    path = "/admin/reviews/{id}",
    params(("id" = Uuid, Path, description = "Review ID")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Updated", body = Review),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReviewRequest>,
) -> Result<Json<Review>, ApiError> {
    match state.repo.update_review(id, payload).await {
        Some(review) => Ok(Json(review)),
        None => Err(ApiError::NotFound),
    }
}

/// delete_review
#[utoipa::path(
    delete,
    path = "/admin/reviews/{id}",
    params(("id" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.repo.delete_review(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// create_article
///
/// [Admin Route] Adds a newsletter article link. Without an explicit
/// `sort_order` the article lands at the end of the list.
#[utoipa::path(
    post,
    path = "/admin/articles",
    request_body = CreateArticleRequest,
    responses((status = 200, description = "Created", body = SubstackArticle))
)]
pub async fn create_article(
    State(state): State<AppState>,
    Json(payload): Json<CreateArticleRequest>,
) -> Result<Json<SubstackArticle>, ApiError> {
    match state.repo.create_article(payload).await {
        Some(article) => Ok(Json(article)),
        None => Err(ApiError::Internal),
    }
}

/// update_article
#[utoipa::path(
    put,
    path = "/admin/articles/{id}",
    params(("id" = Uuid, Path, description = "Article ID")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated", body = SubstackArticle),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateArticleRequest>,
) -> Result<Json<SubstackArticle>, ApiError> {
    match state.repo.update_article(id, payload).await {
        Some(article) => Ok(Json(article)),
        None => Err(ApiError::NotFound),
    }
}

/// delete_article
#[utoipa::path(
    delete,
    path = "/admin/articles/{id}",
    params(("id" = Uuid, Path, description = "Article ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.repo.delete_article(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// upload_asset
///
/// [Admin Route] Accepts a multipart form (`file` plus optional `name`),
/// stores the object under a stable key derived from the name and the file
/// extension, and returns the public URL. Re-using a name overwrites the
/// stored asset.
#[utoipa::path(
    post,
    path = "/admin/upload",
    responses(
        (status = 200, description = "Stored", body = UploadResponse),
        (status = 400, description = "No file provided")
    )
)]
pub async fn upload_asset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Malformed multipart payload".to_string()))?
    {
        let field_name = field.name().map(|n| n.to_string());
        match field_name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::BadRequest("Malformed multipart payload".to_string()))?
                    .to_vec();
                file = Some((filename, content_type, bytes));
            }
            Some("name") => {
                name = field.text().await.ok();
            }
            _ => {}
        }
    }

    let Some((filename, content_type, bytes)) = file else {
        return Err(ApiError::BadRequest("No file provided".to_string()));
    };

    let extension = std::path::Path::new(&filename)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("jpg");
    let name = name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "file".to_string());
    let object_key = format!("project-assets/{}.{}", name, extension);

    match state
        .storage
        .upload_public(&object_key, &content_type, bytes)
        .await
    {
        Ok(url) => Ok(Json(UploadResponse { url })),
        Err(e) => {
            // Log the underlying storage error for debugging but return a generic internal error.
            tracing::error!("Storage error: {}", e);
            Err(ApiError::Internal)
        }
    }
}
