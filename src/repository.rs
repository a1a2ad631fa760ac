use crate::models::{
    CreateArticleRequest, CreateProjectRequest, CreateReviewRequest, Profile, Project, Review,
    SiteSettings, SubstackArticle, UpdateArticleRequest, UpdateProjectRequest,
    UpdateReviewRequest, UpdateSettingsRequest, UpsertProfileRequest,
};
use async_trait::async_trait;
use sqlx::{PgPool, types::Json};
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations. This is the core
/// of the Repository Abstraction pattern, allowing the handlers to interact with
/// the data layer without knowing the specific implementation (Postgres, Stub, etc.).
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's asynchronous task
/// boundaries.
///
/// Read methods return `Vec`/`Option` rather than `Result`: a backend failure is
/// logged and degrades to "no data", while mutations surface `None`/`false` so the
/// handler can answer with a JSON error.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Projects (Case Studies) ---
    // Full ordered listing; display filtering/capping happens in `catalog`.
    async fn list_projects(&self) -> Vec<Project>;
    async fn get_project(&self, id: Uuid) -> Option<Project>;
    // Case-study pages are addressed by slug, not id.
    async fn get_project_by_slug(&self, slug: &str) -> Option<Project>;
    async fn create_project(&self, req: CreateProjectRequest) -> Option<Project>;
    // Partial update. Uses COALESCE so only provided fields change.
    async fn update_project(&self, id: Uuid, req: UpdateProjectRequest) -> Option<Project>;
    async fn delete_project(&self, id: Uuid) -> bool;

    // --- Profile (single row) ---
    async fn get_profile(&self) -> Option<Profile>;
    // Updates the existing row when present, inserts otherwise.
    async fn upsert_profile(&self, req: UpsertProfileRequest) -> Option<Profile>;

    // --- Site Settings (single row) ---
    async fn get_settings(&self) -> Option<SiteSettings>;
    async fn update_settings(&self, req: UpdateSettingsRequest) -> Option<SiteSettings>;

    // --- Reviews ---
    async fn list_reviews(&self) -> Vec<Review>;
    async fn create_review(&self, req: CreateReviewRequest) -> Option<Review>;
    async fn update_review(&self, id: Uuid, req: UpdateReviewRequest) -> Option<Review>;
    async fn delete_review(&self, id: Uuid) -> bool;

    // --- Newsletter Articles ---
    async fn list_articles(&self) -> Vec<SubstackArticle>;
    // Without an explicit sort_order the article is appended after the current max.
    async fn create_article(&self, req: CreateArticleRequest) -> Option<SubstackArticle>;
    async fn update_article(&self, id: Uuid, req: UpdateArticleRequest)
    -> Option<SubstackArticle>;
    async fn delete_article(&self, id: Uuid) -> bool;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by PostgreSQL.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Shared column list so every project query decodes the same row shape.
const PROJECT_COLUMNS: &str = "id, slug, title, tagline, company_name, company_logo_url, \
     callout_heading, intro_heading, intro_description, category, thumbnail_url, \
     hero_image_url, brief, industry, role_tools, year, case_study_locked, tags, \
     sections, process_gallery_urls, gallery_urls, section_galleries, results, \
     markdown_content, sort_order, created_at, updated_at";

const SETTINGS_COLUMNS: &str = "id, primary_color, secondary_color, border_radius, \
     font_family, projects_per_tab, updated_at";

const PROFILE_COLUMNS: &str = "id, name, title, about, avatar_url, socials, ctas, updated_at";

const REVIEW_COLUMNS: &str = "id, company_name, logo_url, quote, author, role, sort_order";

const ARTICLE_COLUMNS: &str = "id, title, date, slug, sort_order";

#[async_trait]
impl Repository for PostgresRepository {
    /// list_projects
    ///
    /// The canonical ordered listing. Ordering is the externally assigned
    /// `sort_order` with insertion time as the tiebreaker; every consumer
    /// (public tabs, admin table) relies on this order being stable.
    async fn list_projects(&self) -> Vec<Project> {
        let sql = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY sort_order ASC, created_at ASC"
        );
        match sqlx::query_as::<_, Project>(&sql).fetch_all(&self.pool).await {
            Ok(p) => p,
            Err(e) => {
                tracing::error!("list_projects error: {:?}", e);
                vec![]
            }
        }
    }

    async fn get_project(&self, id: Uuid) -> Option<Project> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_project error: {:?}", e);
                None
            })
    }

    async fn get_project_by_slug(&self, slug: &str) -> Option<Project> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_project_by_slug error: {:?}", e);
                None
            })
    }

    /// create_project
    ///
    /// Inserts a new case study and returns the stored row.
    async fn create_project(&self, req: CreateProjectRequest) -> Option<Project> {
        let sql = format!(
            "INSERT INTO projects (id, slug, title, tagline, company_name, company_logo_url, \
                 callout_heading, intro_heading, intro_description, category, thumbnail_url, \
                 hero_image_url, brief, industry, role_tools, year, case_study_locked, tags, \
                 sections, process_gallery_urls, gallery_urls, section_galleries, results, \
                 markdown_content, sort_order, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                 $17, $18, $19, $20, $21, $22, $23, $24, $25, NOW(), NOW()) \
             RETURNING {PROJECT_COLUMNS}"
        );
        let result = sqlx::query_as::<_, Project>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.slug)
            .bind(req.title)
            .bind(req.tagline)
            .bind(req.company_name)
            .bind(req.company_logo_url)
            .bind(req.callout_heading)
            .bind(req.intro_heading)
            .bind(req.intro_description)
            .bind(req.category)
            .bind(req.thumbnail_url)
            .bind(req.hero_image_url)
            .bind(req.brief)
            .bind(req.industry)
            .bind(req.role_tools)
            .bind(req.year)
            .bind(req.case_study_locked)
            .bind(req.tags)
            .bind(Json(req.sections))
            .bind(req.process_gallery_urls)
            .bind(req.gallery_urls)
            .bind(Json(req.section_galleries))
            .bind(req.results)
            .bind(req.markdown_content)
            .bind(req.sort_order)
            .fetch_one(&self.pool)
            .await;
        match result {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::error!("create_project error: {:?}", e);
                None
            }
        }
    }

    /// update_project
    ///
    /// Partial update using the PostgreSQL `COALESCE` function to efficiently
    /// handle `Option<T>` fields, only updating a column if the corresponding
    /// field in `req` is `Some`.
    async fn update_project(&self, id: Uuid, req: UpdateProjectRequest) -> Option<Project> {
        let sql = format!(
            "UPDATE projects \
             SET slug = COALESCE($2, slug), \
                 title = COALESCE($3, title), \
                 tagline = COALESCE($4, tagline), \
                 company_name = COALESCE($5, company_name), \
                 company_logo_url = COALESCE($6, company_logo_url), \
                 callout_heading = COALESCE($7, callout_heading), \
                 intro_heading = COALESCE($8, intro_heading), \
                 intro_description = COALESCE($9, intro_description), \
                 category = COALESCE($10, category), \
                 thumbnail_url = COALESCE($11, thumbnail_url), \
                 hero_image_url = COALESCE($12, hero_image_url), \
                 brief = COALESCE($13, brief), \
                 industry = COALESCE($14, industry), \
                 role_tools = COALESCE($15, role_tools), \
                 year = COALESCE($16, year), \
                 case_study_locked = COALESCE($17, case_study_locked), \
                 tags = COALESCE($18, tags), \
                 sections = COALESCE($19, sections), \
                 process_gallery_urls = COALESCE($20, process_gallery_urls), \
                 gallery_urls = COALESCE($21, gallery_urls), \
                 section_galleries = COALESCE($22, section_galleries), \
                 results = COALESCE($23, results), \
                 markdown_content = COALESCE($24, markdown_content), \
                 sort_order = COALESCE($25, sort_order), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .bind(req.slug)
            .bind(req.title)
            .bind(req.tagline)
            .bind(req.company_name)
            .bind(req.company_logo_url)
            .bind(req.callout_heading)
            .bind(req.intro_heading)
            .bind(req.intro_description)
            .bind(req.category)
            .bind(req.thumbnail_url)
            .bind(req.hero_image_url)
            .bind(req.brief)
            .bind(req.industry)
            .bind(req.role_tools)
            .bind(req.year)
            .bind(req.case_study_locked)
            .bind(req.tags)
            .bind(req.sections.map(Json))
            .bind(req.process_gallery_urls)
            .bind(req.gallery_urls)
            .bind(req.section_galleries.map(Json))
            .bind(req.results)
            .bind(req.markdown_content)
            .bind(req.sort_order)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("update_project error: {:?}", e);
                None
            })
    }

    async fn delete_project(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_project error: {:?}", e);
                false
            }
        }
    }

    // --- PROFILE ---

    async fn get_profile(&self) -> Option<Profile> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profile LIMIT 1");
        sqlx::query_as::<_, Profile>(&sql)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_profile error: {:?}", e);
                None
            })
    }

    /// upsert_profile
    ///
    /// The profile table holds at most one row. An existing row is updated in
    /// place; otherwise a fresh row is inserted.
    async fn upsert_profile(&self, req: UpsertProfileRequest) -> Option<Profile> {
        let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM profile LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("upsert_profile lookup error: {:?}", e);
                None
            });

        let result = match existing {
            Some(id) => {
                let sql = format!(
                    "UPDATE profile \
                     SET name = $2, title = $3, about = $4, avatar_url = $5, \
                         socials = $6, ctas = $7, updated_at = NOW() \
                     WHERE id = $1 \
                     RETURNING {PROFILE_COLUMNS}"
                );
                sqlx::query_as::<_, Profile>(&sql)
                    .bind(id)
                    .bind(req.name)
                    .bind(req.title)
                    .bind(req.about)
                    .bind(req.avatar_url)
                    .bind(Json(req.socials))
                    .bind(Json(req.ctas))
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "INSERT INTO profile (id, name, title, about, avatar_url, socials, ctas, updated_at) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, NOW()) \
                     RETURNING {PROFILE_COLUMNS}"
                );
                sqlx::query_as::<_, Profile>(&sql)
                    .bind(Uuid::new_v4())
                    .bind(req.name)
                    .bind(req.title)
                    .bind(req.about)
                    .bind(req.avatar_url)
                    .bind(Json(req.socials))
                    .bind(Json(req.ctas))
                    .fetch_one(&self.pool)
                    .await
            }
        };

        match result {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::error!("upsert_profile error: {:?}", e);
                None
            }
        }
    }

    // --- SITE SETTINGS ---

    async fn get_settings(&self) -> Option<SiteSettings> {
        let sql = format!("SELECT {SETTINGS_COLUMNS} FROM site_settings LIMIT 1");
        sqlx::query_as::<_, SiteSettings>(&sql)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_settings error: {:?}", e);
                None
            })
    }

    /// update_settings
    ///
    /// Partial update of the single settings row. Returns `None` when the row
    /// has not been seeded yet.
    async fn update_settings(&self, req: UpdateSettingsRequest) -> Option<SiteSettings> {
        let sql = format!(
            "UPDATE site_settings \
             SET primary_color = COALESCE($1, primary_color), \
                 secondary_color = COALESCE($2, secondary_color), \
                 border_radius = COALESCE($3, border_radius), \
                 font_family = COALESCE($4, font_family), \
                 projects_per_tab = COALESCE($5, projects_per_tab), \
                 updated_at = NOW() \
             WHERE id = (SELECT id FROM site_settings LIMIT 1) \
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&sql)
            .bind(req.primary_color)
            .bind(req.secondary_color)
            .bind(req.border_radius)
            .bind(req.font_family)
            .bind(req.projects_per_tab.map(Json))
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("update_settings error: {:?}", e);
                None
            })
    }

    // --- REVIEWS ---

    async fn list_reviews(&self) -> Vec<Review> {
        let sql = format!("SELECT {REVIEW_COLUMNS} FROM reviews ORDER BY sort_order ASC");
        match sqlx::query_as::<_, Review>(&sql).fetch_all(&self.pool).await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!("list_reviews error: {:?}", e);
                vec![]
            }
        }
    }

    async fn create_review(&self, req: CreateReviewRequest) -> Option<Review> {
        let sql = format!(
            "INSERT INTO reviews (id, company_name, logo_url, quote, author, role, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {REVIEW_COLUMNS}"
        );
        let result = sqlx::query_as::<_, Review>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.company_name)
            .bind(req.logo_url)
            .bind(req.quote)
            .bind(req.author)
            .bind(req.role)
            .bind(req.sort_order)
            .fetch_one(&self.pool)
            .await;
        match result {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::error!("create_review error: {:?}", e);
                None
            }
        }
    }

    async fn update_review(&self, id: Uuid, req: UpdateReviewRequest) -> Option<Review> {
        let sql = format!(
            "UPDATE reviews \
             SET company_name = COALESCE($2, company_name), \
                 logo_url = COALESCE($3, logo_url), \
                 quote = COALESCE($4, quote), \
                 author = COALESCE($5, author), \
                 role = COALESCE($6, role), \
                 sort_order = COALESCE($7, sort_order) \
             WHERE id = $1 \
             RETURNING {REVIEW_COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&sql)
            .bind(id)
            .bind(req.company_name)
            .bind(req.logo_url)
            .bind(req.quote)
            .bind(req.author)
            .bind(req.role)
            .bind(req.sort_order)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("update_review error: {:?}", e);
                None
            })
    }

    async fn delete_review(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_review error: {:?}", e);
                false
            }
        }
    }

    // --- NEWSLETTER ARTICLES ---

    async fn list_articles(&self) -> Vec<SubstackArticle> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM substack_articles ORDER BY sort_order ASC");
        match sqlx::query_as::<_, SubstackArticle>(&sql)
            .fetch_all(&self.pool)
            .await
        {
            Ok(a) => a,
            Err(e) => {
                tracing::error!("list_articles error: {:?}", e);
                vec![]
            }
        }
    }

    /// create_article
    ///
    /// When the payload carries no `sort_order`, the article is appended after
    /// the current maximum so newly added links land at the end of the list.
    async fn create_article(&self, req: CreateArticleRequest) -> Option<SubstackArticle> {
        let sort_order = match req.sort_order {
            Some(v) => v,
            None => sqlx::query_scalar::<_, i32>(
                "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM substack_articles",
            )
            .fetch_one(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("create_article sort lookup error: {:?}", e);
                0
            }),
        };

        let sql = format!(
            "INSERT INTO substack_articles (id, title, date, slug, sort_order) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ARTICLE_COLUMNS}"
        );
        let result = sqlx::query_as::<_, SubstackArticle>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.title)
            .bind(req.date)
            .bind(req.slug)
            .bind(sort_order)
            .fetch_one(&self.pool)
            .await;
        match result {
            Ok(a) => Some(a),
            Err(e) => {
                tracing::error!("create_article error: {:?}", e);
                None
            }
        }
    }

    async fn update_article(
        &self,
        id: Uuid,
        req: UpdateArticleRequest,
    ) -> Option<SubstackArticle> {
        let sql = format!(
            "UPDATE substack_articles \
             SET title = COALESCE($2, title), \
                 date = COALESCE($3, date), \
                 slug = COALESCE($4, slug), \
                 sort_order = COALESCE($5, sort_order) \
             WHERE id = $1 \
             RETURNING {ARTICLE_COLUMNS}"
        );
        sqlx::query_as::<_, SubstackArticle>(&sql)
            .bind(id)
            .bind(req.title)
            .bind(req.date)
            .bind(req.slug)
            .bind(req.sort_order)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("update_article error: {:?}", e);
                None
            })
    }

    async fn delete_article(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM substack_articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_article error: {:?}", e);
                false
            }
        }
    }
}
