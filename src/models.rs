use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas (Mapped to Database) ---

/// ProjectCategory
///
/// The closed set of raw categories a project is stored under. Membership is
/// assigned at creation time and treated as immutable per item; the display
/// layer folds `Illustrations` and `MarketingAssets` into one bucket (see
/// `catalog::DisplayFilter`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "project_category", rename_all = "snake_case")]
pub enum ProjectCategory {
    #[default]
    BrandIdentity,
    Illustrations,
    Motion,
    MarketingAssets,
}

/// SectionType
///
/// The narrative beats a case study is broken into. Stored inside the
/// `sections` JSONB payload, not as a database type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    #[default]
    Problem,
    Strategy,
    System,
    Touchpoints,
    Impact,
}

/// ProjectSection
///
/// One structured block of a case study page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ProjectSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub heading: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub tag_color: Option<String>,
    pub gallery_images: Option<Vec<String>>,
}

/// Project
///
/// Represents a design case study from the `public.projects` table.
/// This is the primary data structure for the portfolio content.
///
/// JSONB columns (`sections`, `section_galleries`) are decoded straight into
/// typed Rust values via `#[sqlx(json)]` so the API surface never leaks raw
/// JSON blobs.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Project {
    pub id: Uuid,
    // URL identity of the case study page; unique.
    pub slug: String,
    pub title: String,
    pub tagline: Option<String>,
    pub company_name: Option<String>,
    pub company_logo_url: Option<String>,
    pub callout_heading: Option<String>,
    pub intro_heading: Option<String>,
    pub intro_description: Option<String>,
    pub category: ProjectCategory,
    pub thumbnail_url: String,
    pub hero_image_url: Option<String>,
    pub brief: Option<String>,
    pub industry: Option<String>,
    pub role_tools: Option<String>,
    // Display string ("2024"), not a numeric year.
    pub year: Option<String>,
    // Locked case studies render a teaser instead of the full page.
    pub case_study_locked: bool,
    pub tags: Vec<String>,
    #[sqlx(json)]
    pub sections: Vec<ProjectSection>,
    pub process_gallery_urls: Vec<String>,
    pub gallery_urls: Vec<String>,
    // Extra gallery images keyed by section type.
    #[sqlx(json)]
    #[schema(value_type = Object)]
    pub section_galleries: HashMap<String, Vec<String>>,
    pub results: Option<String>,
    pub markdown_content: Option<String>,
    // Externally assigned, stable display ordering.
    pub sort_order: i32,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// TabCaps
///
/// Per-tab display caps persisted inside `site_settings.projects_per_tab`.
/// Every tab must carry a value; `validate` bounds them to [MIN_TAB_CAP,
/// MAX_TAB_CAP] (see `catalog`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct TabCaps {
    pub all: u32,
    pub brand_identity: u32,
    pub motion: u32,
    pub illustrations_decks_flyers: u32,
}

impl Default for TabCaps {
    fn default() -> Self {
        Self {
            all: crate::catalog::DEFAULT_TAB_CAP,
            brand_identity: crate::catalog::DEFAULT_TAB_CAP,
            motion: crate::catalog::DEFAULT_TAB_CAP,
            illustrations_decks_flyers: crate::catalog::DEFAULT_TAB_CAP,
        }
    }
}

/// SiteSettings
///
/// The single theme/configuration row from `public.site_settings`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct SiteSettings {
    pub id: Uuid,
    pub primary_color: String,
    pub secondary_color: String,
    pub border_radius: String,
    pub font_family: String,
    #[sqlx(json)]
    pub projects_per_tab: TabCaps,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// SocialLink
///
/// One social profile entry rendered in the site header/footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

/// CtaLink
///
/// One call-to-action button on the profile section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CtaLink {
    pub label: String,
    pub href: String,
}

/// Profile
///
/// The site owner's biography row from `public.profile`. The table holds at
/// most one row; `Profile::fallback` supplies content until it is seeded.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub about: String,
    pub avatar_url: String,
    #[sqlx(json)]
    pub socials: Vec<SocialLink>,
    #[sqlx(json)]
    pub ctas: Vec<CtaLink>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Built-in profile served while the `profile` table is empty, so a fresh
    /// deployment renders a complete page before any admin editing.
    pub fn fallback() -> Self {
        Self {
            id: Uuid::nil(),
            name: "Studio Owner".to_string(),
            title: "Senior Brand and Motion Designer".to_string(),
            about: "Designer at the intersection of motion, branding, and growth. \
                    I turn brand guidelines into multimedia content that converts."
                .to_string(),
            avatar_url: "/avatar.jpg".to_string(),
            socials: vec![
                SocialLink {
                    label: "LinkedIn".to_string(),
                    href: "#".to_string(),
                    icon: "linkedin".to_string(),
                },
                SocialLink {
                    label: "X".to_string(),
                    href: "#".to_string(),
                    icon: "x".to_string(),
                },
                SocialLink {
                    label: "Instagram".to_string(),
                    href: "#".to_string(),
                    icon: "instagram".to_string(),
                },
                SocialLink {
                    label: "Behance".to_string(),
                    href: "#".to_string(),
                    icon: "behance".to_string(),
                },
            ],
            ctas: vec![
                CtaLink {
                    label: "Resume/CV".to_string(),
                    href: "#".to_string(),
                },
                CtaLink {
                    label: "Chat with me".to_string(),
                    href: "#".to_string(),
                },
                CtaLink {
                    label: "Book a call".to_string(),
                    href: "#".to_string(),
                },
                CtaLink {
                    label: "See me on Substack".to_string(),
                    href: "#".to_string(),
                },
            ],
            updated_at: DateTime::<Utc>::default(),
        }
    }
}

/// Review
///
/// A client review/testimonial row from `public.reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Review {
    pub id: Uuid,
    pub company_name: String,
    pub logo_url: Option<String>,
    pub quote: String,
    pub author: String,
    pub role: Option<String>,
    pub sort_order: i32,
}

/// SubstackArticle
///
/// A newsletter article link row from `public.substack_articles`. The `date`
/// is a display string ("Jan 2026"), not a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct SubstackArticle {
    pub id: Uuid,
    pub title: String,
    pub date: Option<String>,
    pub slug: Option<String>,
    pub sort_order: i32,
}

/// --- Request Payloads (Input Schemas) ---

/// CreateProjectRequest
///
/// Input payload for submitting a new case study (POST /admin/projects).
/// Optional narrative fields default to absent; collection fields to empty.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateProjectRequest {
    pub slug: String,
    pub title: String,
    pub tagline: Option<String>,
    pub company_name: Option<String>,
    pub company_logo_url: Option<String>,
    pub callout_heading: Option<String>,
    pub intro_heading: Option<String>,
    pub intro_description: Option<String>,
    pub category: ProjectCategory,
    pub thumbnail_url: String,
    pub hero_image_url: Option<String>,
    pub brief: Option<String>,
    pub industry: Option<String>,
    pub role_tools: Option<String>,
    pub year: Option<String>,
    #[serde(default)]
    pub case_study_locked: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sections: Vec<ProjectSection>,
    #[serde(default)]
    pub process_gallery_urls: Vec<String>,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub section_galleries: HashMap<String, Vec<String>>,
    pub results: Option<String>,
    pub markdown_content: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

/// UpdateProjectRequest
///
/// Partial update payload for modifying an existing project
/// (PUT /admin/projects/{id}).
///
/// Uses `Option<T>` for all fields and `#[serde(skip_serializing_if = "Option::is_none")]`
/// so only provided fields are included in the JSON payload; the repository
/// applies them with COALESCE.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout_heading: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_heading: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_tools: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study_locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<ProjectSection>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_gallery_urls: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_urls: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub section_galleries: Option<HashMap<String, Vec<String>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// UpsertProfileRequest
///
/// Input payload for the profile editor (POST /admin/profile). The table
/// holds a single row: an existing row is updated in place, otherwise one is
/// inserted.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub ctas: Vec<CtaLink>,
}

/// UpdateSettingsRequest
///
/// Partial update payload for the site theme (PUT /admin/settings).
/// `projects_per_tab`, when present, must carry all four tabs with each cap
/// inside the allowed bounds or the request is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_per_tab: Option<TabCaps>,
}

/// CreateReviewRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateReviewRequest {
    pub company_name: String,
    pub logo_url: Option<String>,
    pub quote: String,
    pub author: String,
    pub role: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

/// UpdateReviewRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateReviewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// CreateArticleRequest
///
/// When `sort_order` is absent the repository appends the article after the
/// current maximum.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    pub date: Option<String>,
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// UpdateArticleRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateArticleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// LoginRequest
///
/// Input payload for the admin login endpoint (POST /admin/login).
/// The password is compared against the configured credential and never
/// persisted or logged.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// ContactRequest
///
/// Input payload for the public contact form (POST /contact).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// UploadResponse
///
/// Output schema of the asset upload endpoint: the public URL under which
/// the stored object is served.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UploadResponse {
    pub url: String,
}
