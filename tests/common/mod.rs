// Shared fixtures for the integration suites; not every binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use folio_portal::{
    AppConfig, AppState, MockMailer, MockStorageService, create_router,
    mailer::MailerState,
    models::{
        CreateArticleRequest, CreateProjectRequest, CreateReviewRequest, Profile, Project,
        ProjectCategory, Review, SiteSettings, SubstackArticle, UpdateArticleRequest,
        UpdateProjectRequest, UpdateReviewRequest, UpdateSettingsRequest, UpsertProfileRequest,
    },
    repository::{Repository, RepositoryState},
    storage::StorageState,
};
use std::sync::Arc;
use uuid::Uuid;

/// StubRepository
///
/// In-process stand-in for the Postgres repository: reads serve the fixture
/// data it was constructed with, creates echo a row built from the request,
/// and updates/deletes report "no such row". Lets the handler suites exercise
/// routing, the gate, and response mapping without a database.
#[derive(Default)]
pub struct StubRepository {
    pub projects: Vec<Project>,
    pub profile: Option<Profile>,
    pub settings: Option<SiteSettings>,
    pub reviews: Vec<Review>,
    pub articles: Vec<SubstackArticle>,
}

#[async_trait]
impl Repository for StubRepository {
    async fn list_projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    async fn get_project(&self, id: Uuid) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    async fn get_project_by_slug(&self, slug: &str) -> Option<Project> {
        self.projects.iter().find(|p| p.slug == slug).cloned()
    }

    async fn create_project(&self, req: CreateProjectRequest) -> Option<Project> {
        Some(Project {
            id: Uuid::new_v4(),
            slug: req.slug,
            title: req.title,
            tagline: req.tagline,
            company_name: req.company_name,
            company_logo_url: req.company_logo_url,
            callout_heading: req.callout_heading,
            intro_heading: req.intro_heading,
            intro_description: req.intro_description,
            category: req.category,
            thumbnail_url: req.thumbnail_url,
            hero_image_url: req.hero_image_url,
            brief: req.brief,
            industry: req.industry,
            role_tools: req.role_tools,
            year: req.year,
            case_study_locked: req.case_study_locked,
            tags: req.tags,
            sections: req.sections,
            process_gallery_urls: req.process_gallery_urls,
            gallery_urls: req.gallery_urls,
            section_galleries: req.section_galleries,
            results: req.results,
            markdown_content: req.markdown_content,
            sort_order: req.sort_order,
            ..Default::default()
        })
    }

    async fn update_project(&self, _id: Uuid, _req: UpdateProjectRequest) -> Option<Project> {
        None
    }

    async fn delete_project(&self, _id: Uuid) -> bool {
        false
    }

    async fn get_profile(&self) -> Option<Profile> {
        self.profile.clone()
    }

    async fn upsert_profile(&self, req: UpsertProfileRequest) -> Option<Profile> {
        Some(Profile {
            id: Uuid::new_v4(),
            name: req.name,
            title: req.title,
            about: req.about,
            avatar_url: req.avatar_url,
            socials: req.socials,
            ctas: req.ctas,
            ..Default::default()
        })
    }

    async fn get_settings(&self) -> Option<SiteSettings> {
        self.settings.clone()
    }

    async fn update_settings(&self, req: UpdateSettingsRequest) -> Option<SiteSettings> {
        let mut settings = self.settings.clone()?;
        if let Some(v) = req.primary_color {
            settings.primary_color = v;
        }
        if let Some(v) = req.secondary_color {
            settings.secondary_color = v;
        }
        if let Some(v) = req.border_radius {
            settings.border_radius = v;
        }
        if let Some(v) = req.font_family {
            settings.font_family = v;
        }
        if let Some(v) = req.projects_per_tab {
            settings.projects_per_tab = v;
        }
        Some(settings)
    }

    async fn list_reviews(&self) -> Vec<Review> {
        self.reviews.clone()
    }

    async fn create_review(&self, req: CreateReviewRequest) -> Option<Review> {
        Some(Review {
            id: Uuid::new_v4(),
            company_name: req.company_name,
            logo_url: req.logo_url,
            quote: req.quote,
            author: req.author,
            role: req.role,
            sort_order: req.sort_order,
        })
    }

    async fn update_review(&self, _id: Uuid, _req: UpdateReviewRequest) -> Option<Review> {
        None
    }

    async fn delete_review(&self, _id: Uuid) -> bool {
        false
    }

    async fn list_articles(&self) -> Vec<SubstackArticle> {
        self.articles.clone()
    }

    async fn create_article(&self, req: CreateArticleRequest) -> Option<SubstackArticle> {
        let sort_order = req.sort_order.unwrap_or_else(|| {
            self.articles
                .iter()
                .map(|a| a.sort_order + 1)
                .max()
                .unwrap_or(0)
        });
        Some(SubstackArticle {
            id: Uuid::new_v4(),
            title: req.title,
            date: req.date,
            slug: req.slug,
            sort_order,
        })
    }

    async fn update_article(
        &self,
        _id: Uuid,
        _req: UpdateArticleRequest,
    ) -> Option<SubstackArticle> {
        None
    }

    async fn delete_article(&self, _id: Uuid) -> bool {
        false
    }
}

/// Minimal project fixture; everything the catalog logic does not look at
/// stays at its default.
pub fn project(slug: &str, category: ProjectCategory, sort_order: i32) -> Project {
    Project {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: slug.to_string(),
        category,
        sort_order,
        ..Default::default()
    }
}

/// Full test state: stub repository, mock storage, mock mailer, default config
/// (admin credentials set to the well-known test values).
pub fn state(repo: StubRepository) -> AppState {
    AppState {
        repo: Arc::new(repo) as RepositoryState,
        storage: Arc::new(MockStorageService::new()) as StorageState,
        mailer: Arc::new(MockMailer::new()) as MailerState,
        config: AppConfig::default(),
    }
}

pub fn app(repo: StubRepository) -> Router {
    create_router(state(repo))
}
