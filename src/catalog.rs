use crate::models::{Project, ProjectCategory, TabCaps};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Display-layer catalog logic: category filtering, per-tab display caps,
/// badge counts, and gallery layout selection. Everything here is a pure
/// function over already-loaded rows; ordering of the input is always
/// preserved.

// Bounds for the configurable per-tab cap. Values outside this range are
// rejected on write and clamped on read.
pub const MIN_TAB_CAP: u32 = 1;
pub const MAX_TAB_CAP: u32 = 50;
pub const DEFAULT_TAB_CAP: u32 = 4;

// Section galleries above this size are not rendered at all.
const MAX_GALLERY_IMAGES: usize = 4;

/// DisplayFilter
///
/// The user-facing filter tabs. `IllustrationsDecksFlyers` is a merged
/// bucket: it folds the raw `Illustrations` and `MarketingAssets` categories
/// into one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFilter {
    #[default]
    All,
    BrandIdentity,
    Motion,
    IllustrationsDecksFlyers,
}

/// matches
///
/// Whether a stored category belongs to a display tab.
pub fn matches(filter: DisplayFilter, category: ProjectCategory) -> bool {
    match filter {
        DisplayFilter::All => true,
        DisplayFilter::BrandIdentity => category == ProjectCategory::BrandIdentity,
        DisplayFilter::Motion => category == ProjectCategory::Motion,
        DisplayFilter::IllustrationsDecksFlyers => matches!(
            category,
            ProjectCategory::Illustrations | ProjectCategory::MarketingAssets
        ),
    }
}

/// filter_projects
///
/// Returns the projects matching the tab, in their original order. The `All`
/// tab returns the input unchanged.
pub fn filter_projects(projects: &[Project], filter: DisplayFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| matches(filter, p.category))
        .cloned()
        .collect()
}

/// filter_count
///
/// Number of projects a tab would show before capping.
pub fn filter_count(projects: &[Project], filter: DisplayFilter) -> usize {
    projects
        .iter()
        .filter(|p| matches(filter, p.category))
        .count()
}

/// cap_for
///
/// The configured cap for a tab, clamped into bounds so a bad stored value
/// can never widen (or zero out) a tab.
pub fn cap_for(caps: &TabCaps, filter: DisplayFilter) -> u32 {
    let raw = match filter {
        DisplayFilter::All => caps.all,
        DisplayFilter::BrandIdentity => caps.brand_identity,
        DisplayFilter::Motion => caps.motion,
        DisplayFilter::IllustrationsDecksFlyers => caps.illustrations_decks_flyers,
    };
    raw.clamp(MIN_TAB_CAP, MAX_TAB_CAP)
}

/// caps_in_bounds
///
/// Write-side validation for a submitted cap set: every tab must lie inside
/// [MIN_TAB_CAP, MAX_TAB_CAP].
pub fn caps_in_bounds(caps: &TabCaps) -> bool {
    [
        caps.all,
        caps.brand_identity,
        caps.motion,
        caps.illustrations_decks_flyers,
    ]
    .iter()
    .all(|&v| (MIN_TAB_CAP..=MAX_TAB_CAP).contains(&v))
}

/// badge_count
///
/// The number displayed on a tab badge: the configured cap or the actual
/// count, whichever is smaller.
pub fn badge_count(cap: u32, available: usize) -> usize {
    available.min(cap as usize)
}

/// visible_projects
///
/// The capped subset a tab actually renders: filtered in order, truncated to
/// the cap.
pub fn visible_projects(projects: &[Project], filter: DisplayFilter, cap: u32) -> Vec<Project> {
    let mut filtered = filter_projects(projects, filter);
    filtered.truncate(cap as usize);
    filtered
}

/// GalleryLayout
///
/// How a set of gallery images is rendered: a single image becomes a
/// full-width banner, a small set scrolls as a marquee, anything else is
/// hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum GalleryLayout {
    #[default]
    Hidden,
    Banner,
    Marquee,
}

/// gallery_layout
///
/// Selects the display mode for a gallery of `image_count` images.
pub fn gallery_layout(image_count: usize) -> GalleryLayout {
    match image_count {
        0 => GalleryLayout::Hidden,
        1 => GalleryLayout::Banner,
        n if n <= MAX_GALLERY_IMAGES => GalleryLayout::Marquee,
        _ => GalleryLayout::Hidden,
    }
}
