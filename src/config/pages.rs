//! Page section configuration.
//!
//! Per-page display copy and pagination settings for the posts, tags,
//! projects, and experience pages.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Layout variant for a paginated post list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListLayout {
    /// Title-only rows (default).
    #[default]
    Compact,
    /// Rows with a hero image thumbnail.
    Image,
    /// Vertical timeline grouped by date.
    TimeLine,
}

/// Pagination settings for one post list.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PageListConfig {
    /// Entries per page.
    #[serde(default = "defaults::pages::size")]
    #[educe(Default = defaults::pages::size())]
    pub size: usize,

    /// Layout variant.
    #[serde(default = "defaults::pages::layout")]
    #[educe(Default = defaults::pages::layout())]
    pub layout: ListLayout,
}

// ============================================================================
// Page Sections
// ============================================================================

/// `[posts]` section in theme.toml - posts page copy and pagination.
///
/// # Example
/// ```toml
/// [posts]
/// title = "Posts"
/// introduce = "Things I wrote."
///
/// [posts.post_page]
/// size = 10
/// layout = "image"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PostsConfig {
    /// Page title.
    #[serde(default = "defaults::posts::title")]
    #[educe(Default = defaults::posts::title())]
    pub title: String,

    /// Page description for meta tags.
    #[serde(default = "defaults::posts::description")]
    #[educe(Default = defaults::posts::description())]
    pub description: String,

    /// Introduction paragraph rendered above the list.
    #[serde(default = "defaults::posts::introduce")]
    #[educe(Default = defaults::posts::introduce())]
    pub introduce: String,

    /// Default post author.
    #[serde(default = "defaults::posts::author")]
    #[educe(Default = defaults::posts::author())]
    pub author: String,

    /// Pagination for the recent-posts list on the home page.
    #[serde(default = "defaults::posts::home_page")]
    #[educe(Default = defaults::posts::home_page())]
    pub home_page: PageListConfig,

    /// Pagination for the posts page.
    #[serde(default = "defaults::posts::post_page")]
    #[educe(Default = defaults::posts::post_page())]
    pub post_page: PageListConfig,

    /// Pagination for per-tag post lists.
    #[serde(default = "defaults::posts::tags_page")]
    #[educe(Default = defaults::posts::tags_page())]
    pub tags_page: PageListConfig,

    /// Fallback hero image for posts without one.
    #[serde(default = "defaults::posts::default_hero_image")]
    #[educe(Default = defaults::posts::default_hero_image())]
    pub default_hero_image: String,

    /// Aspect ratio of the hero image (e.g., "16/9").
    #[serde(default = "defaults::posts::default_hero_image_aspect_ratio")]
    #[educe(Default = defaults::posts::default_hero_image_aspect_ratio())]
    pub default_hero_image_aspect_ratio: String,

    /// Dim hero images when the dark color scheme is active.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub image_darken_in_dark: bool,

    /// UI text: "read more" link on truncated entries.
    #[serde(default = "defaults::posts::read_more_text")]
    #[educe(Default = defaults::posts::read_more_text())]
    pub read_more_text: String,

    /// UI text: previous page button.
    #[serde(default = "defaults::posts::prev_page_text")]
    #[educe(Default = defaults::posts::prev_page_text())]
    pub prev_page_text: String,

    /// UI text: next page button.
    #[serde(default = "defaults::posts::next_page_text")]
    #[educe(Default = defaults::posts::next_page_text())]
    pub next_page_text: String,

    /// UI text: table of contents heading.
    #[serde(default = "defaults::posts::toc_text")]
    #[educe(Default = defaults::posts::toc_text())]
    pub toc_text: String,

    /// UI text: back link from a post to the posts page.
    #[serde(default = "defaults::posts::back_to_posts_text")]
    #[educe(Default = defaults::posts::back_to_posts_text())]
    pub back_to_posts_text: String,

    /// UI text: next post link.
    #[serde(default = "defaults::posts::next_post_text")]
    #[educe(Default = defaults::posts::next_post_text())]
    pub next_post_text: String,

    /// UI text: previous post link.
    #[serde(default = "defaults::posts::prev_post_text")]
    #[educe(Default = defaults::posts::prev_post_text())]
    pub prev_post_text: String,
}

/// `[tags]` section in theme.toml - tags page copy.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TagsConfig {
    /// Page title.
    #[serde(default = "defaults::tags::title")]
    #[educe(Default = defaults::tags::title())]
    pub title: String,

    /// Page description for meta tags.
    #[serde(default = "defaults::tags::description")]
    #[educe(Default = defaults::tags::description())]
    pub description: String,

    /// Introduction paragraph rendered above the tag cloud.
    #[serde(default = "defaults::tags::introduce")]
    #[educe(Default = defaults::tags::introduce())]
    pub introduce: String,
}

/// `[projects]` section in theme.toml - projects page copy.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Page title.
    #[serde(default = "defaults::projects::title")]
    #[educe(Default = defaults::projects::title())]
    pub title: String,

    /// Page description for meta tags.
    #[serde(default = "defaults::projects::description")]
    #[educe(Default = defaults::projects::description())]
    pub description: String,

    /// Introduction paragraph rendered above the project cards.
    #[serde(default = "defaults::projects::introduce")]
    #[educe(Default = defaults::projects::introduce())]
    pub introduce: String,
}

/// `[experience]` section in theme.toml - experience page copy.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ExperienceConfig {
    /// Page title.
    #[serde(default = "defaults::experience::title")]
    #[educe(Default = defaults::experience::title())]
    pub title: String,

    /// Page description for meta tags.
    #[serde(default = "defaults::experience::description")]
    #[educe(Default = defaults::experience::description())]
    pub description: String,

    /// Introduction paragraph rendered above the timeline.
    #[serde(default = "defaults::experience::introduce")]
    #[educe(Default = defaults::experience::introduce())]
    pub introduce: String,
}
