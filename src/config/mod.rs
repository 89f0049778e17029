//! Theme configuration management for `theme.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `[site]`       | Site identity (title, author, url, og image)     |
//! | `[links]`      | Header, footer, and social navigation            |
//! | `[skills]`     | Home page skills showcase rows                   |
//! | `[github]`     | GitHub data collaborator settings                |
//! | `[posts]`      | Posts page copy, pagination, UI text             |
//! | `[tags]`       | Tags page copy                                   |
//! | `[projects]`   | Projects page copy                               |
//! | `[experience]` | Experience page copy                             |
//! | `[content]`    | Project, experience, and award lists             |
//! | `[extra]`      | User-defined custom fields                       |
//!
//! Every field has a shipped default, so an empty `theme.toml` (or none
//! at all) yields the complete registry the theme renders out of the
//! box. Parsed values are installed into the process-wide registry via
//! [`init_config`] and read lock-free via [`cfg`].
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Portfolio"
//! website = "https://example.com/"
//!
//! [github]
//! cache_duration = 3600
//!
//! [[content.projects]]
//! name = "my-tool"
//! description = "A CLI tool."
//! github_url = "https://github.com/alice/my-tool"
//! website = "https://my-tool.example.com/"
//! icon = "/projects/my-tool.png"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod content;
pub mod defaults;
mod error;
mod github;
mod handle;
mod links;
mod pages;
mod site;
mod skills;

// Re-export public types used by templates and collaborators
pub use content::{Award, ContentConfig, Experience, ExperienceKind, Project, ProjectCard};
pub use github::GithubConfig;
pub use handle::{CONFIG, cfg, init_config, reload_config};
pub use links::{Link, LinksConfig, SocialLink};
pub use pages::{
    ExperienceConfig, ListLayout, PageListConfig, PostsConfig, ProjectsConfig, TagsConfig,
};
pub use site::SiteConfig;
pub use skills::{ScrollDirection, Skill, SkillGroup, SkillsConfig};

use error::ConfigError;

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing theme.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity and metadata
    #[serde(default)]
    pub site: SiteConfig,

    /// Navigation and social links
    #[serde(default)]
    pub links: LinksConfig,

    /// Skills showcase
    #[serde(default)]
    pub skills: SkillsConfig,

    /// GitHub integration settings
    #[serde(default)]
    pub github: GithubConfig,

    /// Posts page settings
    #[serde(default)]
    pub posts: PostsConfig,

    /// Tags page settings
    #[serde(default)]
    pub tags: TagsConfig,

    /// Projects page settings
    #[serde(default)]
    pub projects: ProjectsConfig,

    /// Experience page settings
    #[serde(default)]
    pub experience: ExperienceConfig,

    /// Content lists (projects, experience, awards)
    #[serde(default)]
    pub content: ContentConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl ThemeConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load configuration from file path and remember where it came from,
    /// enabling later [`reload_config`] calls.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.config_path = Self::normalize_path(path);
        Ok(config)
    }

    /// Validate configuration invariants the type system cannot express
    pub fn validate(&self) -> Result<()> {
        if !self.site.website.starts_with("http") {
            bail!(ConfigError::Validation(
                "[site.website] must start with http:// or https://".into()
            ));
        }

        if !self.site.base.starts_with('/') {
            bail!(ConfigError::Validation(
                "[site.base] must start with `/`".into()
            ));
        }

        Self::check_links("[links.header]", &self.links.header)?;
        Self::check_links("[links.footer]", &self.links.footer)?;

        for link in &self.links.social {
            if link.name.is_empty() || link.url.is_empty() || link.icon.is_empty() {
                bail!(ConfigError::Validation(
                    "[links.social] entries must have non-empty name, url, and icon".into()
                ));
            }
        }

        if self.skills.enable
            && self.skills.groups.iter().any(|group| group.skills.is_empty())
        {
            bail!(ConfigError::Validation(
                "[skills.groups] must not contain an empty group while [skills.enable] = true"
                    .into()
            ));
        }

        if self.github.enable && self.github.cache_duration == 0 {
            bail!(ConfigError::Validation(
                "[github.cache_duration] must be non-zero while [github.enable] = true".into()
            ));
        }

        for (field, list) in [
            ("[posts.home_page]", &self.posts.home_page),
            ("[posts.post_page]", &self.posts.post_page),
            ("[posts.tags_page]", &self.posts.tags_page),
        ] {
            if list.size == 0 {
                bail!(ConfigError::Validation(format!(
                    "{field}.size must be at least 1"
                )));
            }
        }

        Ok(())
    }

    /// Check that every link in a list has a non-empty name and url
    fn check_links(field: &str, links: &[Link]) -> Result<()> {
        for link in links {
            if link.name.is_empty() || link.url.is_empty() {
                bail!(ConfigError::Validation(format!(
                    "{field} entries must have non-empty name and url"
                )));
            }
        }

        Ok(())
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
