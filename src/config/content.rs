//! `[content]` section configuration.
//!
//! The content lists rendered by the projects, experience, and awards
//! pages. List order is display order.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Card style for a project entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCard {
    /// Full-width screenshot card (default).
    #[default]
    Image,
    /// Small icon card.
    Icon,
}

/// Kind of an experience entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    /// Employment (default).
    #[default]
    Work,
    /// Education.
    Education,
}

// ============================================================================
// Records
// ============================================================================

/// A project card entry.
///
/// `star` and `fork` hold the last known counts; the GitHub
/// collaborator refreshes them when `[github].enable` is set.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Project name.
    pub name: String,

    /// Short description shown on the card.
    pub description: String,

    /// Repository URL.
    pub github_url: String,

    /// Live site URL.
    pub website: String,

    /// Card style.
    #[serde(default)]
    pub card: ProjectCard,

    /// Icon or screenshot path.
    pub icon: String,

    /// Star count.
    #[serde(default)]
    pub star: u32,

    /// Fork count.
    #[serde(default)]
    pub fork: u32,
}

/// An experience timeline entry (work or education).
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    /// Role or degree title.
    pub title: String,

    /// Company or school.
    pub organization: String,

    /// City, country.
    pub location: String,

    /// Start of the period, "YYYY-MM".
    pub start_date: String,

    /// End of the period, "YYYY-MM" or "Present".
    pub end_date: String,

    /// Work or education.
    #[serde(default)]
    pub kind: ExperienceKind,

    /// What was done there.
    pub description: String,

    /// Skill tags shown under the entry.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Organization logo path.
    pub logo: String,
}

/// An award entry.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Award {
    /// Award title.
    pub title: String,

    /// Awarding organization.
    pub organization: String,

    /// Award date, "YYYY-MM".
    pub date: String,

    /// What the award was for.
    pub description: String,

    /// Grouping category (e.g., "Development", "Academic").
    pub category: String,

    /// Certificate or badge image path.
    pub image: String,
}

// ============================================================================
// Section
// ============================================================================

/// `[content]` section in theme.toml - content lists.
///
/// # Example
/// ```toml
/// [[content.projects]]
/// name = "my-tool"
/// description = "A CLI tool."
/// github_url = "https://github.com/alice/my-tool"
/// website = "https://my-tool.example.com/"
/// icon = "/projects/my-tool.png"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Project cards.
    #[serde(default = "defaults::content::projects")]
    #[educe(Default = defaults::content::projects())]
    pub projects: Vec<Project>,

    /// Experience timeline entries.
    #[serde(default = "defaults::content::experience")]
    #[educe(Default = defaults::content::experience())]
    pub experience: Vec<Experience>,

    /// Award entries.
    #[serde(default = "defaults::content::awards")]
    #[educe(Default = defaults::content::awards())]
    pub awards: Vec<Award>,
}
