//! `[links]` section configuration.
//!
//! Navigation links for the header and footer, plus social links with
//! icon identifiers.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// A navigation entry: display label and target path.
///
/// Both fields are required when a link is written in theme.toml;
/// `validate()` additionally rejects empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    /// Display label.
    pub name: String,

    /// Target path or absolute URL.
    pub url: String,
}

/// A social profile link with an iconify icon identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Platform name (e.g., "github").
    pub name: String,

    /// Profile URL.
    pub url: String,

    /// Icon identifier from https://icon-sets.iconify.design/
    /// (e.g., "icon-[ri--github-fill]").
    pub icon: String,
}

/// `[links]` section in theme.toml - site navigation.
///
/// List order is display order.
///
/// # Example
/// ```toml
/// [links]
/// header = [
///     { name = "Posts", url = "/posts" },
/// ]
/// social = [
///     { name = "github", url = "https://github.com/alice", icon = "icon-[ri--github-fill]" },
/// ]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LinksConfig {
    /// Header navigation links.
    #[serde(default = "defaults::links::header")]
    #[educe(Default = defaults::links::header())]
    pub header: Vec<Link>,

    /// Footer navigation links.
    #[serde(default = "defaults::links::footer")]
    #[educe(Default = defaults::links::footer())]
    pub footer: Vec<Link>,

    /// Social profile links.
    #[serde(default = "defaults::links::social")]
    #[educe(Default = defaults::links::social())]
    pub social: Vec<SocialLink>,
}
