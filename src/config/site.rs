//! `[site]` section configuration.
//!
//! Contains the site identity: title, author, canonical URL, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in theme.toml - site identity and metadata.
///
/// # Example
/// ```toml
/// [site]
/// title = "My Portfolio"
/// description = "Notes and projects"
/// website = "https://example.com/"
/// author = "Alice"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title displayed in browser tab and headers.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    /// Site description for SEO meta tags.
    #[serde(default = "defaults::site::description")]
    #[educe(Default = defaults::site::description())]
    pub description: String,

    /// Canonical URL of the deployed site, used for absolute links
    /// and Open Graph tags.
    #[serde(default = "defaults::site::website")]
    #[educe(Default = defaults::site::website())]
    pub website: String,

    /// Base path the site is served under (e.g., "/" or "/blog/").
    #[serde(default = "defaults::site::base")]
    #[educe(Default = defaults::site::base())]
    pub base: String,

    /// Author name for meta tags and page copy.
    #[serde(default = "defaults::site::author")]
    #[educe(Default = defaults::site::author())]
    pub author: String,

    /// Social preview image path (Open Graph / Twitter card).
    #[serde(default = "defaults::site::og_image")]
    #[educe(Default = defaults::site::og_image())]
    pub og_image: String,
}

#[cfg(test)]
mod tests {
    use super::super::ThemeConfig;

    #[test]
    fn test_site_config_full() {
        let config = r#"
            [site]
            title = "My Portfolio"
            description = "Notes and projects"
            website = "https://example.com/"
            base = "/blog/"
            author = "Alice"
            og_image = "/preview.png"
        "#;
        let config: ThemeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.title, "My Portfolio");
        assert_eq!(config.site.description, "Notes and projects");
        assert_eq!(config.site.website, "https://example.com/");
        assert_eq!(config.site.base, "/blog/");
        assert_eq!(config.site.author, "Alice");
        assert_eq!(config.site.og_image, "/preview.png");
    }

    #[test]
    fn test_site_config_defaults() {
        let config: ThemeConfig = toml::from_str("").unwrap();

        assert_eq!(config.site.title, "Litos");
        assert_eq!(config.site.website, "https://litos.vercel.app/");
        assert_eq!(config.site.base, "/");
        assert_eq!(config.site.author, "Dnzzk2");
        assert_eq!(config.site.og_image, "/og-image.jpg");
    }

    #[test]
    fn test_site_config_partial_override() {
        let config = r#"
            [site]
            title = "Renamed"
        "#;
        let config: ThemeConfig = toml::from_str(config).unwrap();

        // title is overridden
        assert_eq!(config.site.title, "Renamed");
        // the rest keep the shipped values
        assert_eq!(config.site.author, "Dnzzk2");
        assert_eq!(config.site.base, "/");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [site]
            title = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<ThemeConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_site_config_unicode() {
        let config = r#"
            [site]
            title = "My Blog 🚀"
            author = "René"
        "#;
        let config: ThemeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.title, "My Blog 🚀");
        assert_eq!(config.site.author, "René");
    }
}
