//! `[github]` section configuration.
//!
//! Settings read by the GitHub data collaborator, which fetches and
//! caches star/fork counts for the project cards. The fetching itself
//! lives outside this crate; only the knobs are declared here.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[github]` section in theme.toml - GitHub integration settings.
///
/// # Example
/// ```toml
/// [github]
/// enable = true
/// cache_duration = 5700
/// use_mock_data = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct GithubConfig {
    /// Fetch live repository data for project cards.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// How long fetched data stays fresh, in seconds.
    #[serde(default = "defaults::github::cache_duration")]
    #[educe(Default = defaults::github::cache_duration())]
    pub cache_duration: u64,

    /// Serve canned data instead of hitting the API during development.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub use_mock_data: bool,
}

#[cfg(test)]
mod tests {
    use super::super::ThemeConfig;

    #[test]
    fn test_github_defaults() {
        let config: ThemeConfig = toml::from_str("").unwrap();

        assert!(config.github.enable);
        // 1.5 hours + 5 minutes
        assert_eq!(config.github.cache_duration, 5700);
        assert!(config.github.use_mock_data);
    }

    #[test]
    fn test_github_override() {
        let config = r#"
            [github]
            enable = false
            cache_duration = 600
            use_mock_data = false
        "#;
        let config: ThemeConfig = toml::from_str(config).unwrap();

        assert!(!config.github.enable);
        assert_eq!(config.github.cache_duration, 600);
        assert!(!config.github.use_mock_data);
    }

    #[test]
    fn test_github_partial_override() {
        let config = r#"
            [github]
            cache_duration = 3600
        "#;
        let config: ThemeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.github.cache_duration, 3600);
        // flags keep the shipped values
        assert!(config.github.enable);
        assert!(config.github.use_mock_data);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [github]
            token = "secret"
        "#;
        let result: Result<ThemeConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }

    #[test]
    fn test_github_negative_duration_rejection() {
        let config = r#"
            [github]
            cache_duration = -1
        "#;
        let result: Result<ThemeConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
