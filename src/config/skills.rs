//! `[skills]` section configuration.
//!
//! The decorative skills showcase: directionally-scrolling rows of
//! skill badges on the home page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Scroll direction of a showcase row.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Badges scroll right-to-left (default).
    #[default]
    Left,
    /// Badges scroll left-to-right.
    Right,
}

/// A single skill badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    /// Skill name shown on the badge.
    pub name: String,

    /// Icon identifier from https://icon-sets.iconify.design/
    pub icon: String,
}

/// One showcase row: a scroll direction and its ordered badges.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    /// Row scroll direction.
    #[serde(default)]
    pub direction: ScrollDirection,

    /// Badges in display order.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// `[skills]` section in theme.toml - skills showcase.
///
/// # Example
/// ```toml
/// [skills]
/// enable = true
///
/// [[skills.groups]]
/// direction = "left"
/// skills = [
///     { name = "Rust", icon = "icon-[mdi--language-rust]" },
/// ]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SkillsConfig {
    /// Render the showcase on the home page.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Showcase rows in display order.
    #[serde(default = "defaults::skills::groups")]
    #[educe(Default = defaults::skills::groups())]
    pub groups: Vec<SkillGroup>,
}

#[cfg(test)]
mod tests {
    use super::super::ThemeConfig;
    use super::ScrollDirection;

    #[test]
    fn test_skills_defaults() {
        let config: ThemeConfig = toml::from_str("").unwrap();

        assert!(config.skills.enable);
        assert_eq!(config.skills.groups.len(), 2);

        let first = &config.skills.groups[0];
        assert!(matches!(first.direction, ScrollDirection::Left));
        assert_eq!(first.skills.len(), 9);
        assert_eq!(first.skills[0].name, "JavaScript");
        assert_eq!(first.skills[0].icon, "icon-[mdi--language-javascript]");

        let second = &config.skills.groups[1];
        assert!(matches!(second.direction, ScrollDirection::Right));
        assert_eq!(second.skills.len(), 8);
        assert_eq!(second.skills[0].name, "Git");
    }

    #[test]
    fn test_skills_custom_groups() {
        let config = r#"
            [skills]
            enable = true

            [[skills.groups]]
            direction = "right"
            skills = [
                { name = "Rust", icon = "icon-[mdi--language-rust]" },
                { name = "Typst", icon = "icon-[mdi--file-document]" },
            ]
        "#;
        let config: ThemeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.skills.groups.len(), 1);
        let group = &config.skills.groups[0];
        assert!(matches!(group.direction, ScrollDirection::Right));
        assert_eq!(group.skills.len(), 2);
        assert_eq!(group.skills[1].name, "Typst");
    }

    #[test]
    fn test_skills_disabled() {
        let config = r#"
            [skills]
            enable = false
        "#;
        let config: ThemeConfig = toml::from_str(config).unwrap();

        assert!(!config.skills.enable);
        // groups keep the shipped values even when disabled
        assert_eq!(config.skills.groups.len(), 2);
    }

    #[test]
    fn test_skills_direction_defaults_to_left() {
        let config = r#"
            [[skills.groups]]
            skills = [{ name = "Rust", icon = "icon-[mdi--language-rust]" }]
        "#;
        let config: ThemeConfig = toml::from_str(config).unwrap();

        assert!(matches!(
            config.skills.groups[0].direction,
            ScrollDirection::Left
        ));
    }

    #[test]
    fn test_skills_invalid_direction_rejection() {
        let config = r#"
            [[skills.groups]]
            direction = "up"
            skills = []
        "#;
        let result: Result<ThemeConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }

    #[test]
    fn test_skill_unknown_field_rejection() {
        let config = r#"
            [[skills.groups]]
            skills = [{ name = "Rust", icon = "x", level = 9 }]
        "#;
        let result: Result<ThemeConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
