//! Configuration registry for the Litos blog theme.
//!
//! Declares the site metadata, navigation and social links, the skills
//! showcase, GitHub integration settings, per-page copy, and the
//! project/experience/award content lists. Page templates and the
//! GitHub/content collaborators consume these values; this crate does
//! no rendering and no network I/O.
//!
//! Every field has a shipped default, so the registry is fully
//! populated even without a `theme.toml`:
//!
//! ```
//! use litos_config::config::cfg;
//!
//! let c = cfg();
//! assert_eq!(c.github.cache_duration, 5700);
//! assert_eq!(c.links.social.len(), 3);
//! ```

pub mod config;

pub use config::{ThemeConfig, cfg, init_config, reload_config};
