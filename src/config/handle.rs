//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! Page templates and the GitHub/content collaborators read through
//! `cfg()`; the loaded config is never mutated in place, only replaced
//! wholesale when `theme.toml` changes.
//!
//! # Usage
//!
//! ```ignore
//! use litos_config::config::cfg;
//!
//! let c = cfg();
//! render_header(&c.links.header)?;  // Arc auto-derefs to &ThemeConfig
//! ```

use super::ThemeConfig;
use anyhow::bail;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

// =============================================================================
// Global State
// =============================================================================

/// Global config storage with atomic replacement support.
///
/// Initialized with the shipped defaults, so reads are valid before any
/// `theme.toml` is loaded. `init_config` replaces it at startup.
pub static CONFIG: LazyLock<ArcSwap<ThemeConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(ThemeConfig::default()));

/// Global hash of the current config file content.
static CONFIG_HASH: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

// =============================================================================
// Public API
// =============================================================================

/// Get current config as `Arc<ThemeConfig>`.
///
/// Returns an `Arc` that keeps the config alive. Thread-safe and wait-free.
/// The Arc auto-derefs to `&ThemeConfig`:
///
/// ```ignore
/// let c = cfg();
/// render_page(&c);  // Works directly, no extra & needed
/// ```
#[inline]
pub fn cfg() -> Arc<ThemeConfig> {
    CONFIG.load_full()
}

/// Initialize global config (called once at startup).
///
/// This replaces the shipped defaults with the loaded config.
#[inline]
pub fn init_config(config: ThemeConfig) {
    use std::fs;

    // Initialize hash if file exists
    if config.config_path.exists()
        && let Ok(content) = fs::read_to_string(&config.config_path)
    {
        CONFIG_HASH.store(content_hash(content.as_bytes()), std::sync::atomic::Ordering::Relaxed);
    }

    CONFIG.store(Arc::new(config));
}

/// Replace config atomically (called when theme.toml changes).
///
/// The old config remains valid for any readers that loaded it before this
/// call. New readers will see the updated config.
///
/// Returns `true` if config was actually updated, `false` if content matches
/// last load.
///
/// # Errors
///
/// Returns error if the config file is unreadable, fails to parse, or no
/// file-backed config was installed via `ThemeConfig::load` + `init_config`.
pub fn reload_config() -> anyhow::Result<bool> {
    use std::fs;

    let c = cfg();
    if c.config_path.as_os_str().is_empty() {
        bail!("No config file to reload; install one with `ThemeConfig::load` and `init_config` first");
    }

    // Read raw content to check for changes.
    // If reading fails, bubble up error (file might be deleted temporarily)
    let content = fs::read_to_string(&c.config_path)?;

    let new_hash = content_hash(content.as_bytes());
    let old_hash = CONFIG_HASH.load(std::sync::atomic::Ordering::Relaxed);
    if new_hash == old_hash {
        return Ok(false);
    }

    let mut new_config = ThemeConfig::from_str(&content)?;
    new_config.config_path = c.config_path.clone();

    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, std::sync::atomic::Ordering::Relaxed);

    Ok(true)
}

/// First 8 bytes of the blake3 hash, as a freshness fingerprint.
#[inline]
fn content_hash(bytes: &[u8]) -> u64 {
    let hash = blake3::hash(bytes);
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_content_hash_stable() {
        let a = content_hash(b"[site]\ntitle = \"A\"\n");
        let b = content_hash(b"[site]\ntitle = \"A\"\n");
        let c = content_hash(b"[site]\ntitle = \"B\"\n");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    // Single test for the global registry: tests run in parallel within
    // one process, so all global-state assertions live here.
    #[test]
    fn test_registry_install_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[site]\ntitle = \"First\"").unwrap();
        drop(file);

        let config = ThemeConfig::load(&path).unwrap();
        init_config(config);

        // Repeated reads observe identical values
        let a = cfg();
        let b = cfg();
        assert_eq!(a.site.title, "First");
        assert_eq!(b.site.title, "First");
        assert_eq!(a.github.cache_duration, b.github.cache_duration);

        // Unchanged content: no replacement
        assert!(!reload_config().unwrap());

        // Changed content: atomic replacement, old snapshot stays valid
        std::fs::write(&path, "[site]\ntitle = \"Second\"\n").unwrap();
        assert!(reload_config().unwrap());
        assert_eq!(cfg().site.title, "Second");
        assert_eq!(a.site.title, "First");

        // Reload again without changes: skipped
        assert!(!reload_config().unwrap());
    }
}
