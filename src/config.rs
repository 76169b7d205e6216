//! Viewer settings.
//!
//! Loaded from an optional `mintview.toml` next to the binary (or an explicit
//! `--config` path) with `MINTVIEW_*` environment variable overrides. CLI
//! flags take precedence over everything here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Viewer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Theme name: `auto`, `dark`, or `light`.
    pub theme: String,
    /// Filter key active at startup (fail-open on unrecognized keys).
    pub default_filter: String,
    /// Card width in terminal columns.
    pub card_width: u16,
    /// Write tracing output to this file. A TUI owns the terminal, so
    /// logging is disabled unless a file is configured.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            default_filter: "all".to_string(),
            card_width: 32,
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from the given file (or the default location) merged
    /// with environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("theme", "auto")?
            .set_default("default_filter", "all")?
            .set_default("card_width", 32i64)?;

        builder = match path {
            Some(p) => builder.add_source(config::File::from(p.to_path_buf())),
            None => builder.add_source(config::File::with_name("mintview").required(false)),
        };

        builder
            .add_source(config::Environment::with_prefix("MINTVIEW"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "auto");
        assert_eq!(settings.default_filter, "all");
        assert_eq!(settings.card_width, 32);
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mintview.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "theme = \"dark\"\ncard_width = 40").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.card_width, 40);
        // Unset keys keep their defaults
        assert_eq!(settings.default_filter, "all");
    }

    #[test]
    fn test_load_missing_default_file_uses_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.default_filter, "all");
    }
}
