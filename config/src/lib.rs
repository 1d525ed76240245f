//! Configuration for Folio.
//!
//! Read from `~/.folio/config.toml`. Every section and key is optional; a
//! missing file means defaults. A few settings can also come from the
//! environment (`FOLIO_CONTENT`, `FOLIO_REDUCED_MOTION`, `FOLIO_ASCII`).

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use folio_types::ui::UiOptions;

pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 400;
/// Terminal widths below this use the collapsed navigation and overlay menu.
pub const DEFAULT_MENU_BREAKPOINT: u16 = 90;

const ENV_CONTENT: &str = "FOLIO_CONTENT";
const ENV_REDUCED_MOTION: &str = "FOLIO_REDUCED_MOTION";
const ENV_ASCII: &str = "FOLIO_ASCII";

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub ui: Option<UiConfig>,
    pub scroll: Option<ScrollConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Alternate portfolio document. Supports `${VAR}` expansion.
    pub content_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Use ASCII-only glyphs for icons, bars and the menu.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Jump instead of animating; no menu slide.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScrollConfig {
    pub smooth_scroll_ms: Option<u64>,
    pub menu_breakpoint: Option<u16>,
}

/// Expand `${VAR}` references. Unset variables expand to nothing; an
/// unterminated `${` is kept literally.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    expand_with(value, |name| env::var(name).ok())
}

fn expand_with(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if !name.is_empty()
                    && let Some(replacement) = lookup(name)
                {
                    out.push_str(&replacement);
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn env_flag(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> bool {
    lookup(name).is_some_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

impl FolioConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Portfolio document to render instead of the embedded one.
    #[must_use]
    pub fn content_path(&self) -> Option<PathBuf> {
        self.content_path_with(|name| env::var(name).ok())
    }

    fn content_path_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        let configured = self
            .app
            .as_ref()
            .and_then(|app| app.content_path.as_deref())
            .map(|raw| expand_with(raw, &lookup));
        configured
            .or_else(|| lookup(ENV_CONTENT))
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options_with(|name| env::var(name).ok())
    }

    fn ui_options_with(&self, lookup: impl Fn(&str) -> Option<String>) -> UiOptions {
        let ui = self.ui.as_ref();
        UiOptions {
            ascii_only: ui.is_some_and(|cfg| cfg.ascii_only) || env_flag(&lookup, ENV_ASCII),
            high_contrast: ui.is_some_and(|cfg| cfg.high_contrast),
            reduced_motion: ui.is_some_and(|cfg| cfg.reduced_motion)
                || env_flag(&lookup, ENV_REDUCED_MOTION),
        }
    }

    #[must_use]
    pub fn smooth_scroll_duration(&self) -> Duration {
        let ms = self
            .scroll
            .as_ref()
            .and_then(|scroll| scroll.smooth_scroll_ms)
            .unwrap_or(DEFAULT_SMOOTH_SCROLL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn menu_breakpoint(&self) -> u16 {
        self.scroll
            .as_ref()
            .and_then(|scroll| scroll.menu_breakpoint)
            .unwrap_or(DEFAULT_MENU_BREAKPOINT)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    use super::{
        ConfigError, DEFAULT_MENU_BREAKPOINT, FolioConfig, expand_env_vars, expand_with,
    };

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn parse(source: &str) -> FolioConfig {
        toml::from_str(source).expect("valid config")
    }

    #[test]
    fn expand_env_vars_no_vars() {
        assert_eq!(expand_env_vars("hello world"), "hello world");
    }

    #[test]
    fn expand_replaces_known_and_drops_unknown() {
        let env = env_of(&[("HOME", "/home/ada")]);
        assert_eq!(
            expand_with("${HOME}/folio/${NOPE}site.toml", &env),
            "/home/ada/folio/site.toml"
        );
    }

    #[test]
    fn expand_keeps_unterminated_reference() {
        let env = env_of(&[]);
        assert_eq!(expand_with("a${HOME", &env), "a${HOME");
        assert_eq!(expand_with("${}x", &env), "x");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse("");
        let options = config.ui_options_with(env_of(&[]));
        assert!(!options.ascii_only && !options.high_contrast && !options.reduced_motion);
        assert_eq!(config.smooth_scroll_duration(), Duration::from_millis(400));
        assert_eq!(config.menu_breakpoint(), DEFAULT_MENU_BREAKPOINT);
        assert_eq!(config.content_path_with(env_of(&[])), None);
    }

    #[test]
    fn reads_all_sections() {
        let config = parse(
            r#"
            [app]
            content_path = "${HOME}/me.toml"

            [ui]
            high_contrast = true
            reduced_motion = true

            [scroll]
            smooth_scroll_ms = 120
            menu_breakpoint = 70
            "#,
        );
        let env = env_of(&[("HOME", "/h")]);
        assert_eq!(
            config.content_path_with(&env),
            Some(PathBuf::from("/h/me.toml"))
        );
        let options = config.ui_options_with(&env);
        assert!(options.high_contrast && options.reduced_motion && !options.ascii_only);
        assert_eq!(config.smooth_scroll_duration(), Duration::from_millis(120));
        assert_eq!(config.menu_breakpoint(), 70);
    }

    #[test]
    fn environment_fills_in_flags_and_content() {
        let config = parse("");
        let env = env_of(&[
            ("FOLIO_REDUCED_MOTION", "1"),
            ("FOLIO_ASCII", "yes"),
            ("FOLIO_CONTENT", "/srv/portfolio.toml"),
        ]);
        let options = config.ui_options_with(&env);
        assert!(options.reduced_motion && options.ascii_only);
        assert_eq!(
            config.content_path_with(&env),
            Some(PathBuf::from("/srv/portfolio.toml"))
        );
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"[ui\nascii_only = true").expect("write");
        let err = FolioConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), file.path());
    }

    #[test]
    fn load_from_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"[ui]\nascii_only = true\n").expect("write");
        let config = FolioConfig::load_from(file.path()).expect("loads");
        assert!(config.ui.is_some_and(|ui| ui.ascii_only));
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = FolioConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
