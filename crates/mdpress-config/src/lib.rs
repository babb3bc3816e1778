use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout and rendering settings, read from `mdpress.toml`.
///
/// Every field has a default, so a project without a config file builds
/// with the conventional directory names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory of markdown sources.
    pub content_dir: PathBuf,
    /// HTML template with the title and content placeholders.
    pub template_path: PathBuf,
    /// Directory of static assets mirrored into the output.
    pub static_dir: PathBuf,
    /// Where the generated site lands.
    pub output_dir: PathBuf,
    /// Prefix substituted into root-relative `href`/`src` attributes.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template_path: PathBuf::from("template.html"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}

impl SiteConfig {
    pub const FILE_NAME: &'static str = "mdpress.toml";

    /// Loads config from an explicit path; `Ok(None)` when the file is
    /// absent.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let mut config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.expand_paths();
        Ok(Some(config))
    }

    /// Loads `mdpress.toml` from a project directory, falling back to
    /// defaults when no file exists.
    pub fn load_or_default<P: AsRef<Path>>(project_dir: P) -> Result<Self, ConfigError> {
        let config_path = project_dir.as_ref().join(Self::FILE_NAME);
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }

    /// Expand shell variables and tilde in every configured path
    fn expand_paths(&mut self) {
        for path in [
            &mut self.content_dir,
            &mut self.template_path,
            &mut self.static_dir,
            &mut self.output_dir,
        ] {
            if let Some(expanded) = expand_path(path) {
                *path = expanded;
            }
        }
    }
}

fn expand_path(path: &Path) -> Option<PathBuf> {
    let path_str = path.to_string_lossy();
    match shellexpand::full(&path_str) {
        Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_use_conventional_directories() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.template_path, PathBuf::from("template.html"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn missing_file_loads_as_none() {
        let result = SiteConfig::load_from_path("/nonexistent/mdpress.toml").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_or_default_falls_back_cleanly() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn partial_config_keeps_defaults_for_the_rest() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(SiteConfig::FILE_NAME);
        std::fs::write(&config_path, "base_path = \"/repo/\"\n").unwrap();

        let config = SiteConfig::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(config.base_path, "/repo/");
        assert_eq!(config.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn full_config_round_trips() {
        let original = SiteConfig {
            content_dir: PathBuf::from("docs"),
            template_path: PathBuf::from("layout.html"),
            static_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("dist"),
            base_path: "/site/".to_string(),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.content_dir, original.content_dir);
        assert_eq!(parsed.template_path, original.template_path);
        assert_eq!(parsed.base_path, original.base_path);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(SiteConfig::FILE_NAME);
        std::fs::write(&config_path, "content_dir = [not toml").unwrap();

        let result = SiteConfig::load_from_path(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn tilde_paths_are_expanded() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(SiteConfig::FILE_NAME);
        std::fs::write(&config_path, "content_dir = \"~/site-content\"\n").unwrap();

        let config = SiteConfig::load_from_path(&config_path).unwrap().unwrap();
        assert!(!config.content_dir.to_string_lossy().starts_with('~'));
    }
}
