use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};
use crate::render::analytics::DEFAULT_CONTAINER_ID;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "folio.toml";

/// Site configuration, loaded from `folio.toml`.
///
/// Every section is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub site: SiteConfig,
    pub analytics: AnalyticsConfig,
    pub build: BuildConfig,
    pub server: ServerSection,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub container_id: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub out_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            static_dir: PathBuf::from("static"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 4000)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content TOML replacing the built-in catalogue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl FolioConfig {
    /// Resolve and load the configuration.
    ///
    /// An explicit path must exist. Otherwise `FOLIO_CONFIG`, `./folio.toml`
    /// and `~/.folio/config.toml` are tried in order, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(FolioError::config(format!(
                        "config not found at {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::discover(),
        };

        let mut config = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let mut config = Self::from_file(&path)?;
                if let Some(base) = path.parent() {
                    config.anchor_content_path(base);
                }
                config
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.expand_paths();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;
        toml::from_str(&content).map_err(|e| FolioError::toml(path.display().to_string(), e))
    }

    /// Global config path: ~/.folio/config.toml
    pub fn global_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
    }

    fn discover() -> Option<PathBuf> {
        env::var_os("FOLIO_CONFIG")
            .map(PathBuf::from)
            .into_iter()
            .chain(Some(PathBuf::from(LOCAL_CONFIG_FILE)))
            .chain(Self::global_path())
            .find(|candidate| candidate.is_file())
    }

    /// Apply `FOLIO_GTM_ID` and `FOLIO_BIND` from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup("FOLIO_GTM_ID") {
            self.analytics.container_id = id;
        }
        if let Some(bind) = lookup("FOLIO_BIND") {
            self.server.bind = bind
                .parse()
                .map_err(|_| FolioError::config(format!("FOLIO_BIND is not an address: {bind}")))?;
        }
        Ok(())
    }

    /// A relative `content.path` is relative to the config file that names it.
    /// Build and static dirs stay relative to the working directory.
    fn anchor_content_path(&mut self, base: &Path) {
        if let Some(path) = self.content.path.as_ref() {
            let path = expand_home(path);
            self.content.path = Some(if path.is_relative() {
                base.join(path)
            } else {
                path
            });
        }
    }

    fn expand_paths(&mut self) {
        self.build.out_dir = expand_home(&self.build.out_dir);
        self.build.static_dir = expand_home(&self.build.static_dir);
        if let Some(path) = self.content.path.as_ref() {
            self.content.path = Some(expand_home(path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(FolioError::config("site.title must not be empty"));
        }
        if self.site.language.trim().is_empty() {
            return Err(FolioError::config("site.language must not be empty"));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| FolioError::config(format!("failed to serialize config: {e}")))
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[site]\ntitle = \"Dr. Oh\"\n\n[server]\nbind = \"0.0.0.0:8080\"").unwrap();
        file.flush().unwrap();

        let config = FolioConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.site.title, "Dr. Oh");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.server.bind.port(), 8080);
        assert_eq!(config.analytics.container_id, DEFAULT_CONTAINER_ID);
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert!(config.content.path.is_none());
    }

    #[test]
    fn content_path_is_relative_to_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[content]\npath = \"data/content.toml\"\n").unwrap();

        let config = FolioConfig::load(Some(&config_path)).unwrap();
        assert_eq!(
            config.content.path,
            Some(dir.path().join("data/content.toml"))
        );

        std::fs::write(&config_path, "[content]\npath = \"/srv/content.toml\"\n").unwrap();
        let config = FolioConfig::load(Some(&config_path)).unwrap();
        assert_eq!(config.content.path, Some(PathBuf::from("/srv/content.toml")));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = FolioConfig::load(Some(Path::new("/nonexistent/folio.toml"))).unwrap_err();
        assert!(matches!(err, FolioError::Config { .. }));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[site\ntitle = ").unwrap();
        file.flush().unwrap();

        let err = FolioConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::Toml { .. }));
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("FOLIO_GTM_ID", "GTM-OTHER1"), ("FOLIO_BIND", "127.0.0.1:9000")]);
        let mut config = FolioConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.analytics.container_id, "GTM-OTHER1");
        assert_eq!(config.server.bind.port(), 9000);
    }

    #[test]
    fn bad_bind_override_is_rejected() {
        let mut config = FolioConfig::default();
        let err = config
            .apply_overrides(|key| (key == "FOLIO_BIND").then(|| "not-an-addr".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("FOLIO_BIND"));
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut config = FolioConfig::default();
        assert!(config.validate().is_ok());
        config.site.title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn serializes_round_trip_through_toml() {
        let config = FolioConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("container_id = \"GTM-NF82FN4S\""));
        let parsed: FolioConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
