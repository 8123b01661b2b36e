use crate::error::{Result, StumpError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default = "default_site_description")]
    pub description: String,
}

fn default_site_title() -> String {
    "NJ Politics".to_string()
}

fn default_site_description() -> String {
    "A Voter Decision Aid Website".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            description: default_site_description(),
        }
    }
}

// ---------------------------------------------------------------------------
// ContentConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Candidate document, relative to the project root unless absolute.
    #[serde(default = "default_content_path")]
    pub path: PathBuf,
}

fn default_content_path() -> PathBuf {
    PathBuf::from(paths::DEFAULT_CONTENT_FILE)
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_content_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// QaConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaConfig {
    /// Substrings (matched case-insensitively) that mark a headshot URL as
    /// a stand-in image.
    #[serde(default = "default_placeholder_hosts")]
    pub placeholder_hosts: Vec<String>,
    #[serde(default = "default_min_avg")]
    pub min_avg_talking_points: f64,
}

fn default_placeholder_hosts() -> Vec<String> {
    vec!["placeholder.com".to_string()]
}

fn default_min_avg() -> f64 {
    3.0
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            placeholder_hosts: default_placeholder_hosts(),
            min_avg_talking_points: default_min_avg(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub qa: QaConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            site: SiteConfig::default(),
            content: ContentConfig::default(),
            qa: QaConfig::default(),
        }
    }
}

impl Config {
    /// Load `.stump/config.yaml`, falling back to defaults when the file is
    /// absent. A file that exists but does not parse is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        if cfg.version != 1 {
            return Err(StumpError::InvalidConfig(format!(
                "unsupported config version {}",
                cfg.version
            )));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = self.to_yaml()?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn content_path(&self, root: &Path) -> PathBuf {
        paths::content_path(root, &self.content.path)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.content.path.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "content.path is empty".to_string(),
            });
        }

        if self.qa.placeholder_hosts.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "qa.placeholder_hosts is empty: only blank headshots will be flagged"
                    .to_string(),
            });
        }
        for (i, host) in self.qa.placeholder_hosts.iter().enumerate() {
            if host.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("qa.placeholder_hosts[{i}] is blank and will be ignored"),
                });
            }
        }

        let min = self.qa.min_avg_talking_points;
        if !min.is_finite() || min < 0.0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("qa.min_avg_talking_points must be a non-negative number, got {min}"),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.qa.placeholder_hosts, ["placeholder.com"]);
        assert_eq!(cfg.site.title, "NJ Politics");
    }

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.content.path = PathBuf::from("content/people.json");
        cfg.qa.min_avg_talking_points = 5.0;
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(
            loaded.content_path(dir.path()),
            dir.path().join("content/people.json")
        );
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".stump")).unwrap();
        std::fs::write(
            dir.path().join(".stump/config.yaml"),
            "qa:\n  placeholder_hosts: [placehold.co]\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.qa.placeholder_hosts, ["placehold.co"]);
        assert_eq!(cfg.qa.min_avg_talking_points, 3.0);
        assert_eq!(cfg.content, ContentConfig::default());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".stump")).unwrap();
        std::fs::write(dir.path().join(".stump/config.yaml"), "version: 2\n").unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(StumpError::InvalidConfig(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".stump")).unwrap();
        std::fs::write(dir.path().join(".stump/config.yaml"), "qa: [unclosed\n").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(StumpError::Yaml(_))));
    }

    #[test]
    fn default_config_validates_clean() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut cfg = Config::default();
        cfg.content.path = PathBuf::new();
        cfg.qa.placeholder_hosts = vec!["  ".to_string()];
        cfg.qa.min_avg_talking_points = -1.0;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 3);
        assert_eq!(
            warnings
                .iter()
                .filter(|w| w.level == WarnLevel::Error)
                .count(),
            2
        );
    }
}
