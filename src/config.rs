use crate::github::client::DEFAULT_API_BASE;
use crate::search::SearchKind;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub github_token: Option<String>,
    pub api_base_url: String,
    pub default_kind: SearchKind,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base_url", &self.api_base_url)
            .field("default_kind", &self.default_kind)
            .field("log_level", &self.log_level)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            api_base_url: DEFAULT_API_BASE.to_string(),
            default_kind: SearchKind::User,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub kind: Option<SearchKind>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn load(overrides: Overrides) -> Self {
        match Self::figment(overrides).extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    fn figment(overrides: Overrides) -> Figment {
        let config_file = config_path();

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("GHLOOKUP_")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        if let Some(kind) = overrides.kind {
            figment = figment.merge(Serialized::default("default_kind", kind));
        }
        if let Some(path) = overrides.log_file {
            figment = figment.merge(Serialized::default("log_file", path));
        }

        figment
    }

    pub fn has_token(&self) -> bool {
        self.github_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Effective config as TOML, token redacted.
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.github_token.is_some() {
            shown.github_token = Some("[REDACTED]".to_string());
        }
        toml::to_string_pretty(&shown)
    }
}

pub fn config_path() -> PathBuf {
    config_dir().join("ghlookup").join("config.toml")
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    const VARS: &[&str] = &[
        "XDG_CONFIG_HOME",
        "GITHUB_TOKEN",
        "GHLOOKUP_API_BASE_URL",
        "GHLOOKUP_DEFAULT_KIND",
    ];

    fn with_config_home<F: FnOnce(&std::path::Path)>(f: F) {
        let dir = tempfile::tempdir().unwrap();
        for v in VARS {
            std::env::remove_var(v);
        }
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        f(dir.path());
        for v in VARS {
            std::env::remove_var(v);
        }
    }

    fn write_config(home: &std::path::Path, body: &str) {
        let dir = home.join("ghlookup");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), body).unwrap();
    }

    #[test]
    #[serial]
    fn defaults_without_sources() {
        with_config_home(|_| {
            let config = Config::load(Overrides::default());
            assert_eq!(config.api_base_url, DEFAULT_API_BASE);
            assert_eq!(config.default_kind, SearchKind::User);
            assert!(!config.has_token());
        });
    }

    #[test]
    #[serial]
    fn file_then_env_then_cli() {
        with_config_home(|home| {
            write_config(
                home,
                "api_base_url = \"http://file.example\"\ndefault_kind = \"repo\"\n",
            );
            let config = Config::load(Overrides::default());
            assert_eq!(config.api_base_url, "http://file.example");
            assert_eq!(config.default_kind, SearchKind::Repo);

            std::env::set_var("GHLOOKUP_API_BASE_URL", "http://env.example");
            let config = Config::load(Overrides::default());
            assert_eq!(config.api_base_url, "http://env.example");

            let config = Config::load(Overrides {
                kind: Some(SearchKind::User),
                log_file: None,
            });
            assert_eq!(config.default_kind, SearchKind::User);
        });
    }

    #[test]
    #[serial]
    fn github_token_env_is_picked_up_and_redacted() {
        with_config_home(|_| {
            std::env::set_var("GITHUB_TOKEN", "ghp_secret");
            let config = Config::load(Overrides::default());
            assert!(config.has_token());
            assert!(!format!("{config:?}").contains("ghp_secret"));
            assert!(!config.to_redacted_toml().unwrap().contains("ghp_secret"));
        });
    }

    #[test]
    #[serial]
    fn broken_file_falls_back_to_defaults() {
        with_config_home(|home| {
            write_config(home, "default_kind = \"organisation\"\n");
            let config = Config::load(Overrides::default());
            assert_eq!(config.default_kind, SearchKind::User);
        });
    }
}
