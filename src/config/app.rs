// src/config/app.rs
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::resource::FALLBACK_LANGUAGE;

pub const DEFAULT_CONFIG_PATH: &str = "config/recommender.toml";
pub const DEFAULT_LIMIT: usize = 10;

pub const ENV_CONFIG_PATH: &str = "RECOMMENDER_CONFIG_PATH";
pub const ENV_DEFAULT_LANGUAGE: &str = "RECOMMENDER_DEFAULT_LANGUAGE";
pub const ENV_DEFAULT_LIMIT: &str = "RECOMMENDER_DEFAULT_LIMIT";
pub const ENV_CATALOG_PATH: &str = "RECOMMENDER_CATALOG_PATH";
pub const ENV_ADMIN_TOKEN: &str = "RECOMMENDER_ADMIN_TOKEN";
pub const ENV_HOT_RELOAD: &str = "RECOMMENDER_HOT_RELOAD";

fn default_language() -> String {
    FALLBACK_LANGUAGE.to_string()
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Language used when a request carries none.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Result cap for idea recommendations when `limit` is absent.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// JSON catalog file; the built-in seed is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Bearer token for admin routes. Unset → admin routes refuse everything.
    #[serde(default)]
    pub admin_token: Option<String>,
    #[serde(default)]
    pub hot_reload: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_limit: default_limit(),
            catalog_path: None,
            admin_token: None,
            hot_reload: false,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let mut cfg: AppConfig = toml::from_str(s)?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml_str(&data).with_context(|| format!("parsing {}", path.display()))
    }

    /// Resolve config the way the service boots:
    /// 1) $RECOMMENDER_CONFIG_PATH (must exist)
    /// 2) config/recommender.toml (optional)
    /// 3) defaults
    ///
    /// then RECOMMENDER_* env vars override individual fields.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut cfg = match env::var(ENV_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(anyhow!(
                        "{ENV_CONFIG_PATH} points to non-existent path {}",
                        pb.display()
                    ));
                }
                Self::load_from_file(&pb)?
            }
            Err(_) => {
                let p = PathBuf::from(DEFAULT_CONFIG_PATH);
                if p.exists() {
                    Self::load_from_file(&p)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env_overrides();
        cfg.sanitize();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var(ENV_DEFAULT_LANGUAGE) {
            self.default_language = v;
        }
        if let Ok(v) = env::var(ENV_DEFAULT_LIMIT) {
            match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.default_limit = n,
                _ => warn!(value = %v, "ignoring invalid {ENV_DEFAULT_LIMIT}"),
            }
        }
        if let Ok(v) = env::var(ENV_CATALOG_PATH) {
            self.catalog_path = Some(PathBuf::from(v));
        }
        if let Ok(v) = env::var(ENV_ADMIN_TOKEN) {
            self.admin_token = Some(v);
        }
        if let Ok(v) = env::var(ENV_HOT_RELOAD) {
            self.hot_reload = v == "1";
        }
    }

    fn sanitize(&mut self) {
        self.default_language = self.default_language.trim().to_string();
        if self.default_language.is_empty() {
            self.default_language = default_language();
        }
        if self.default_limit == 0 {
            self.default_limit = default_limit();
        }
        if self
            .admin_token
            .as_deref()
            .is_some_and(|t| t.trim().is_empty())
        {
            self.admin_token = None;
        }
        if self
            .catalog_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.catalog_path = None;
        }
    }

    /// Hot reload needs both the flag and a dev environment.
    pub fn hot_reload_active(&self) -> bool {
        self.hot_reload && crate::telemetry::is_dev_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_with_partial_fields_uses_defaults() {
        let cfg = AppConfig::from_toml_str(r#"default_limit = 5"#).unwrap();
        assert_eq!(cfg.default_limit, 5);
        assert_eq!(cfg.default_language, "en");
        assert!(cfg.admin_token.is_none());
    }

    #[test]
    fn sanitize_repairs_zero_limit_and_blank_values() {
        let cfg = AppConfig::from_toml_str(
            r#"
default_language = "  "
default_limit = 0
admin_token = ""
"#,
        )
        .unwrap();
        assert_eq!(cfg.default_language, "en");
        assert_eq!(cfg.default_limit, DEFAULT_LIMIT);
        assert!(cfg.admin_token.is_none());
    }

    #[test]
    fn unknown_toml_types_are_errors() {
        assert!(AppConfig::from_toml_str(r#"default_limit = "ten""#).is_err());
    }
}
