//! Layered configuration and path helpers.
//!
//! Uses Figment to merge built-in defaults, `himap.toml`, `himap.<env>.toml`
//! and `HIMAP_*` env vars (`__` separates nested keys). Provides helpers to
//! expand `~` and `${VAR}` and to resolve relative paths against a known
//! base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{LatLng, Viewport};

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Loads configuration relative to the current working directory.
    pub fn load() -> Result<Self> { Self::load_from(Path::new(".")) }

    pub fn load_from(base_dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base_dir.join("himap.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join("himap.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join("himap.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join("himap.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("HIMAP_").split("__"));

        let config = Self { figment, base_dir: base_dir.to_path_buf() };
        config.settings()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    /// Extracts and validates the full typed settings tree.
    pub fn settings(&self) -> Result<Settings> {
        let settings: Settings = self.figment.extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Dataset location with `~` and env vars expanded, relative paths
    /// resolved against the directory the config was loaded from.
    pub fn dataset_path(&self) -> Result<PathBuf> {
        let raw: String = self.get("data.dataset_path")?;
        Ok(resolve_with_base(&self.base_dir, raw))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub search: SearchSettings,
    pub map: MapSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub dataset_path: String,
}

impl Default for DataSettings {
    fn default() -> Self { Self { dataset_path: "data.json".to_string() } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self { Self { max_results: 20 } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub default_center: LatLng,
    pub default_level: u8,
    pub focused_level: u8,
    /// Clicking empty map space closes the detail card.
    pub dismiss_on_background_click: bool,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: LatLng { lat: 37.517_408_3, lng: 126.975_466_7 },
            default_level: 10,
            focused_level: 4,
            dismiss_on_background_click: false,
        }
    }
}

impl MapSettings {
    pub fn default_viewport(&self) -> Viewport { Viewport { center: self.default_center, level: self.default_level } }
}

impl Settings {
    fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(Error::InvalidConfig("search.max_results must be at least 1".to_string()));
        }
        if self.map.focused_level >= self.map.default_level {
            return Err(Error::InvalidConfig(format!(
                "map.focused_level ({}) must be tighter (lower) than map.default_level ({})",
                self.map.focused_level, self.map.default_level
            )));
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
