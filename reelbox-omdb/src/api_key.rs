use std::path::{Path, PathBuf};

use crate::error::FetchError;

/// Environment variable checked before the config file.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// An OMDb API key together with where it was found.
#[derive(Clone)]
pub struct ApiKey {
    value: String,
    source: KeySource,
}

/// Where the API key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Passed explicitly (e.g., a CLI flag).
    Explicit,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Explicit => write!(f, "command line"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &mask_value(&self.value))
            .field("source", &self.source)
            .finish()
    }
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    omdb: Option<OmdbConfig>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct OmdbConfig {
    api_key: Option<String>,
}

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: KeySource::Explicit,
        }
    }

    /// Load the key from the environment or the config file.
    ///
    /// Priority: `$OMDB_API_KEY` > `[omdb] api_key` in the config file.
    pub fn load() -> Result<Self, FetchError> {
        Self::resolve(std::env::var(API_KEY_ENV).ok(), config_path().as_deref())
    }

    /// Resolve a key from an already-read env value and a config file path.
    pub fn resolve(env_value: Option<String>, config: Option<&Path>) -> Result<Self, FetchError> {
        if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
            return Ok(Self {
                value: value.trim().to_string(),
                source: KeySource::EnvVar(API_KEY_ENV),
            });
        }

        if let Some(value) = config.and_then(read_config_key) {
            return Ok(Self {
                value,
                source: KeySource::ConfigFile,
            });
        }

        Err(FetchError::config(format!(
            "OMDb API key not found. Set ${API_KEY_ENV} or run 'reelbox config set-key <KEY>'"
        )))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> &KeySource {
        &self.source
    }

    /// The key with all but its first two characters hidden.
    pub fn masked(&self) -> String {
        mask_value(&self.value)
    }
}

/// Determine where a key would be loaded from, without requiring one.
pub fn key_source() -> KeySource {
    ApiKey::load()
        .map(|k| k.source)
        .unwrap_or(KeySource::Missing)
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("reelbox").join("config.toml"))
}

/// Save the API key to the config file at the default location.
pub fn save_to_file(api_key: &str) -> Result<PathBuf, FetchError> {
    let path =
        config_path().ok_or_else(|| FetchError::config("Could not determine config directory"))?;
    save_to_path(&path, api_key)?;
    Ok(path)
}

/// Save the API key into `path`, creating parent directories as needed.
///
/// Other sections already in the file are preserved.
pub fn save_to_path(path: &Path, api_key: &str) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut doc: toml::Value = std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| toml::Value::Table(Default::default()));

    let table = doc
        .as_table_mut()
        .ok_or_else(|| FetchError::config("config root is not a table"))?;
    let omdb = table
        .entry("omdb")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let omdb = omdb
        .as_table_mut()
        .ok_or_else(|| FetchError::config("[omdb] is not a table"))?;
    omdb.insert(
        "api_key".to_string(),
        toml::Value::String(api_key.trim().to_string()),
    );

    let serialized = toml::to_string_pretty(&doc)
        .map_err(|e| FetchError::config(format!("Failed to serialize config: {e}")))?;
    std::fs::write(path, serialized)?;
    Ok(())
}

fn read_config_key(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let config: ConfigFile = match toml::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring unreadable config {}: {e}", path.display());
            return None;
        }
    };
    config
        .omdb?
        .api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

fn mask_value(s: &str) -> String {
    let prefix: String = s.chars().take(2).collect();
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{prefix}****")
    }
}
