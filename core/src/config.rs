use serde::{Deserialize, Serialize};

/// Environment variable read by [`RouterConfig::from_env`].
pub const BASE_PATH_ENV: &str = "SIGNPOST_BASE_PATH";

/// Router settings that can be loaded from JSON or the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Prefix the application is served under, without a trailing slash.
    pub base_path: Option<String>,
}

impl RouterConfig {
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        let base_path: String = base_path.into();
        Self {
            base_path: normalize_base_path(&base_path),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    pub fn from_env() -> Self {
        match std::env::var(BASE_PATH_ENV) {
            Ok(base_path) => Self::with_base_path(base_path),
            Err(_) => Self::default(),
        }
    }

    /// Re-applies base path normalization, e.g. after deserializing.
    pub fn normalized(self) -> Self {
        Self {
            base_path: self.base_path.as_deref().and_then(normalize_base_path),
        }
    }
}

/// Drops trailing slashes; an empty result means no base path.
pub fn normalize_base_path(base_path: &str) -> Option<String> {
    let trimmed = base_path.trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
