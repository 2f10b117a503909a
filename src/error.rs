use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagphotoError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cache directory not found: {0}")]
    CacheNotFound(String),

    #[error("cache incomplete, missing: {}", .0.join(", "))]
    CacheIncomplete(Vec<String>),

    #[error("catalog loaded but appears empty: {0}")]
    CatalogEmpty(String),

    #[error("magazine '{name}' not found (available: {})", .available.join(", "))]
    MagazineNotFound { name: String, available: Vec<String> },

    #[error("photography style '{name}' not found (available: {})", .available.join(", "))]
    StyleNotFound { name: String, available: Vec<String> },

    #[error("combination not found: {0}")]
    CombinationNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MagphotoError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MagphotoError::MagazineNotFound { .. }
                | MagphotoError::StyleNotFound { .. }
                | MagphotoError::CombinationNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MagphotoError>;
