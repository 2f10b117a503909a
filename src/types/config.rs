use crate::error::MagphotoError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const DEFAULT_DISCOVERY_COUNT: usize = 5;
pub const DEFAULT_DISCOVERY_MIN_HARMONY: i32 = 7;
pub const DEFAULT_CACHE_DIR: &str = "cache";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MagphotoConfig {
    pub catalog: Option<CatalogConfig>,
    pub search: Option<SearchConfig>,
    pub discovery: Option<DiscoveryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub cache_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub default_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    pub count: Option<usize>,
    pub min_harmony: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryDefaults {
    pub count: usize,
    pub min_harmony: i32,
}

impl Default for DiscoveryDefaults {
    fn default() -> Self {
        Self {
            count: DEFAULT_DISCOVERY_COUNT,
            min_harmony: DEFAULT_DISCOVERY_MIN_HARMONY,
        }
    }
}

impl MagphotoConfig {
    pub fn cache_dir(&self) -> Option<&PathBuf> {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.cache_dir.as_ref())
    }

    pub fn search_limit(&self) -> usize {
        self.search
            .as_ref()
            .and_then(|search| search.default_limit)
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
    }

    pub fn discovery_defaults(&self) -> DiscoveryDefaults {
        let defaults = DiscoveryDefaults::default();
        match &self.discovery {
            Some(discovery) => DiscoveryDefaults {
                count: discovery.count.unwrap_or(defaults.count),
                min_harmony: discovery.min_harmony.unwrap_or(defaults.min_harmony),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), MagphotoError> {
        if let Some(cache_dir) = self.cache_dir() {
            if cache_dir.as_os_str().is_empty() {
                return Err(MagphotoError::ConfigParse(
                    "catalog.cache_dir must not be empty".to_string(),
                ));
            }
        }

        if let Some(limit) = self.search.as_ref().and_then(|search| search.default_limit) {
            if limit == 0 {
                return Err(MagphotoError::ConfigParse(
                    "search.default_limit must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(discovery) = &self.discovery {
            if discovery.count == Some(0) {
                return Err(MagphotoError::ConfigParse(
                    "discovery.count must be greater than 0".to_string(),
                ));
            }
            if let Some(min_harmony) = discovery.min_harmony {
                if !(0..=10).contains(&min_harmony) {
                    return Err(MagphotoError::ConfigParse(format!(
                        "discovery.min_harmony must be between 0 and 10 (found {min_harmony})"
                    )));
                }
            }
        }

        Ok(())
    }
}
