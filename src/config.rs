use crate::error::{MagphotoError, Result};
use crate::types::config::{MagphotoConfig, DEFAULT_CACHE_DIR};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "magphoto.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".magphoto/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/magphoto/config.toml";
pub const CACHE_DIR_ENV: &str = "MAGAZINE_CACHE_DIR";

pub fn load_config(root: &Path) -> Result<Option<MagphotoConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<MagphotoConfig>> {
    let layers = [
        global_path.map(Path::to_path_buf),
        Some(root.join(DEFAULT_CONFIG_FILE)),
        Some(root.join(DEFAULT_LOCAL_FILE)),
    ];

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    for path in layers.iter().flatten() {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    if !found {
        return Ok(None);
    }

    let cfg: MagphotoConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| MagphotoError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

/// Cache directory precedence: command line, then `MAGAZINE_CACHE_DIR`, then
/// `catalog.cache_dir` (relative to `root`), then `root/cache`.
pub fn resolve_cache_dir(
    root: &Path,
    cli_override: Option<&Path>,
    env_override: Option<OsString>,
    config: Option<&MagphotoConfig>,
) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    if let Some(value) = env_override.filter(|value| !value.is_empty()) {
        return PathBuf::from(value);
    }
    match config.and_then(MagphotoConfig::cache_dir) {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => root.join(path),
        None => root.join(DEFAULT_CACHE_DIR),
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    tracing::debug!(path = %path.display(), "merged config layer");
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| MagphotoError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
