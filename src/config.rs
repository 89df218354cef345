use crate::error::{MirrorError, Result};
use crate::types::config::MirrorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "repomirror.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".repomirror/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repomirror/config.toml";

pub fn load_config(root: &Path) -> Result<MirrorConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, repository and local layers in that order. Every layer is
/// optional; with none present the defaults are returned.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<MirrorConfig> {
    let mut merged = Value::Table(Map::new());
    let mut layers = 0usize;
    if let Some(path) = global_path {
        layers += merge_file_if_exists(&mut merged, path)?;
    }
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    debug!(root = %root.display(), layers, "configuration layers merged");

    let cfg: MirrorConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| MirrorError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<usize> {
    if !path.is_file() {
        return Ok(0);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(1)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| MirrorError::ConfigParse(format!("{}: {}", path.display(), e)))
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
