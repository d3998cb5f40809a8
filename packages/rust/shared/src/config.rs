//! Application configuration for mdtut.
//!
//! User config lives at `~/.mdtut/mdtut.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MdtutError, Result};
use crate::types::Label;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "mdtut.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".mdtut";

// ---------------------------------------------------------------------------
// Config structs (matching mdtut.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Label selecting which blocks to extract. Empty selects every labeled block.
    #[serde(default)]
    pub label: String,

    /// Number of leading blocks emitted outside the subshell.
    #[serde(default)]
    pub preambled: usize,
}

// ---------------------------------------------------------------------------
// Extract config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime extraction settings, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Blocks carrying this label are extracted.
    pub label: Label,
    /// Leading blocks emitted outside the subshell; 0 disables the subshell.
    pub preambled: usize,
}

impl From<&AppConfig> for ExtractConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            label: Label::from_user(&config.defaults.label),
            preambled: config.defaults.preambled,
        }
    }
}

impl ExtractConfig {
    /// Apply CLI overrides on top of file-derived values.
    pub fn with_overrides(mut self, label: Option<&str>, preambled: Option<usize>) -> Self {
        if let Some(label) = label {
            self.label = Label::from_user(label);
        }
        if let Some(n) = preambled {
            self.preambled = n;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.mdtut/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| MdtutError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.mdtut/mdtut.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| MdtutError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| MdtutError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    init_config_in(&config_dir()?)
}

/// Write a default config file into `dir`, creating it as needed.
pub fn init_config_in(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| MdtutError::io(dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| MdtutError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| MdtutError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("label"));
        assert!(toml_str.contains("preambled"));
    }

    #[test]
    fn config_roundtrip() {
        let toml_str = r#"
[defaults]
label = "test"
preambled = 2
"#;
        let parsed: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(parsed.defaults.label, "test");
        assert_eq!(parsed.defaults.preambled, 2);

        let again = toml::to_string_pretty(&parsed).expect("serialize");
        let reparsed: AppConfig = toml::from_str(&again).expect("reparse");
        assert_eq!(reparsed.defaults.preambled, 2);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse empty");
        assert!(config.defaults.label.is_empty());
        assert_eq!(config.defaults.preambled, 0);
    }

    #[test]
    fn extract_config_from_app_config() {
        let app = AppConfig::default();
        let extract = ExtractConfig::from(&app);
        assert!(extract.label.is_any());
        assert_eq!(extract.preambled, 0);

        let extract = extract.with_overrides(Some("setup"), Some(3));
        assert_eq!(extract.label, Label::new("setup"));
        assert_eq!(extract.preambled, 3);
    }

    #[test]
    fn init_and_load_from_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = init_config_in(dir.path()).expect("init");
        assert!(path.ends_with(CONFIG_FILE_NAME));
        let loaded = load_config_from(&path).expect("load");
        assert_eq!(loaded.defaults.preambled, 0);
    }

    #[test]
    fn malformed_config_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[defaults\nlabel = ").expect("write");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, MdtutError::Config { .. }));
    }
}
