//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/trieviz/trieviz.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `TRIEVIZ_*` prefix (`TRIEVIZ_LAYOUT__SPACING=40`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::LayoutConfig;

/// File name of the persisted word list inside the data directory.
pub const WORDS_FILE_NAME: &str = "words.toml";

/// Unified configuration for trieviz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where the word list is persisted
    pub data_file: PathBuf,
    /// Layout spacing for the visual tree
    pub layout: LayoutConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Raw layout settings; `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLayoutSettings {
    pub spacing: Option<i32>,
    pub level_gap: Option<i32>,
    pub node_radius: Option<i32>,
    pub top_margin: Option<i32>,
    pub panel_width: Option<i32>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub layout: RawLayoutSettings,
}

impl RawLayoutSettings {
    fn apply_to(&self, base: &LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            spacing: self.spacing.unwrap_or(base.spacing),
            level_gap: self.level_gap.unwrap_or(base.level_gap),
            node_radius: self.node_radius.unwrap_or(base.node_radius),
            top_margin: self.top_margin.unwrap_or(base.top_margin),
            panel_width: self.panel_width.unwrap_or(base.panel_width),
        }
    }
}

/// Default word list location: `<XDG data dir>/trieviz/words.toml`.
fn default_data_file() -> PathBuf {
    ProjectDirs::from("", "", "trieviz")
        .map(|dirs| dirs.data_dir().join(WORDS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(WORDS_FILE_NAME))
}

/// Get the XDG config directory for trieviz.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "trieviz").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("trieviz.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in `data_file`.
    fn expand_paths(&mut self) {
        let raw = self.data_file.to_string_lossy().to_string();
        if let Ok(expanded) = shellexpand::full(&raw) {
            self.data_file = PathBuf::from(expanded.into_owned());
        }
    }

    /// Overlay specified values onto self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay
                .data_file
                .clone()
                .unwrap_or_else(|| self.data_file.clone()),
            layout: overlay.layout.apply_to(&self.layout),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(config_file, None)
    }

    /// Like [`Self::load`], reading `TRIEVIZ_*` variables from `vars` instead
    /// of the process environment.
    pub fn load_with_env(
        config_file: Option<&Path>,
        vars: Map<String, String>,
    ) -> Result<Self, ApplicationError> {
        Self::load_from(config_file, Some(vars))
    }

    fn load_from(
        config_file: Option<&Path>,
        env_vars: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("loading config {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current, env_vars)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply TRIEVIZ_* environment variables as explicit overrides.
    ///
    /// `TRIEVIZ_DATA_FILE` sets `data_file`, `TRIEVIZ_LAYOUT__SPACING` sets
    /// `layout.spacing`. `vars` replaces the process environment when given.
    fn apply_env_overrides(
        mut settings: Self,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("TRIEVIZ")
                .prefix_separator("_")
                .separator("__")
                .source(vars),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = PathBuf::from(val);
        }
        let layout = &mut settings.layout;
        for (key, field) in [
            ("layout.spacing", &mut layout.spacing),
            ("layout.level_gap", &mut layout.level_gap),
            ("layout.node_radius", &mut layout.node_radius),
            ("layout.top_margin", &mut layout.top_margin),
            ("layout.panel_width", &mut layout.panel_width),
        ] {
            if let Ok(val) = config.get_int(key) {
                *field = i32::try_from(val).map_err(|_| ApplicationError::Config {
                    message: format!("{} out of range: {}", key, val),
                })?;
            }
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# trieviz configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/trieviz/trieviz.toml
#   Explicit: --config <file>
#   Env:      TRIEVIZ_* environment variables (TRIEVIZ_LAYOUT__SPACING=40)

# Where the word list is stored
# data_file = "~/.local/share/trieviz/words.toml"

[layout]
# Horizontal distance per unit of subtree width
# spacing = 60

# Vertical distance between levels
# level_gap = 80

# Node radius; the root sits node_radius + top_margin below the top edge
# node_radius = 20
# top_margin = 50

# Width of the drawing area, the root is centered in it
# panel_width = 1200
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_default_layout() {
        let settings = Settings::load(None).expect("load defaults");
        assert!(settings.data_file.to_string_lossy().ends_with(WORDS_FILE_NAME));
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_values_inherited() {
        let base = Settings::default();
        let overlay: RawSettings = toml::from_str(
            r#"
[layout]
spacing = 40
"#,
        )
        .unwrap();

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.layout.spacing, 40);
        assert_eq!(merged.layout.level_gap, 80);
        assert_eq!(merged.data_file, base.data_file);
    }

    #[test]
    fn given_tilde_in_data_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            data_file: PathBuf::from("~/words.toml"),
            layout: LayoutConfig::default(),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(settings.data_file.starts_with(&home));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.data_file.is_none());
        assert!(raw.layout.spacing.is_none());
    }

    #[test]
    fn given_settings_when_to_toml_then_roundtrips() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
