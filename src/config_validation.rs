// Configuration validation module

use log::warn;
use std::path::PathBuf;

use splitter_layout::core::layout_config::{default_config_path, load_config, parse_config};
use splitter_layout::core::{LayoutConfig, SplitterDefaults, SplitterOptions};

/// Config shipped inside the binary, used when the file on disk is unusable
const BUNDLED_CONFIG: &str = include_str!("config.yaml");

/// Everything the demo needs from configuration
pub struct ValidatedConfig {
    pub layout: LayoutConfig,
    pub options: SplitterOptions,
    pub mouse_enabled: bool,
}

/// Load and validate configuration with error recovery
///
/// A missing or malformed file falls back to the bundled config; invalid
/// splitter values fall back to the compiled defaults. Both are logged.
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> anyhow::Result<ValidatedConfig> {
    let path = config_path.unwrap_or_else(default_config_path);

    let layout = match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {:#}", e);
            warn!("Using bundled configuration");
            parse_config(BUNDLED_CONFIG)?
        }
    };

    let options = match layout.splitter.to_options() {
        Ok(options) => options,
        Err(e) => {
            warn!("Invalid splitter configuration: {:#}", e);
            warn!("Using compiled splitter defaults");
            SplitterOptions::from_defaults(&SplitterDefaults::default())
        }
    };
    let mouse_enabled = layout.splitter.defaults().mouse_enabled;

    Ok(ValidatedConfig { layout, options, mouse_enabled })
}
