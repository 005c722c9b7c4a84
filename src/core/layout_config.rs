// Runtime Configuration
// YAML loaded at startup; the `splitter:` section overrides the compiled defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::app_config::SplitterDefaults;
use super::geometry::{Orientation, SizeUnit};
use super::options::SplitterOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub splitter: SplitterSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub status_bar: StatusBarConfigYaml,
    #[serde(default)]
    pub panes: Vec<PaneConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
    #[serde(default)]
    pub resizing_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaneConfigYaml {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Optional overrides; anything left out keeps its compiled default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SplitterSection {
    pub orientation: Option<Orientation>,
    pub size_unit: Option<SizeUnit>,
    pub primary_index: Option<i64>,
    pub primary_min_size: Option<f64>,
    pub secondary_min_size: Option<f64>,
    pub secondary_initial_size: Option<f64>,
    pub custom_class_name: Option<String>,
    pub divider_size: Option<f64>,
    pub mouse_enabled: Option<bool>,
}

impl SplitterSection {
    /// Merge over the compiled defaults
    pub fn defaults(&self) -> SplitterDefaults {
        let base = SplitterDefaults::default();
        SplitterDefaults {
            orientation: self.orientation.unwrap_or(base.orientation),
            size_unit: self.size_unit.unwrap_or(base.size_unit),
            primary_index: self.primary_index.unwrap_or(base.primary_index),
            primary_min_size: self.primary_min_size.unwrap_or(base.primary_min_size),
            secondary_min_size: self.secondary_min_size.unwrap_or(base.secondary_min_size),
            divider_size: self.divider_size.unwrap_or(base.divider_size),
            mouse_enabled: self.mouse_enabled.unwrap_or(base.mouse_enabled),
        }
    }

    /// Build validated splitter options
    pub fn to_options(&self) -> Result<SplitterOptions> {
        let defaults = self.defaults();
        let mut options = SplitterOptions::default()
            .with_orientation(defaults.orientation)
            .with_size_unit(defaults.size_unit)
            .with_primary_index(defaults.primary_index)
            .with_min_sizes(defaults.primary_min_size, defaults.secondary_min_size)
            .context("invalid splitter minimum sizes")?
            .with_divider_size(defaults.divider_size)
            .context("invalid splitter divider size")?;

        if let Some(size) = self.secondary_initial_size {
            options = options
                .with_secondary_initial_size(size)
                .context("invalid splitter initial size")?;
        }
        if let Some(class_name) = &self.custom_class_name {
            options = options.with_custom_class_name(class_name.clone());
        }
        Ok(options)
    }
}

/// Path of the bundled config file
pub fn default_config_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("src");
    path.push("config.yaml");
    path
}

pub fn parse_config(contents: &str) -> Result<LayoutConfig> {
    serde_yaml::from_str(contents).context("failed to parse layout config")
}

pub fn load_config(path: &Path) -> Result<LayoutConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::PrimaryIndex;

    const MINIMAL: &str = r#"
application:
  title: "Demo"
  status_bar:
    default_text: "q quit"
"#;

    #[test]
    fn test_minimal_config_uses_compiled_defaults() {
        let config = parse_config(MINIMAL).unwrap();
        assert_eq!(config.application.title, "Demo");
        assert!(config.application.panes.is_empty());
        assert_eq!(config.application.status_bar.resizing_text, None);
        assert_eq!(config.splitter.defaults(), SplitterDefaults::default());
    }

    #[test]
    fn test_splitter_overrides() {
        let yaml = format!(
            "{MINIMAL}splitter:\n  orientation: vertical\n  size_unit: percentage\n  primary_index: 1\n  secondary_min_size: 10\n  secondary_initial_size: 30\n  custom_class_name: sidebar\n"
        );
        let options = parse_config(&yaml).unwrap().splitter.to_options().unwrap();

        assert_eq!(options.orientation(), Orientation::Vertical);
        assert_eq!(options.size_unit(), SizeUnit::Percentage);
        assert_eq!(options.primary_index(), PrimaryIndex::Second);
        assert_eq!(options.constraints().secondary_min_size(), 10.0);
        assert_eq!(options.secondary_initial_size(), Some(30.0));
        assert_eq!(options.custom_class_name(), Some("sidebar"));
    }

    #[test]
    fn test_out_of_range_primary_index_normalises() {
        let yaml = format!("{MINIMAL}splitter:\n  primary_index: 7\n");
        let options = parse_config(&yaml).unwrap().splitter.to_options().unwrap();
        assert_eq!(options.primary_index(), PrimaryIndex::First);
    }

    #[test]
    fn test_negative_min_size_is_rejected() {
        let yaml = format!("{MINIMAL}splitter:\n  primary_min_size: -5\n");
        let err = parse_config(&yaml).unwrap().splitter.to_options().unwrap_err();
        assert!(err.to_string().contains("minimum sizes"));
    }

    #[test]
    fn test_unknown_orientation_fails_to_parse() {
        let yaml = format!("{MINIMAL}splitter:\n  orientation: diagonal\n");
        assert!(parse_config(&yaml).is_err());
    }

    #[test]
    fn test_bundled_config_loads() {
        let config = load_config(&default_config_path()).unwrap();
        assert_eq!(config.application.panes.len(), 2);
        assert!(config.splitter.to_options().is_ok());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/layout.yaml")).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/layout.yaml"));
    }
}
