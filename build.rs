// Build script - reads config.yaml at compile time and generates splitter defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const ORIENTATION: &str = "{orientation}";
pub const SIZE_UNIT: &str = "{size_unit}";
pub const PRIMARY_INDEX: i64 = {primary_index};
pub const PRIMARY_MIN_SIZE: f64 = {primary_min_size:?};
pub const SECONDARY_MIN_SIZE: f64 = {secondary_min_size:?};
pub const DIVIDER_SIZE: f64 = {divider_size:?};
pub const MOUSE_ENABLED: bool = {mouse_enabled};
"#,
        orientation = config.orientation,
        size_unit = config.size_unit,
        primary_index = config.primary_index,
        primary_min_size = config.primary_min_size,
        secondary_min_size = config.secondary_min_size,
        divider_size = config.divider_size,
        mouse_enabled = config.mouse_enabled,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    orientation: String,
    size_unit: String,
    primary_index: i64,
    primary_min_size: f64,
    secondary_min_size: f64,
    divider_size: f64,
    mouse_enabled: bool,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            orientation: "horizontal".to_string(),
            size_unit: "pixel".to_string(),
            primary_index: 0,
            primary_min_size: 0.0,
            secondary_min_size: 0.0,
            divider_size: 1.0,
            mouse_enabled: true,
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_splitter = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Top-level keys switch sections
        if !line.starts_with(' ') && !line.starts_with('\t') {
            in_splitter = trimmed.starts_with("splitter:");
            continue;
        }

        if !in_splitter {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "orientation" => {
                    if matches!(value, "horizontal" | "vertical") {
                        config.orientation = value.to_string();
                    }
                }
                "size_unit" => {
                    if matches!(value, "pixel" | "percentage") {
                        config.size_unit = value.to_string();
                    }
                }
                "primary_index" => config.primary_index = value.parse().unwrap_or(0),
                "primary_min_size" => config.primary_min_size = parse_size(value, 0.0),
                "secondary_min_size" => config.secondary_min_size = parse_size(value, 0.0),
                "divider_size" => config.divider_size = parse_size(value, 1.0),
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    let value = value.trim_matches('"').trim_matches('\'');

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

/// Sizes must be finite and non-negative to be usable as compiled defaults
fn parse_size(s: &str, fallback: f64) -> f64 {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => fallback,
    }
}
