// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use super::geometry::{Orientation, SizeUnit};

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Compiled-in splitter defaults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterDefaults {
    pub orientation: Orientation,
    pub size_unit: SizeUnit,
    /// Raw primary index, normalised by `PrimaryIndex::from_index`
    pub primary_index: i64,
    pub primary_min_size: f64,
    pub secondary_min_size: f64,
    /// Thickness of the rendered divider, in cells
    pub divider_size: f64,
    /// Enable mouse capture in the demo host
    pub mouse_enabled: bool,
}

impl Default for SplitterDefaults {
    fn default() -> Self {
        Self {
            orientation: Orientation::from_str(compiled::ORIENTATION).unwrap_or_default(),
            size_unit: SizeUnit::from_str(compiled::SIZE_UNIT).unwrap_or_default(),
            primary_index: compiled::PRIMARY_INDEX,
            primary_min_size: compiled::PRIMARY_MIN_SIZE,
            secondary_min_size: compiled::SECONDARY_MIN_SIZE,
            divider_size: compiled::DIVIDER_SIZE,
            mouse_enabled: compiled::MOUSE_ENABLED,
        }
    }
}
