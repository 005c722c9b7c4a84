// Splitter Options
// Construction-time configuration for a splitter layout

use super::app_config::SplitterDefaults;
use super::geometry::{Orientation, SizeUnit};

/// Error type for splitter option validation
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Minimum sizes must be finite and non-negative
    #[error("{pane} pane minimum size must be a non-negative number, got {value}")]
    InvalidMinSize { pane: &'static str, value: f64 },
    /// Initial secondary size must be finite and non-negative
    #[error("secondary initial size must be a non-negative number, got {0}")]
    InvalidInitialSize(f64),
    /// Divider thickness must be finite and non-negative
    #[error("divider size must be a non-negative number, got {0}")]
    InvalidDividerSize(f64),
}

fn is_valid_size(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Which of the two rendered panes is logically primary
///
/// This says nothing about where the pane sits relative to the divider
/// during a drag; see `PointerAnchor` for the positional flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryIndex {
    #[default]
    First,
    Second,
}

impl PrimaryIndex {
    /// Normalise any integer: 1 selects the second pane, everything else the first
    pub fn from_index(index: i64) -> Self {
        if index == 1 {
            PrimaryIndex::Second
        } else {
            PrimaryIndex::First
        }
    }

    pub fn index(self) -> usize {
        match self {
            PrimaryIndex::First => 0,
            PrimaryIndex::Second => 1,
        }
    }

    pub fn swapped(self) -> Self {
        match self {
            PrimaryIndex::First => PrimaryIndex::Second,
            PrimaryIndex::Second => PrimaryIndex::First,
        }
    }
}

/// Minimum sizes for the primary and secondary pane, in the configured unit
/// Fields are private to ensure validation - use getters to access values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeConstraints {
    primary_min_size: f64,
    secondary_min_size: f64,
}

impl SizeConstraints {
    pub fn new(primary_min_size: f64, secondary_min_size: f64) -> Result<Self, OptionsError> {
        if !is_valid_size(primary_min_size) {
            return Err(OptionsError::InvalidMinSize { pane: "primary", value: primary_min_size });
        }
        if !is_valid_size(secondary_min_size) {
            return Err(OptionsError::InvalidMinSize { pane: "secondary", value: secondary_min_size });
        }
        Ok(Self { primary_min_size, secondary_min_size })
    }

    pub fn primary_min_size(&self) -> f64 {
        self.primary_min_size
    }

    pub fn secondary_min_size(&self) -> f64 {
        self.secondary_min_size
    }
}

/// The subset of options read by the sizing function
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizingPolicy {
    pub orientation: Orientation,
    pub size_unit: SizeUnit,
    pub primary_index: PrimaryIndex,
    pub constraints: SizeConstraints,
}

/// Splitter layout options
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterOptions {
    orientation: Orientation,
    size_unit: SizeUnit,
    primary_index: PrimaryIndex,
    constraints: SizeConstraints,
    secondary_initial_size: Option<f64>,
    custom_class_name: Option<String>,
    divider_size: f64,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self::from_defaults(&SplitterDefaults::default())
    }
}

impl SplitterOptions {
    /// Build options from compiled defaults, repairing anything invalid
    pub fn from_defaults(defaults: &SplitterDefaults) -> Self {
        let constraints = SizeConstraints::new(defaults.primary_min_size, defaults.secondary_min_size)
            .unwrap_or_default();
        let divider_size = if is_valid_size(defaults.divider_size) {
            defaults.divider_size
        } else {
            1.0
        };
        Self {
            orientation: defaults.orientation,
            size_unit: defaults.size_unit,
            primary_index: PrimaryIndex::from_index(defaults.primary_index),
            constraints,
            secondary_initial_size: None,
            custom_class_name: None,
            divider_size,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_size_unit(mut self, size_unit: SizeUnit) -> Self {
        self.size_unit = size_unit;
        self
    }

    /// Set the primary pane from a raw index (normalised, never fails)
    pub fn with_primary_index(mut self, index: i64) -> Self {
        self.primary_index = PrimaryIndex::from_index(index);
        self
    }

    pub fn with_min_sizes(mut self, primary: f64, secondary: f64) -> Result<Self, OptionsError> {
        self.constraints = SizeConstraints::new(primary, secondary)?;
        Ok(self)
    }

    pub fn with_secondary_initial_size(mut self, size: f64) -> Result<Self, OptionsError> {
        if !is_valid_size(size) {
            return Err(OptionsError::InvalidInitialSize(size));
        }
        self.secondary_initial_size = Some(size);
        Ok(self)
    }

    pub fn with_custom_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.custom_class_name = Some(class_name.into());
        self
    }

    pub fn with_divider_size(mut self, size: f64) -> Result<Self, OptionsError> {
        if !is_valid_size(size) {
            return Err(OptionsError::InvalidDividerSize(size));
        }
        self.divider_size = size;
        Ok(self)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size_unit(&self) -> SizeUnit {
        self.size_unit
    }

    pub fn primary_index(&self) -> PrimaryIndex {
        self.primary_index
    }

    pub fn constraints(&self) -> SizeConstraints {
        self.constraints
    }

    pub fn secondary_initial_size(&self) -> Option<f64> {
        self.secondary_initial_size
    }

    pub fn custom_class_name(&self) -> Option<&str> {
        self.custom_class_name.as_deref()
    }

    pub fn divider_size(&self) -> f64 {
        self.divider_size
    }

    pub fn sizing_policy(&self) -> SizingPolicy {
        SizingPolicy {
            orientation: self.orientation,
            size_unit: self.size_unit,
            primary_index: self.primary_index,
            constraints: self.constraints,
        }
    }
}
