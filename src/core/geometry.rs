// Geometry
// Bounding boxes, pointer positions and the axis/unit selectors used by sizing

use serde::Deserialize;

/// Read-only snapshot of an element's bounding box
///
/// Values are `f64` so percentage results keep full precision. On a terminal
/// one unit is one cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// Whether a position falls inside the box (right and bottom edges excluded)
    pub fn contains(&self, position: Position) -> bool {
        position.left >= self.left
            && position.left < self.left + self.width
            && position.top >= self.top
            && position.top < self.top + self.height
    }
}

impl From<ratatui::layout::Rect> for Rect {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self {
            top: f64::from(rect.y),
            left: f64::from(rect.x),
            width: f64::from(rect.width),
            height: f64::from(rect.height),
        }
    }
}

/// Pointer coordinates at a moment in time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Centre of a terminal cell (column, row)
    ///
    /// A cell covers `[c, c + 1)`, so a pointer on the divider's cell sits
    /// on the divider's centre.
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self {
            left: f64::from(column) + 0.5,
            top: f64::from(row) + 0.5,
        }
    }
}

/// Axis along which the two panes are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Panes side by side, sizing reads `left`/`width`
    #[default]
    Horizontal,
    /// Panes stacked, sizing reads `top`/`height`
    Vertical,
}

impl Orientation {
    /// Extent of a rect along the active axis
    pub fn extent(self, rect: &Rect) -> f64 {
        match self {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }

    /// Near edge of a rect along the active axis
    pub fn origin(self, rect: &Rect) -> f64 {
        match self {
            Orientation::Horizontal => rect.left,
            Orientation::Vertical => rect.top,
        }
    }

    /// Pointer coordinate along the active axis
    pub fn coordinate(self, position: Position) -> f64 {
        match self {
            Orientation::Horizontal => position.left,
            Orientation::Vertical => position.top,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }

    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Unit of stored and returned pane sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    /// Absolute units (cells)
    #[default]
    Pixel,
    /// 0-100 fraction of the container extent
    Percentage,
}

impl SizeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Pixel => "px",
            SizeUnit::Percentage => "%",
        }
    }

    pub fn is_percentage(self) -> bool {
        self == SizeUnit::Percentage
    }

    pub fn toggled(self) -> Self {
        match self {
            SizeUnit::Pixel => SizeUnit::Percentage,
            SizeUnit::Percentage => SizeUnit::Pixel,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pixel" => Some(SizeUnit::Pixel),
            "percentage" => Some(SizeUnit::Percentage),
            _ => None,
        }
    }
}
