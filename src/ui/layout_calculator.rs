// Layout Calculator
// Resolves a render plan and a float pane size into terminal cells

use ratatui::layout::Rect;

use crate::core::geometry::{Orientation, SizeUnit};
use crate::core::RenderPlan;

/// Cell areas of the rendered panes, in render order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneAreas {
    pub panes: Vec<Rect>,
    pub divider: Option<Rect>,
}

pub struct LayoutCalculator;

impl LayoutCalculator {
    /// Split `area` according to `plan`
    ///
    /// The secondary size is rounded to whole cells and clamped to what is
    /// left after the divider, so a pixel size stored for a larger container
    /// still fits. The primary pane takes the remainder.
    pub fn resolve(area: Rect, plan: &RenderPlan, divider_size: f64) -> PaneAreas {
        let Some(orientation) = plan.panes.first().map(|p| p.orientation) else {
            return PaneAreas { panes: Vec::new(), divider: None };
        };

        if !plan.divider || plan.panes.len() < 2 {
            return PaneAreas { panes: vec![area], divider: None };
        }

        let extent = match orientation {
            Orientation::Horizontal => area.width,
            Orientation::Vertical => area.height,
        };
        let divider_cells = to_cells(divider_size, extent);
        let available = extent - divider_cells;

        let secondary = plan.secondary();
        let secondary_size = secondary.and_then(|p| p.size).unwrap_or(0.0);
        let secondary_cells = match secondary.map(|p| p.size_unit) {
            Some(SizeUnit::Percentage) => to_cells(secondary_size * f64::from(extent) / 100.0, available),
            _ => to_cells(secondary_size, available),
        };
        let primary_cells = available - secondary_cells;

        let first_cells = if plan.panes[0].primary { primary_cells } else { secondary_cells };
        let second_cells = available - first_cells;

        let (first, divider, second) = match orientation {
            Orientation::Horizontal => (
                Rect::new(area.x, area.y, first_cells, area.height),
                Rect::new(area.x + first_cells, area.y, divider_cells, area.height),
                Rect::new(area.x + first_cells + divider_cells, area.y, second_cells, area.height),
            ),
            Orientation::Vertical => (
                Rect::new(area.x, area.y, area.width, first_cells),
                Rect::new(area.x, area.y + first_cells, area.width, divider_cells),
                Rect::new(area.x, area.y + first_cells + divider_cells, area.width, second_cells),
            ),
        };

        PaneAreas { panes: vec![first, second], divider: Some(divider) }
    }
}

/// Round to whole cells within [0, max]
fn to_cells(size: f64, max: u16) -> u16 {
    let rounded = size.round();
    if !(rounded > 0.0) {
        0
    } else if rounded >= f64::from(max) {
        max
    } else {
        rounded as u16
    }
}
