// Splitter View
// Draws the panes and the divider, and records their rects for hit testing

use ratatui::{layout::Rect, widgets::Widget, Frame};

use super::layout_calculator::{LayoutCalculator, PaneAreas};
use super::pane::Pane;
use super::Styles;
use crate::core::{LayoutController, Orientation, PaneContent, RectRegistry};

pub struct SplitterView<'a> {
    controller: &'a LayoutController,
    children: &'a [PaneContent],
}

impl<'a> SplitterView<'a> {
    pub fn new(controller: &'a LayoutController, children: &'a [PaneContent]) -> Self {
        Self { controller, children }
    }

    /// Render into `area` and register the container and divider rects
    ///
    /// The divider's entry is removed when no divider is drawn, so a stale
    /// rect can never start a drag.
    pub fn render(&self, frame: &mut Frame, area: Rect, registry: &mut RectRegistry) -> PaneAreas {
        let plan = self.controller.render_plan(self.children.len());
        let areas = LayoutCalculator::resolve(area, &plan, self.controller.options().divider_size());

        registry.register(Some(self.controller.container_name()), area);
        match areas.divider {
            Some(divider) => {
                registry.register(Some(self.controller.divider_name()), divider);
            }
            None => {
                registry.unregister_by_name(self.controller.divider_name());
            }
        }

        for (spec, pane_area) in plan.panes.iter().zip(&areas.panes) {
            let content = spec.child.and_then(|i| self.children.get(i));
            frame.render_widget(Pane::new(spec, content), *pane_area);
        }

        if let Some(divider) = areas.divider {
            let orientation = plan.panes.first().map(|p| p.orientation).unwrap_or_default();
            frame.render_widget(
                DividerBar { orientation, resizing: self.controller.is_resizing() },
                divider,
            );
        }

        areas
    }
}

/// The draggable bar between the panes
struct DividerBar {
    orientation: Orientation,
    resizing: bool,
}

impl Widget for DividerBar {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let (symbol, style) = match (self.orientation, self.resizing) {
            (Orientation::Horizontal, false) => ("│", Styles::divider_idle()),
            (Orientation::Horizontal, true) => ("┃", Styles::divider_resizing()),
            (Orientation::Vertical, false) => ("─", Styles::divider_idle()),
            (Orientation::Vertical, true) => ("━", Styles::divider_resizing()),
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol(symbol).set_style(style);
            }
        }
    }
}
