// Pane Widget
// Bordered block for one splitter pane

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::Styles;
use crate::core::{PaneContent, PaneSpec};

pub struct Pane<'a> {
    spec: &'a PaneSpec,
    content: Option<&'a PaneContent>,
}

impl<'a> Pane<'a> {
    pub fn new(spec: &'a PaneSpec, content: Option<&'a PaneContent>) -> Self {
        Self { spec, content }
    }

    /// Block title; the secondary pane shows its formatted size
    pub fn title(&self) -> String {
        let name = self.content.map(|c| c.title.as_str()).unwrap_or_default();
        match self.spec.style_size() {
            Some(size) if name.is_empty() => size,
            Some(size) => format!("{} ({})", name, size),
            None => name.to_string(),
        }
    }
}

impl Widget for Pane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.spec.primary {
            Styles::pane_primary_border()
        } else {
            Styles::pane_border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(self.title(), Styles::pane_title()));

        let mut lines = Vec::new();
        if let Some(content) = self.content {
            lines.extend(content.body.lines().map(|l| Line::from(l.to_string())));
        }
        lines.push(Line::from(Span::styled(self.spec.class_name(), Styles::pane_detail())));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
