// UI Styles
// Color schemes and styling for the splitter demo

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === Panes ===

    pub fn pane_primary_border() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn pane_border() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn pane_title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn pane_detail() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // === Divider ===

    pub fn divider_idle() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn divider_resizing() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}
