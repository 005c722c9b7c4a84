// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{SplitterView, Styles};
use crate::constants::HWND_STATUS_BAR;
use crate::core::{App, LayoutNotification};

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Splitter
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    SplitterView::new(&app.controller, &app.children).render(f, chunks[1], &mut app.registry);
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let options = app.controller.options();
    let line = Line::from(vec![
        Span::styled(app.title.clone(), Styles::header()),
        Span::raw(format!(
            "  {:?} | {:?} | primary #{} | {} children",
            options.orientation(),
            options.size_unit(),
            options.primary_index().index(),
            app.children.len()
        )),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(f: &mut Frame, app: &mut App, area: Rect) {
    app.registry.register(Some(HWND_STATUS_BAR), area);

    let notification = match app.last_notification {
        Some(LayoutNotification::DragStarted) => "drag started".to_string(),
        Some(LayoutNotification::DragEnded) => "drag ended".to_string(),
        Some(LayoutNotification::SecondaryPaneSizeChanged(size)) => {
            format!("secondary size {}{}", size, app.controller.options().size_unit().suffix())
        }
        None => String::new(),
    };

    let line = Line::from(vec![
        Span::styled(app.status_line().to_string(), Styles::footer()),
        Span::raw("  "),
        Span::raw(notification),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
