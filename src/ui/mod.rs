// UI module
// Splitter widgets and the demo event loop

pub mod app_view;
pub mod layout_calculator;
pub mod pane;
pub mod splitter_view;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use crate::core::{App, EventHandler};

pub use app_view::render_app;
pub use layout_calculator::{LayoutCalculator, PaneAreas};
pub use pane::Pane;
pub use splitter_view::SplitterView;
pub use styles::Styles;

/// Run the main application event loop
///
/// The first frame is drawn before the splitter mounts, so the container
/// rect is known when the initial size is computed.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.draw(|f| render_app(f, app))?;
    app.mount();

    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;
        app.after_render();

        // Handle events
        if event::poll(Duration::from_millis(250))? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);

            app.handle_event(app_event);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
