// Splitter Demo
// Two resizable panes in the terminal; drag the divider with the mouse

// MODULES ------------------>>

mod config_validation;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use anyhow::{Context, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use config_validation::load_and_validate_config;
use splitter_layout::core::App;
use splitter_layout::ui::run_app;

//--------------------------------------------------------<<

/// Log file name, written to the system temp directory
const LOG_FILE_NAME: &str = "splitter-demo.log";

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    // Optional config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_and_validate_config(config_path)?;
    let mut app = App::new(&config.layout, config.options);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Route log output to a file so it does not draw over the alternate screen
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
