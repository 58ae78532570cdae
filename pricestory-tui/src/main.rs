//! PriceStory TUI — guided terminal tour of historical price data.
//!
//! Regions:
//! 1. Story header — scene position, title, description, nav affordances
//! 2. Chart — multi-series line chart for the active indicator group
//! 3. Selector — exploration group picker (guided scenes hide it)
//! 4. Status bar — dataset provenance or the load error

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use pricestory_core::config::StoryConfig;
use pricestory_tui::app::AppState;
use pricestory_tui::{input, persistence, ui};

#[derive(Parser)]
#[command(
    name = "pricestory",
    about = "Guided terminal tour of historical price data"
)]
struct Args {
    /// CSV file with a Date column and one column per indicator.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Story config (TOML). Defaults to the built-in 2020-2024 story.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use deterministic synthetic data instead of a CSV.
    #[arg(long, default_value_t = false)]
    synthetic: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config = match &args.config {
        Some(path) => StoryConfig::from_file(path)
            .with_context(|| format!("failed to load story config {}", path.display()))?,
        None => StoryConfig::default_story(),
    };

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pricestory")
        .join("state.json");

    // The dataset loads once, before the first frame. A failed load leaves
    // the viewer navigable with the error parked in the status bar.
    let mut app = AppState::new(&config, args.csv.as_deref(), args.synthetic)?;
    persistence::apply(&mut app, persistence::load(&state_path));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit.
    let _ = persistence::save(&state_path, &persistence::extract(&app));

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
