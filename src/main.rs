// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Terminal,
};

mod app;
mod config;
mod data;
mod events;
mod source;
mod ui;

use app::App;
use crate::config::Settings;
use data::FilterKey;
use source::{FileSource, HttpSource, ItemSource};
use ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "mintview")]
#[command(about = "Terminal gallery for browsing NFT collection metadata")]
struct Args {
    /// Path to the collection document
    #[arg(short, long, default_value = "items.json", conflicts_with = "url")]
    file: PathBuf,

    /// Fetch the collection document from an HTTP endpoint instead
    #[arg(short, long)]
    url: Option<String>,

    /// Filter active at startup (all, 45, 90, white, blue);
    /// unrecognized keys fall back to "all"
    #[arg(long)]
    filter: Option<String>,

    /// Export the filtered listing to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Path to a settings file (defaults to ./mintview.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme override: auto, dark, or light
    #[arg(long)]
    theme: Option<String>,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?;

    let log_file = args.log_file.as_deref().or(settings.log_file.as_deref());
    init_logging(log_file)?;

    let filter_key = args.filter.as_deref().unwrap_or(&settings.default_filter);
    let initial_filter = FilterKey::from_key(filter_key);

    let source: Box<dyn ItemSource> = match &args.url {
        Some(url) => Box::new(HttpSource::new(url)?),
        None => Box::new(FileSource::new(&args.file)),
    };

    let theme_name = args.theme.as_deref().unwrap_or(&settings.theme).to_string();

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(source, initial_filter, &export_path);
    }

    run_tui(source, initial_filter, &theme_name, &settings)
}

/// Initialize tracing output to a file, if one is configured.
///
/// The TUI owns the terminal, so there is no console logging.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

/// Load the collection and write the filtered listing to a JSON file.
fn export_to_file(
    source: Box<dyn ItemSource>,
    filter: FilterKey,
    export_path: &Path,
) -> Result<()> {
    let mut app = App::new(source, filter);
    if !app.reload() {
        anyhow::bail!(
            "Load failed: {}",
            app.load_error.as_deref().unwrap_or("unknown error")
        );
    }

    app.export_visible(export_path)?;
    println!(
        "Exported {} of {} items to: {}",
        app.visible.len(),
        app.items.len(),
        export_path.display()
    );
    Ok(())
}

/// Run the TUI with the given source and settings.
fn run_tui(
    source: Box<dyn ItemSource>,
    initial_filter: FilterKey,
    theme_name: &str,
    settings: &Settings,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and perform the single startup load
    let mut app = App::new(source, initial_filter);
    app.theme = Theme::by_name(theme_name);
    app.card_width = settings.card_width;
    app.reload();

    // Run the main loop
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

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    let mut last_area = Rect::default();

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            last_area = area;

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Filter bar
                Constraint::Min(8),    // Gallery grid
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_filter_bar(frame, app, chunks[1]);
            ui::gallery::render(frame, app, chunks[2]);
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render detail overlay if an item is selected
            if app.is_detail_open() {
                ui::detail::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse, last_area),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
