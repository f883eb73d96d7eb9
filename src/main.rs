//! Argand - a terminal-based 2D point-series plotter.

use anyhow::Result;
use argand::app::App;
use argand::ui;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "argand")]
#[command(about = "A terminal-based 2D point-series plotter", long_about = None)]
struct Args {
    /// Path to the point-series file or directory to open
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Argand");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.file);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Argand exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // File browser mode
                if app.file_browser_mode {
                    match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                        // Navigation
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.browser_up();
                        }
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.browser_down();
                        }

                        // Select/Open
                        (KeyModifiers::NONE, KeyCode::Enter)
                        | (KeyModifiers::NONE, KeyCode::Char('l'))
                        | (KeyModifiers::NONE, KeyCode::Right) => {
                            app.browser_select();
                        }

                        // Go to parent directory
                        (KeyModifiers::NONE, KeyCode::Char('h'))
                        | (KeyModifiers::NONE, KeyCode::Left) => {
                            app.browser_parent();
                        }

                        // Show hidden files
                        (KeyModifiers::NONE, KeyCode::Char('.')) => {
                            app.toggle_hidden();
                        }

                        // Back to the plot if something is loaded
                        (KeyModifiers::NONE, KeyCode::Esc) => {
                            if app.series.is_some() {
                                app.file_browser_mode = false;
                            }
                        }

                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Display toggles
                    (KeyModifiers::NONE, KeyCode::Char('a')) => {
                        app.toggle_axis();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('m')) => {
                        app.toggle_markers();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('s')) => {
                        app.toggle_highlight();
                    },

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('o')) => {
                        app.open_file_browser_at_current();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('r')) => {
                        app.reload();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_summary();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, a=axis, m=markers, s=highlight, o=open, r=reload, y=copy, T=theme".to_string();
                    },

                    // Escape - clear error message
                    (KeyModifiers::NONE, KeyCode::Esc) => {
                        app.error_message = None;
                    },

                    _ => {},
                }
            }
        }
    }
}
