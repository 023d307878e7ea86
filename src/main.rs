//! gitmon - terminal viewer for git history
//!
//! Binary entry point for the TUI application.

use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gitmon::app::App;
use gitmon::config::{Config, Overrides};
use gitmon::git::{FormatProfile, GitExecutor};

/// Environment variable holding the tracing filter
const LOG_FILTER_ENV: &str = "GITMON_LOG";

#[derive(Parser)]
#[command(name = "gitmon")]
#[command(about = "Browse and filter the commit history of a git repository")]
#[command(version)]
struct Args {
    /// Repository to show (defaults to the configured path, then ".")
    repo: Option<PathBuf>,

    /// Config file (defaults to <config dir>/gitmon/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output layout requested from git log
    #[arg(long, value_enum)]
    profile: Option<FormatProfile>,

    /// Filter button label; repeat for several buttons
    #[arg(long = "filter", value_name = "LABEL")]
    filters: Vec<String>,

    /// Read at most this many commits
    #[arg(short = 'n', long)]
    max_count: Option<usize>,

    /// Write logs to this file (level from GITMON_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(self) -> Overrides {
        Overrides {
            repo_path: self.repo,
            profile: self.profile,
            filter_labels: self.filters,
            max_count: self.max_count,
            log_file: self.log_file,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?.with_overrides(args.overrides());
    init_logging(&config)?;

    // Repository access failures are fatal and reported before the TUI starts
    GitExecutor::with_repo_path(config.repo_path.clone())
        .check_repository()
        .wrap_err_with(|| format!("cannot open {}", config.repo_path.display()))?;

    let terminal = ratatui::init();
    // Restores the terminal on every exit path, including early `?` returns
    let _restore = scopeguard::guard((), |_| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
    });
    execute!(stdout(), EnableMouseCapture)?;

    run(terminal, config)
}

/// Install a file-backed tracing subscriber when a log file is configured
///
/// The terminal is owned by the UI, so without a file nothing is logged.
fn init_logging(config: &Config) -> color_eyre::Result<()> {
    let Some(ref path) = config.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    tracing::info!(repo = %config.repo_path.display(), profile = config.profile.name(), "starting");
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let mut app = App::new(config);

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a 200ms timeout so expired notifications disappear without input.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Mouse(mouse) => {
                app.on_mouse_event(mouse);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
