use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tuitype::{
    config::{Config, ConfigStore, FileConfigStore},
    logging::{self, LogConfig, LogLevel},
    runtime::{AppEventSource, CrosstermEventSource, Runner},
    App, TimeLimit,
};

/// a minimal timed typing test for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A minimal timed typing test: type the words before the clock runs out and get your words per minute and mistakes at the end."
)]
pub struct Cli {
    /// seconds per test, 10 to 300 in steps of 5 (defaults to the saved setting)
    #[clap(short = 't', long)]
    time_limit: Option<TimeLimit>,

    /// number of words to draw for each test (defaults to the saved setting)
    #[clap(short = 'n', long)]
    number_of_words: Option<usize>,

    /// write logs at this level (TUITYPE_LOG overrides)
    #[clap(long, value_enum)]
    log_level: Option<LogLevel>,

    /// log file location
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// do not write the time limit back to the config file
    #[clap(long)]
    no_save: bool,
}

impl Cli {
    /// Stored preferences with any flags layered on top
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(limit) = self.time_limit {
            config.time_limit_secs = limit.as_secs();
        }
        if let Some(n) = self.number_of_words {
            config.number_of_words = n.max(1);
        }
        config
    }

    fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level,
            file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _log_guard = logging::init(&cli.log_config())?;

    let store = FileConfigStore::new();
    let config = cli.apply_to(store.load());
    tracing::info!(
        time_limit = config.time_limit_secs,
        words = config.number_of_words,
        config = %store.path().display(),
        "starting"
    );

    let mut app = App::new(config);
    if !cli.no_save {
        app = app.with_store(Box::new(store));
    }

    install_panic_hook();
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app, Runner::new(CrosstermEventSource::new()));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend, E: AppEventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: Runner<E>,
) -> Result<(), Box<dyn Error>> {
    while !app.should_quit() {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
        let event = runner.step(app.next_timeout());
        app.handle(event);
    }
    tracing::info!("quit");
    Ok(())
}

/// Leave raw mode before the default hook prints, or the message is garbled
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
