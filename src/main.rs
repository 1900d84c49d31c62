pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use klok::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{ClockEvent, ClockEventSource, CrosstermEventSource, FixedTicker, Runner, Ticker},
    session::{Practice, TargetSource},
    viewport::Viewport,
    TargetTime, WidgetOptions,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Frame, Terminal,
};
use std::{
    error::Error,
    fs::{self, File, OpenOptions},
    io::{self, stdin},
    path::{Path, PathBuf},
};

/// learn to read an analog clock by setting its hands
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Shows a time and asks you to set it on an analog clock face by dragging the hour and minute hands with the mouse."
)]
pub struct Cli {
    /// practice one fixed time (HH:MM, minutes in steps of 5) instead of random ones
    #[clap(short = 't', long)]
    time: Option<TargetTime>,

    /// keep the hands movable after the clock is solved
    #[clap(long)]
    no_lock: bool,

    /// read settings from this file instead of the default config location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn target_source(&self) -> TargetSource {
        match self.time {
            Some(t) => TargetSource::Fixed(t),
            None => TargetSource::Random,
        }
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Settings from the config file with command line flags applied on top
    fn widget_options(&self, config: &Config) -> WidgetOptions {
        let mut options = WidgetOptions::from(config);
        if self.no_lock {
            options.lock_on_solve = false;
        }
        options
    }
}

#[derive(Debug)]
pub struct App {
    pub practice: Practice,
}

impl App {
    pub fn new(cli: &Cli, config: Config) -> Self {
        Self {
            practice: Practice::new(cli.target_source(), cli.widget_options(&config)),
        }
    }
}

/// Send `log` output to a file when RUST_LOG is set; stderr belongs to the TUI.
/// Called before raw mode, so setup failures can still be reported there.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Some(path) = AppDirs::log_path() else {
        eprintln!("klok: RUST_LOG is set but no log directory could be determined");
        return;
    };
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("klok: cannot open log file {}: {}", path.display(), e);
            return;
        }
    };
    if let Err(e) = env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
    {
        eprintln!("klok: cannot initialise logging: {}", e);
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    init_logging();
    let config = cli.config_store().load();
    let mut app = App::new(&cli, config);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

#[derive(Debug, PartialEq)]
enum Action {
    Continue,
    Quit,
}

fn start_tui<B: Backend, E: ClockEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            ClockEvent::Tick => {
                if app.practice.celebration.is_active() {
                    app.practice.on_tick();
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            ClockEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            ClockEvent::Mouse(mouse) => {
                let size = terminal.size().unwrap_or_default();
                let area = Rect::new(0, 0, size.width, size.height);
                let viewport = Viewport::new(ui::clock_area(area));
                app.practice.on_mouse(mouse, &viewport);
                terminal.draw(|f| ui(app, f))?;
            }
            ClockEvent::Key(key) => {
                if on_key(app, key) == Action::Quit {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
            ClockEvent::Closed => {
                log::warn!("terminal input closed, exiting");
                break;
            }
        }
    }

    Ok(())
}

fn on_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('n') | KeyCode::Right => {
            app.practice.next_target();
            Action::Continue
        }
        _ => Action::Continue,
    }
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
