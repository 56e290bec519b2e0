use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, watch};

use emojicon::{
    model::{IconSlot, IconText},
    services::{
        accelerometer::{spawn_accelerometer, TiltControl},
        persist::{self, spawn_persist_service, PersistRequest},
    },
    sensors::SensorHub,
    state::IconTextState,
    store::TextStore,
    utils, App,
};

mod config;
mod handlers;
mod ui;

use config::Config;

/// Six shortcut icons on a simulated watch face
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/emojicon-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Database file holding the icon texts
    #[arg(long)]
    db: Option<String>,

    /// Screen to open at start, e.g. "selection/2" or "fullScreenDisplay/Hi"
    #[arg(long)]
    route: Option<String>,

    /// Keep the simulated watch slowly turning
    #[arg(long)]
    simulate_tilt: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the stored icon texts as JSON
    Dump,
    /// Store text for an icon without opening the UI
    Set {
        /// Icon slot, 1-6
        slot: u8,
        /// Text to show on the icon
        text: String,
    },
}

/// Pointer press waiting for its release, to tell taps from long-presses
#[derive(Debug, Clone, Copy)]
pub struct PointerPress {
    pub slot: IconSlot,
    pub at: Instant,
}

/// Terminal-side state wrapped around the core `App`
pub struct Runtime {
    pub app: App,

    /// Subscription the UI renders icon texts from
    texts_rx: watch::Receiver<IconText>,

    tilt: TiltControl,

    /// Side of the virtual watch canvas in dp
    canvas_size: f32,
    long_press: Duration,

    /// Where the watch face was last drawn, for pointer hit testing
    face_area: Option<Rect>,
    pointer: Option<PointerPress>,
}

impl Runtime {
    fn new(app: App, tilt: TiltControl, config: &Config) -> Self {
        let texts_rx = app.texts().subscribe();
        Self {
            app,
            texts_rx,
            tilt,
            canvas_size: config.canvas_size,
            long_press: Duration::from_millis(config.long_press_ms),
            face_area: None,
            pointer: None,
        }
    }

    /// Latest icon texts, marking the subscription as seen
    pub fn icon_texts(&mut self) -> IconText {
        if self.texts_rx.has_changed().unwrap_or(false) {
            log::debug!("Icon texts changed");
        }
        self.texts_rx.borrow_and_update().clone()
    }
}

fn init_logging(debug: bool) -> Result<()> {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    if !debug && !from_env {
        return Ok(());
    }

    // The terminal UI owns stdout/stderr, so logs always go to the file
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
        .context("opening debug log")?;

    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    Ok(())
}

fn dump_texts(db_path: &Path) -> Result<()> {
    let store = TextStore::open(db_path)?;
    println!("{}", serde_json::to_string_pretty(&store.load())?);
    Ok(())
}

/// Check `set` arguments the same way the text editor does
fn validate_set_args(slot: u8, text: &str) -> Result<IconSlot> {
    let Some(slot) = IconSlot::new(slot) else {
        anyhow::bail!("Icon slot must be between 1 and 6, got {}", slot);
    };
    if text.is_empty() {
        anyhow::bail!("Icon text must not be empty");
    }
    Ok(slot)
}

async fn set_text(db_path: &Path, slot: u8, text: String) -> Result<()> {
    let slot = validate_set_args(slot, &text)?;

    let store = TextStore::open(db_path)?;
    let initial = store.load();
    let persist_tx = spawn_persist_service(store);

    let state = IconTextState::new(initial, persist_tx.clone());
    state.update_text_for_icon(slot, text);
    persist::flush(&persist_tx).await;

    println!("Icon {} set", slot);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;
    log::debug!("Debug mode enabled");

    let config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            log::debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => Config::default(),
    };

    let db_path = args
        .db
        .map(PathBuf::from)
        .or_else(|| config.db_path.clone())
        .unwrap_or_else(TextStore::default_path);
    log::debug!("Using text store at {}", db_path.display());

    match args.command {
        Some(Command::Dump) => return dump_texts(&db_path),
        Some(Command::Set { slot, text }) => return set_text(&db_path, slot, text).await,
        None => {}
    }

    let store = TextStore::open(&db_path)?;
    let initial = store.load();
    log::info!("Loaded {} icon texts", initial.len());
    let persist_tx = spawn_persist_service(store);

    let sensors = SensorHub::new();
    let tilt = TiltControl::new();
    let sensor_task = spawn_accelerometer(
        sensors.clone(),
        tilt.clone(),
        Duration::from_millis(config.sensor_interval_ms.max(1)),
        config.simulate_tilt || args.simulate_tilt,
    );

    let app = App::new(IconTextState::new(initial, persist_tx.clone()), sensors)
        .with_keep_awake_window(Duration::from_secs(config.keep_awake_secs));
    let mut runtime = Runtime::new(app, tilt, &config);

    if let Some(route) = args.route.as_deref() {
        runtime.app.open_route(route, Instant::now());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut runtime).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    sensor_task.abort();
    drop(runtime);
    shutdown_persistence(persist_tx).await;

    result
}

/// Let queued saves finish before the process exits
async fn shutdown_persistence(persist_tx: mpsc::UnboundedSender<PersistRequest>) {
    persist::flush(&persist_tx).await;
    log::debug!("Pending icon text writes flushed");
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    runtime: &mut Runtime,
) -> Result<()> {
    loop {
        runtime.app.tick(Instant::now());

        terminal.draw(|f| {
            ui::render(f, runtime);
        })?;

        if runtime.app.should_quit() {
            break;
        }

        // Short poll so the rotation keeps animating between key presses
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(runtime, key),
                Event::Mouse(mouse) => handlers::handle_mouse(runtime, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
