//! tabbar-demo - interactive showcase for the tabbar widget
//!
//! Mounts a `TabBar` full screen with a handful of pages.
//!
//! Features:
//! - Switch tabs by mouse click or keyboard
//! - Cycle the built-in bar styles and themes at runtime
//! - Remembers style and theme in the config file
//!
//! Usage: tabbar-demo [--style NAME] [--theme NAME] [--no-save]

mod app;
mod config;
mod render;

use anyhow::{bail, Context, Result};
use app::App;
use config::{BarStyleName, Config};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tabbar::ThemeName;

/// Parsed command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    style: Option<BarStyleName>,
    theme: Option<ThemeName>,
    no_save: bool,
    help: bool,
    version: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Try 'tabbar-demo --help'");
            std::process::exit(2);
        }
    };

    if options.help {
        print_help();
        return Ok(());
    }

    if options.version {
        println!("tabbar-demo {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Run the application
    let result = run_app(options);

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "demo failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-v" | "--version" => options.version = true,
            "-n" | "--no-save" => options.no_save = true,
            "-s" | "--style" => {
                let value = iter.next().context("--style needs a value")?;
                options.style = Some(
                    BarStyleName::parse(value)
                        .with_context(|| format!("Unknown bar style '{}'", value))?,
                );
            }
            "-t" | "--theme" => {
                let value = iter.next().context("--theme needs a value")?;
                options.theme = Some(
                    ThemeName::parse(value)
                        .with_context(|| format!("Unknown theme '{}'", value))?,
                );
            }
            other => bail!("Unknown argument '{}'", other),
        }
    }

    Ok(options)
}

fn print_help() {
    println!(
        r#"tabbar-demo - Showcase for the tabbar widget

USAGE:
    tabbar-demo [OPTIONS]

OPTIONS:
    -s, --style NAME   Bar style: default, transparent, floating, plain
    -t, --theme NAME   Theme: gruvbox, nord, transparent
    -n, --no-save      Don't write style/theme changes to the config file
    -h, --help         Print help information
    -v, --version      Print version information

KEYBINDINGS:
    1-9              Select tab
    h/l, ←/→         Previous/next tab
    Click            Select tab under the mouse
    s                Cycle bar style
    t                Cycle theme
    ?                Help
    q                Quit

CONFIG:
    ~/.config/tabbar/config.toml

LOGS:
    <cache dir>/tabbar/tabbar-demo.log (filter with RUST_LOG)
"#
    );
}

/// Log to a file; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let log_dir = dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("tabbar");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("tabbar-demo.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(())
}

fn run_app(options: Options) -> Result<()> {
    init_logging().context("Failed to initialize logging")?;

    // Load configuration
    let mut config = Config::load()
        .context("Failed to load configuration")?;

    if let Some(style) = options.style {
        config.bar_style = style;
    }
    if let Some(theme) = options.theme {
        config.theme = theme;
    }

    tracing::info!(
        style = config.bar_style.as_str(),
        theme = config.theme.as_str(),
        spacing = config.item_spacing,
        "starting demo"
    );

    let mut app = App::new(config, !options.no_save);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!("demo exited");
    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            render::render(frame, app);
        })?;

        // Poll with a timeout so the clock tab keeps ticking
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
