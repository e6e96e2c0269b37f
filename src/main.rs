//! Xpchart - Entry Point
//!
//! Loads configuration and records, then either dumps the computed series
//! as JSON or runs the terminal chart viewer.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;

use xpchart::config::{config_to_ron, load_config, load_config_from, AppConfig};
use xpchart::data::load_records;
use xpchart::series::{build_all, summarize, ChartSet, ProfileSummary};
use xpchart::ui::App;

/// How long to wait for input before checking for a redraw
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Experience and level progression charts in the terminal
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "xpchart", version)]
struct CliArgs {
    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON export of xp transactions
    #[arg(long)]
    records: Option<PathBuf>,

    /// Login shown in the profile panel
    #[arg(long)]
    login: Option<String>,

    /// Print the profile and computed series as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Print the effective config as RON and exit
    #[arg(long)]
    print_config: bool,
}

impl CliArgs {
    /// Apply overrides on top of the loaded config
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(records) = &self.records {
            config.records_path = records.clone();
        }
        if let Some(login) = &self.login {
            config.login = login.clone();
        }
        config
    }
}

/// JSON shape printed by `--dump`
#[derive(Serialize)]
struct Dump<'a> {
    profile: &'a ProfileSummary,
    charts: &'a ChartSet,
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    // Log to a file so output does not interfere with the TUI
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("xpchart.log")
    {
        Ok(log_file) => {
            builder.target(env_logger::Target::Pipe(Box::new(log_file)));
        }
        Err(e) => eprintln!("Warning: cannot open xpchart.log ({}), logging to stderr", e),
    }

    builder.init();
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    init_logging();
    log::info!("Starting Xpchart v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let config = args.apply(config);

    if args.print_config {
        println!("{}", config_to_ron(&config)?);
        return Ok(());
    }

    let records = load_records(&config.records_path)
        .with_context(|| format!("invalid records in {:?}", config.records_path))?;
    let summary = summarize(config.login.clone(), &records);
    log::info!(
        "{}: {} projects, {} xp, level {}",
        summary.login,
        records.len(),
        summary.total_xp,
        summary.level
    );

    if args.dump {
        let charts = build_all(&records);
        let dump = Dump {
            profile: &summary,
            charts: &charts,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let mut app = App::new(records, summary, config.viewport, config.initial_chart);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Viewer exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Xpchart shut down cleanly");
    result
}

/// Redraw on input or resize, otherwise wait
fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            // Only handle key press events, not releases
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match app.handle_input(key) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => log::warn!("Input handling error: {}", e),
                }
                dirty = true;
            }
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("xpchart").chain(list.iter().copied()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["--records", "xp.json", "--login", "KRaken", "--dump"]).unwrap();
        assert_eq!(parsed.records, Some(PathBuf::from("xp.json")));
        assert_eq!(parsed.login.as_deref(), Some("KRaken"));
        assert!(parsed.dump);
        assert!(!parsed.print_config);
        assert_eq!(parsed.config, None);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(args(&[]).unwrap(), CliArgs::default());
        assert!(args(&["--print-config"]).unwrap().print_config);
    }

    #[test]
    fn test_parse_args_errors() {
        use clap::error::ErrorKind;

        assert!(args(&["--records"]).is_err());
        assert_eq!(args(&["--verbose"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert_eq!(args(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_overrides_apply() {
        let parsed = args(&["--login", "alem"]).unwrap();
        let config = parsed.apply(AppConfig::default());
        assert_eq!(config.login, "alem");
        assert_eq!(config.records_path, PathBuf::from("records.json"));
    }
}
