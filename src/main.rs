use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{Write, stdout};
use std::path::PathBuf;

use droplens::App;
use droplens::config::{self, ConfigResult};
use droplens::drops::Dataset;
use droplens::export;
use droplens::filter::{FilterQuery, filter_drops, filter_stats};
use droplens::input::InputSource;

/// Interactive DROP log extractor
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Extract values from DROP log sections with live filters and global stats"
)]
struct Args {
    /// Input log file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Print the filtered global stats and exit
    #[arg(long)]
    print: bool,

    /// Print the filtered DROP records and exit
    #[arg(long, conflicts_with = "print")]
    drops: bool,

    /// Term filter: values separated by commas or whitespace
    #[arg(long, value_name = "QUERY", default_value = "")]
    terms: String,

    /// Occurrence filter: exact counts separated by commas or whitespace
    #[arg(long, value_name = "QUERY", default_value = "")]
    occurrences: String,

    /// Write the filtered stats as CSV to PATH
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Write the HTML report to PATH
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,
}

impl Args {
    fn is_headless(&self) -> bool {
        self.print || self.drops || self.csv.is_some() || self.html.is_some()
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/droplens-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/droplens-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DROPLENS DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();
    let source = InputSource::from_arg(args.input.clone());

    if args.is_headless() {
        return run_headless(&args, &source);
    }

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let terminal = init_terminal()?;

    // Deferred loading prevents blocking on large files/stdin
    let loader = source.spawn_loader();
    let app = App::new_with_loader(source, loader, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== DROPLENS DEBUG SESSION ENDED ===");

    Ok(())
}

/// Apply the filters once, print and/or write files, no terminal setup
fn run_headless(args: &Args, source: &InputSource) -> Result<()> {
    let text = source.read_sync()?;
    let dataset = Dataset::from_text(source.display_name(), &text);
    let query = FilterQuery::parse(&args.terms, &args.occurrences);

    let mut out = stdout().lock();

    if args.print {
        for stat in filter_stats(dataset.stats(), &query) {
            writeln!(out, "{}\t{}", stat.count, stat.value)?;
        }
    }

    if args.drops {
        for view in filter_drops(dataset.drops(), &query.terms) {
            writeln!(
                out,
                "DROP {} {} ({} items)",
                view.record.id(),
                view.record.time(),
                view.record.unique_values().len()
            )?;
            for value in &view.values {
                writeln!(out, "  {}", value)?;
            }
        }
    }

    if let Some(path) = &args.csv {
        let stats = filter_stats(dataset.stats(), &query);
        if !export::write_csv(path, &stats)? {
            eprintln!("Nothing to export: no values match the filters");
        }
    }

    if let Some(path) = &args.html {
        let now = chrono::Local::now().naive_local();
        if !export::write_report(path, &dataset, now)? {
            return Err(eyre!("No DROP records found, report not written"));
        }
    }

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Poll before render to load data from background thread
        app.poll_file_loader();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
