use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::error;

use flowstep::logging::{init_logging, LogLevel, LoggingConfig};
use flowstep::settings::Settings;
use flowstep::{Flow, FlowError, FlowOptions, Source};

#[derive(Parser, Debug)]
#[command(name = "flowstep")]
#[command(version)]
#[command(about = "Interactive pause/skip/stop steering for batch iteration loops")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Append log records to this file in addition to stderr
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Load demo defaults from a TOML settings file
    #[arg(long, short, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Step through a numeric range, skipping a configurable band
    List {
        /// Number of items to iterate
        #[arg(long)]
        length: Option<usize>,

        /// Skip items strictly greater than this bound
        #[arg(long)]
        skip_lower: Option<usize>,

        /// Skip items strictly smaller than this bound
        #[arg(long)]
        skip_upper: Option<usize>,

        /// Pause once after delivering this index and prompt for a command
        #[arg(long, value_name = "INDEX")]
        pause_at: Option<usize>,
    },

    /// Probe files in order, pausing on unreadable paths
    Files {
        /// Paths to process
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("failed to load settings: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let verbose = cli.verbose > 0 || settings.verbose;
    let level = if cli.quiet {
        LogLevel::Error
    } else if verbose {
        LogLevel::from(cli.verbose.max(1))
    } else {
        LogLevel::Info
    };
    let mut logging = LoggingConfig::new().with_level(level);
    if let Some(path) = cli.log_file.clone().or_else(|| settings.log_file.clone()) {
        logging = logging.with_log_file(path);
    }
    if let Err(err) = init_logging(logging) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let outcome = match cli.command {
        Commands::List {
            length,
            skip_lower,
            skip_upper,
            pause_at,
        } => run_list(
            length.unwrap_or(settings.list.length),
            skip_lower.unwrap_or(settings.list.skip_lower),
            skip_upper.unwrap_or(settings.list.skip_upper),
            pause_at,
            verbose,
        ),
        Commands::Files { paths } => run_files(paths, verbose),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Steps a numeric range, dropping values inside the skip band. With
/// `--pause-at`, the flow pauses after that index is delivered and the
/// console prompt decides how to continue.
fn run_list(
    length: usize,
    skip_lower: usize,
    skip_upper: usize,
    pause_at: Option<usize>,
    verbose: bool,
) -> Result<(), FlowError> {
    let options = FlowOptions::new().with_verbose(verbose);
    let mut flow = Flow::new(Source::reiterable(0..length), options)
        .with_skip_condition(move |x: &usize| *x > skip_lower && *x < skip_upper);
    let controller = flow.controller();

    for (index, value) in flow.by_ref() {
        println!("item {index}: {value}");
        if pause_at == Some(index) {
            controller.pause(None);
        }
    }
    Ok(())
}

/// Probes each path in order. An unreadable path pauses the flow with
/// an explanatory message so the operator can continue, skip the next
/// file, or stop the run.
fn run_files(paths: Vec<PathBuf>, verbose: bool) -> Result<(), FlowError> {
    let options = FlowOptions::new().with_verbose(verbose);
    let mut flow = Flow::new(Source::reiterable(paths), options);
    let controller = flow.controller();

    while let Some((index, path)) = flow.try_next()? {
        println!("processing {} (item {index})", path.display());
        if let Err(err) = std::fs::metadata(&path) {
            controller.pause(Some(&format!(
                "{} is paused. Error: {err}",
                path.display()
            )));
        }
    }
    Ok(())
}
