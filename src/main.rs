use anyhow::Result;
use clap::Parser;
use logsift::config::{self, Config};
use logsift::shell::{Shell, ShellOptions};
use logsift::LogAnalyzer;
use std::io;
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "logsift", version, about = "Interactive log analyzer: error frequency and keyword search")]
struct Args {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Load the built-in sample data before starting
    #[arg(long)]
    sample: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config_path = match args.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };
    debug!("using config at {:?}", config_path);

    let mut config = Config::load_or_create(&config_path)?;
    if args.no_color {
        config.display.color_output = false;
    }
    if args.sample {
        config.startup.load_sample_data = true;
    }

    let mut analyzer = LogAnalyzer::new();
    if config.startup.load_sample_data {
        analyzer.load_sample_data();
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(
        &mut analyzer,
        stdin.lock(),
        io::stdout(),
        ShellOptions::from(&config),
    );
    shell.run()
}
