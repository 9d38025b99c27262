use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use cronexp_core::config::{CronexpConfig, OutputConfig, OutputFormat};
use tracing::{debug, warn};

mod output;

/// Expand a cron expression into the values each field matches.
#[derive(Parser, Debug)]
#[command(name = "cron-parser", version)]
#[command(override_usage = "cron-parser \"*/15 0 1,15 * 1-5 /usr/bin/find\"")]
struct Args {
    /// Five schedule fields and a command, as a single argument
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Label column width for table output (overrides config)
    #[arg(long)]
    label_width: Option<usize>,

    /// Config file (default: $CRONEXP_CONFIG, then ~/.cronexp/cronexp.toml)
    #[arg(long)]
    config: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cron_parser=warn,cronexp_core=warn,cronexp_parser=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit with status 2 from clap.
    let args = Args::parse();

    // load config: --config > CRONEXP_CONFIG env > ~/.cronexp/cronexp.toml
    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var("CRONEXP_CONFIG").ok());
    let config = CronexpConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
        warn!("Config load failed ({}), using defaults", e);
        CronexpConfig::default()
    });
    let output = resolve_output(config.output, &args);
    debug!(?output, "output settings resolved");

    match run(&args.expression, &output) {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(expression: &str, output: &OutputConfig) -> anyhow::Result<String> {
    let record = cronexp_parser::parse_expression(expression)?;
    output::render(&record, output)
}

/// Apply command-line overrides on top of the loaded config.
fn resolve_output(mut output: OutputConfig, args: &Args) -> OutputConfig {
    if let Some(format) = args.format {
        output.format = format.into();
    }
    if let Some(width) = args.label_width {
        output.label_width = width;
    }
    output
}
