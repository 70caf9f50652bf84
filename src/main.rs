mod error;
mod input;
mod model;
mod pipeline;
mod reducers;
mod report;
mod selftest;
mod tracing;

use std::time::Duration;

use clap::{ArgGroup, Parser};

use crate::error::AppError;
use crate::input::transport::HttpTransport;
use crate::input::{DEFAULT_BASE_URL, QueryMode};
use crate::pipeline::stage1_fetch::{FetchParams, run_stage1};
use crate::pipeline::stage2_reduce::reduce;
use crate::pipeline::stage3_report::write_report;

#[derive(Debug, Parser)]
#[command(name = "kira-assocstats", version)]
#[command(
    about = "Summarize Open Targets overall association scores for one target or disease."
)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(false)
        .args(["target", "disease", "test"])
))]
struct Cli {
    /// Filter associations by target identifier.
    #[arg(short = 't', long, value_name = "ID")]
    target: Option<String>,

    /// Filter associations by disease identifier.
    #[arg(short = 'd', long, value_name = "ID")]
    disease: Option<String>,

    /// Run the built-in self-test against a known target.
    #[arg(long)]
    test: bool,

    #[arg(
        long,
        value_name = "URL",
        env = "ASSOC_STATS_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    base_url: String,

    /// Request timeout; waits indefinitely when unset.
    #[arg(
        long,
        value_name = "SECS",
        env = "ASSOC_STATS_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: Option<u64>,

    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = crate::tracing::LOG_LEVELS
    )]
    log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    mode: QueryMode,
    base_url: String,
    timeout: Option<Duration>,
}

impl RunConfig {
    fn from_cli(cli: Cli) -> Result<Self, AppError> {
        Ok(Self {
            mode: resolve_mode(cli.target, cli.disease, cli.test)?,
            base_url: cli.base_url,
            timeout: cli.timeout_secs.map(Duration::from_secs),
        })
    }
}

fn main() {
    let cli = Cli::parse();
    crate::tracing::init(&cli.log_level);
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = RunConfig::from_cli(cli)?;
    match &config.mode {
        QueryMode::Target(id) => summarize("target", id, &config),
        QueryMode::Disease(id) => summarize("disease", id, &config),
        QueryMode::SelfTest => {
            selftest::run_self_test(&config.base_url, config.timeout)?;
            Ok(())
        }
    }
}

fn resolve_mode(
    target: Option<String>,
    disease: Option<String>,
    test: bool,
) -> Result<QueryMode, AppError> {
    match (target, disease, test) {
        (Some(id), None, false) => Ok(QueryMode::Target(id)),
        (None, Some(id), false) => Ok(QueryMode::Disease(id)),
        (None, None, true) => Ok(QueryMode::SelfTest),
        _ => Err(AppError::Usage(
            "exactly one of --target, --disease or --test is required".to_string(),
        )),
    }
}

fn summarize(filter_key: &'static str, id: &str, config: &RunConfig) -> Result<(), AppError> {
    let transport = HttpTransport::new(config.timeout)?;
    let stage1 = run_stage1(
        &FetchParams {
            base_url: &config.base_url,
            filter_key,
            id,
        },
        &transport,
    )?;
    let text = reduce(stage1.scores)?;
    write_report(&text, &mut std::io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
