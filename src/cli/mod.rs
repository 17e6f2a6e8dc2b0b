pub mod report;

use std::{fmt::Display, path::PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use report::{make_report, ReportOptions};
use tracing::level_filters::LevelFilter;

use crate::{
    api::HttpApiClient,
    config::Config,
    report::render::DurationFormat,
    utils::{
        clock::{Clock, DefaultClock},
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DurationStyle {
    Seconds,
    Human,
}

impl From<DurationStyle> for DurationFormat {
    fn from(value: DurationStyle) -> Self {
        match value {
            DurationStyle::Seconds => Self::Seconds,
            DurationStyle::Human => Self::Human,
        }
    }
}

impl Display for DurationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationStyle::Seconds => write!(f, "seconds"),
            DurationStyle::Human => write!(f, "human"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "teamreport", version, long_about = None)]
#[command(about = "Renders time tracked by an organization as an HTML table", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config.json", help = "Path to the json config")]
    config: PathBuf,
    #[arg(
        short,
        long,
        conflicts_with = "yesterday",
        help = "Day to report on (yyyy-mm-dd). Defaults to today"
    )]
    date: Option<NaiveDate>,
    #[arg(short, long, help = "Report on the day before today")]
    yesterday: bool,
    #[arg(
        short,
        long,
        help = "Where to write the report. Defaults to output.html in the temporary directory"
    )]
    output: Option<PathBuf>,
    #[arg(
        long,
        help = "Only include members of the organization. Can also be enabled in the config"
    )]
    filter_members: bool,
    #[arg(long, default_value_t = DurationStyle::Seconds, help = "How durations are printed in the table")]
    format: DurationStyle,
    #[arg(long, help = "Enable trace logging")]
    log: bool,
    #[arg(long, help = "Also write logs into daily rotated files in this directory")]
    log_dir: Option<PathBuf>,
}

fn default_output_path() -> PathBuf {
    std::env::temp_dir().join("output.html")
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, args.log_dir.as_deref(), logging_level)?;

    let clock = DefaultClock;
    let day = if args.yesterday {
        None
    } else {
        Some(args.date.unwrap_or_else(|| clock.today()))
    };

    let config = Config::load(&args.config).await?;
    let client = HttpApiClient::new(&config).context("Failed to create api client")?;

    let options = ReportOptions {
        organization: config.organization.clone(),
        day,
        output: args.output.unwrap_or_else(default_output_path),
        filter_members: args.filter_members || config.filter_members,
        format: args.format.into(),
    };

    make_report(&client, &options, &clock).await?;
    println!("Wrote: {}", options.output.display());
    Ok(())
}
