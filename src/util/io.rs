use crate::EPOCH;
use crate::consts::{DEFAULT_BENCH_MIRROR_SAMPLES, DEFAULT_BENCH_REPEATS, DEFAULT_WIDTH};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{Level, LevelFilter, log};
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use svg::Document;

#[derive(Parser)]
#[command(name = "bitbrush", about = "Generate and inspect bit patterns")]
pub struct MainCli {
    /// Number of significant bits
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH, help = "Bit width (1..=64)")]
    pub width: u32,

    /// Materialize sequences up front instead of computing them while iterating
    #[arg(short = 'b', long, help = "Use the batch strategy")]
    pub batch: bool,

    /// Log to stderr as well as the log file; stdout only ever carries command output
    #[arg(short = 'v', long, help = "Echo log lines to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl MainCli {
    pub fn log_echo(&self) -> LogEcho {
        match self.verbose {
            true => LogEcho::Stderr,
            false => LogEcho::Off,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Single set bit moving from LSB to MSB
    SweepOnes,
    /// Single cleared bit moving from LSB to MSB
    SweepZeros,
    /// Every step-th bit switched on, cumulatively
    ToggleSparse {
        #[arg(short = 's', long, help = "Distance between toggled bits (defaults to 3)")]
        step: Option<usize>,
    },
    /// Bit pairs symmetric around the center
    Scan,
    /// Reverse the bit order of a value
    Mirror { value: u64 },
    /// Count set bits of a value
    Count { value: u64 },
    /// Render a value in binary
    Show { value: u64 },
}

#[derive(Parser)]
#[command(name = "bitbrush-bench", about = "Time lazy vs batch pattern generation")]
pub struct BenchCli {
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH, help = "Bit width (1..=64)")]
    pub width: u32,

    #[arg(short = 'm', long, default_value_t = DEFAULT_BENCH_MIRROR_SAMPLES, help = "Number of values to mirror")]
    pub mirror_samples: usize,

    #[arg(short = 'r', long, default_value_t = DEFAULT_BENCH_REPEATS, help = "Repetitions per operation")]
    pub repeats: usize,

    #[arg(short = 'o', long, default_value = "output", help = "Directory for the chart, report and log")]
    pub output: String,
}

/// Where log lines go besides the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEcho {
    Stdout,
    /// Keeps stdout free for command output
    Stderr,
    /// Log file only
    Off,
}

/// `[LEVEL] [hh:mm:ss] <thread>`, time measured since [`EPOCH`]
pub fn log_prefix(level: Level, elapsed: Duration, thread_name: &str) -> String {
    let secs = elapsed.as_secs();
    format!(
        "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
        level,
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        thread_name
    )
}

pub fn init_logger(level_filter: LevelFilter, log_file_path: &Path, echo: LogEcho) -> Result<()> {
    //start every run with a fresh log file
    let _ = fs::remove_file(log_file_path);
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let prefix = log_prefix(
                record.level(),
                EPOCH.elapsed(),
                handle.name().unwrap_or("-"),
            );
            out.finish(format_args!("{:<25}{}", prefix, message))
        })
        .level(level_filter)
        .chain(fern::log_file(log_file_path).context("could not open log file")?);
    let dispatch = match echo {
        LogEcho::Stdout => dispatch.chain(std::io::stdout()),
        LogEcho::Stderr => dispatch.chain(std::io::stderr()),
        LogEcho::Off => dispatch,
    };
    dispatch.apply()?;
    log!(Level::Info, "[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path, log_lvl: Level) -> Result<()> {
    //make sure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("could not create parent directory for svg file")?;
    }
    svg::save(path, document)?;
    log!(log_lvl, "[IO] svg exported to file://{}", display_path(path)?);
    Ok(())
}

pub fn write_json(json: &impl Serialize, path: &Path, log_lvl: Level) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("could not create parent directory for json file")?;
    }
    let file = File::create(path).context("could not create json file")?;
    serde_json::to_writer_pretty(file, json)?;
    log!(log_lvl, "[IO] json exported to file://{}", display_path(path)?);
    Ok(())
}

fn display_path(path: &Path) -> Result<String> {
    let canonical = fs::canonicalize(path).context("could not canonicalize path")?;
    canonical
        .to_str()
        .map(str::to_owned)
        .context("could not convert path to str")
}
