use anyhow::{Context, Result};
use bitbrush::config::DEFAULT_BENCH_CONFIG;
use bitbrush::consts::{LOG_LEVEL_FILTER_DEBUG, LOG_LEVEL_FILTER_RELEASE};
use bitbrush::util::chart::{Bar, bar_chart};
use bitbrush::util::io::{self, BenchCli, LogEcho};
use bitbrush::util::stats::calculate_median;
use bitbrush::{Pattern, PatternEngine, Strategy};
use clap::Parser;
use itertools::Itertools;
use log::{Level, info};
use serde::Serialize;
use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
struct BenchReport {
    system_time: String,
    width: u32,
    n_repeats: usize,
    n_mirror_samples: usize,
    /// median wall-clock duration per operation, in microseconds
    results: Vec<Bar>,
}

fn main() -> Result<()> {
    let args = BenchCli::parse();

    let mut config = DEFAULT_BENCH_CONFIG;
    config.brush.width = args.width;
    config.n_mirror_samples = args.mirror_samples;
    config.n_repeats = args.repeats;

    let output_dir = Path::new(&args.output);
    fs::create_dir_all(output_dir).context("could not create output directory")?;
    let log_file_path = output_dir.join("bench_log.txt");
    match cfg!(debug_assertions) {
        true => io::init_logger(LOG_LEVEL_FILTER_DEBUG, &log_file_path, LogEcho::Stdout)?,
        false => io::init_logger(LOG_LEVEL_FILTER_RELEASE, &log_file_path, LogEcho::Stdout)?,
    }

    let engines = Strategy::ALL
        .iter()
        .map(|&s| PatternEngine::with_strategy(config.brush.width, s))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "[BENCH] width: {}, {} repeats per operation, {} mirror samples",
        config.brush.width, config.n_repeats, config.n_mirror_samples
    );

    let patterns = [
        Pattern::SweepOnes,
        Pattern::SweepZeros,
        Pattern::ToggleSparse {
            step: config.brush.sparse_step,
        },
        Pattern::ScanPatterns,
    ];

    let mut bars = vec![];
    for pattern in patterns {
        for engine in engines.iter() {
            let micros = time_median(config.n_repeats, || {
                engine.generate(pattern)?.for_each(|v| {
                    black_box(v);
                });
                Ok(())
            })?;
            bars.push(Bar {
                label: format!("{} ({})", pattern.name(), engine.strategy().name()),
                value: micros,
            });
        }
    }

    let samples = (0..config.n_mirror_samples as u64).collect_vec();
    for engine in engines.iter() {
        let micros = time_median(config.n_repeats, || {
            black_box(engine.mirror_all(&samples));
            Ok(())
        })?;
        bars.push(Bar {
            label: format!("mirror ({})", engine.strategy().name()),
            value: micros,
        });
    }

    for bar in bars.iter() {
        info!("[BENCH] {:<24} {:>10.3}us", bar.label, bar.value);
    }

    let chart = bar_chart("bitbrush: lazy vs batch", "time (us)", &bars);
    io::write_svg(&chart, &output_dir.join("bench.svg"), Level::Info)?;

    let report = BenchReport {
        system_time: jiff::Timestamp::now().to_string(),
        width: config.brush.width,
        n_repeats: config.n_repeats,
        n_mirror_samples: config.n_mirror_samples,
        results: bars,
    };
    io::write_json(&report, &output_dir.join("bench.json"), Level::Info)?;

    Ok(())
}

/// Runs `op` `n_repeats` times and returns the median duration in microseconds.
fn time_median(n_repeats: usize, mut op: impl FnMut() -> Result<()>) -> Result<f64> {
    let durations = (0..n_repeats.max(1))
        .map(|_| {
            let start = Instant::now();
            op()?;
            Ok(start.elapsed().as_secs_f64() * 1e6)
        })
        .collect::<Result<Vec<f64>>>()?;
    calculate_median(&durations).context("no timing samples")
}
