use anyhow::Result;
use bitbrush::config::{BrushConfig, DEFAULT_BRUSH_CONFIG};
use bitbrush::consts::{LOG_LEVEL_FILTER_DEBUG, LOG_LEVEL_FILTER_RELEASE};
use bitbrush::util::io::{self, Command, MainCli};
use bitbrush::{Pattern, PatternEngine, Sequence, Strategy};
use clap::Parser as Clap;
use log::info;
use std::env;

fn main() -> Result<()> {
    let args = MainCli::parse();

    let log_file_path = env::temp_dir().join("bitbrush_log.txt");
    match cfg!(debug_assertions) {
        true => io::init_logger(LOG_LEVEL_FILTER_DEBUG, &log_file_path, args.log_echo())?,
        false => io::init_logger(LOG_LEVEL_FILTER_RELEASE, &log_file_path, args.log_echo())?,
    }

    let config = BrushConfig {
        width: args.width,
        strategy: match args.batch {
            true => Strategy::Batch,
            false => Strategy::Lazy,
        },
        ..DEFAULT_BRUSH_CONFIG
    };
    let engine = PatternEngine::from_config(&config)?;
    info!(
        "[MAIN] width: {}, mask: {}, strategy: {}",
        engine.width(),
        engine.visualize(engine.mask()),
        engine.strategy().name()
    );

    match args.command {
        Command::SweepOnes => print_sequence(&engine, engine.sweep_ones()),
        Command::SweepZeros => print_sequence(&engine, engine.sweep_zeros()),
        Command::ToggleSparse { step } => {
            let step = step.unwrap_or(config.sparse_step);
            print_sequence(&engine, engine.generate(Pattern::ToggleSparse { step })?)
        }
        Command::Scan => print_sequence(&engine, engine.scan_patterns()),
        Command::Mirror { value } => {
            let mirrored = engine.mirror(value);
            println!("{} {:>20}", engine.visualize(value), value & engine.mask());
            println!("{} {:>20}", engine.visualize(mirrored), mirrored);
        }
        Command::Count { value } => println!("{}", engine.count_ones(value)),
        Command::Show { value } => println!("{}", engine.visualize(value)),
    }

    Ok(())
}

fn print_sequence(engine: &PatternEngine, sequence: Sequence) {
    for (i, value) in sequence.enumerate() {
        println!(
            "{:>3}: {} {:>20} ({} set)",
            i,
            engine.visualize(value),
            value,
            engine.count_ones(value)
        );
    }
}
