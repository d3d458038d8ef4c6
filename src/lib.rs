#![cfg_attr(feature = "simd", feature(portable_simd))]

use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod util;

pub use config::*;
pub use engine::PatternEngine;
pub use error::BrushError;
pub use pattern::{Pattern, Sequence, Strategy};

/// Reference point for elapsed time in log lines.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
