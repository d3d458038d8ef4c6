/// Widest supported pattern, one native register
pub const MAX_WIDTH: u32 = u64::BITS;

pub const DEFAULT_WIDTH: u32 = 32;

/// Distance between successive bits set by `toggle_sparse`
pub const DEFAULT_SPARSE_STEP: usize = 3;

/// Number of values `0..n` mirrored per strategy by the bench driver
pub const DEFAULT_BENCH_MIRROR_SAMPLES: usize = 1000;

/// Each benchmarked operation is repeated this many times, the median duration is reported
pub const DEFAULT_BENCH_REPEATS: usize = 25;

/// Below this many values, bulk mirroring in the batch strategy stays on the calling thread
pub const PAR_MIRROR_THRESHOLD: usize = 4096;

pub const LOG_LEVEL_FILTER_RELEASE: log::LevelFilter = log::LevelFilter::Info;

pub const LOG_LEVEL_FILTER_DEBUG: log::LevelFilter = log::LevelFilter::Debug;

/// Dimensions of the benchmark bar chart (in SVG user units)
pub const CHART_BAR_WIDTH: f32 = 48.0;
pub const CHART_BAR_GAP: f32 = 16.0;
pub const CHART_PLOT_HEIGHT: f32 = 360.0;
pub const CHART_MARGIN: f32 = 64.0;
pub const CHART_LABEL_SPACE: f32 = 140.0;
