use crate::consts::{
    DEFAULT_BENCH_MIRROR_SAMPLES, DEFAULT_BENCH_REPEATS, DEFAULT_SPARSE_STEP, DEFAULT_WIDTH,
};
use crate::pattern::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushConfig {
    /// Number of significant bits, `1..=64`
    pub width: u32,
    /// How sequences are produced.
    /// See [`Strategy`] for more details.
    pub strategy: Strategy,
    /// Step used by `toggle_sparse` when none is given explicitly
    pub sparse_step: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    /// Width shared by every engine under test; the strategy field is ignored, both are benchmarked
    pub brush: BrushConfig,
    pub n_mirror_samples: usize,
    pub n_repeats: usize,
}

pub const DEFAULT_BRUSH_CONFIG: BrushConfig = BrushConfig {
    width: DEFAULT_WIDTH,
    strategy: Strategy::Lazy,
    sparse_step: DEFAULT_SPARSE_STEP,
};

pub const DEFAULT_BENCH_CONFIG: BenchConfig = BenchConfig {
    brush: DEFAULT_BRUSH_CONFIG,
    n_mirror_samples: DEFAULT_BENCH_MIRROR_SAMPLES,
    n_repeats: DEFAULT_BENCH_REPEATS,
};

impl Default for BrushConfig {
    fn default() -> Self {
        DEFAULT_BRUSH_CONFIG
    }
}
