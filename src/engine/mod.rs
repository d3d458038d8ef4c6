use crate::config::BrushConfig;
use crate::consts::{DEFAULT_SPARSE_STEP, MAX_WIDTH};
use crate::engine::mirror_table::{MIRROR_TABLE, MirrorTable};
use crate::error::{BrushError, Result};
use crate::pattern::{BitSpan, Pattern, Sequence, SequenceStrategy, Strategy};
use log::debug;

pub mod mirror_table;

/// Generates and inspects bit patterns of a fixed width.
///
/// Width, mask and strategy are fixed at construction, every operation is a pure function of them and its arguments.
/// Engines are `Copy` and can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct PatternEngine {
    width: u32,
    mask: u64,
    strategy: Strategy,
    sparse_step: usize,
    mirror_table: &'static MirrorTable,
}

impl PatternEngine {
    pub fn new(width: u32) -> Result<Self> {
        Self::with_strategy(width, Strategy::default())
    }

    pub fn with_strategy(width: u32, strategy: Strategy) -> Result<Self> {
        Self::build(width, strategy, DEFAULT_SPARSE_STEP)
    }

    pub fn from_config(config: &BrushConfig) -> Result<Self> {
        Self::build(config.width, config.strategy, config.sparse_step)
    }

    fn build(width: u32, strategy: Strategy, sparse_step: usize) -> Result<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BrushError::InvalidWidth(width));
        }
        Pattern::ToggleSparse { step: sparse_step }.validate()?;

        let mask = u64::MAX >> (MAX_WIDTH - width);
        debug!(
            "[ENGINE] width: {}, mask: {:#x}, strategy: {}",
            width,
            mask,
            strategy.name()
        );
        Ok(Self {
            width,
            mask,
            strategy,
            sparse_step,
            mirror_table: &MIRROR_TABLE,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn mask(&self) -> u64 {
        self.mask
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn sparse_step(&self) -> usize {
        self.sparse_step
    }

    pub fn span(&self) -> BitSpan {
        BitSpan {
            width: self.width,
            mask: self.mask,
        }
    }

    /// Produces any of the four patterns, fails only on an invalid sparse step.
    pub fn generate(&self, pattern: Pattern) -> Result<Sequence> {
        self.strategy.generate(pattern, self.span())
    }

    /// `1 << i` for `i` in `0..width`
    pub fn sweep_ones(&self) -> Sequence {
        self.strategy.produce(Pattern::SweepOnes, self.span())
    }

    /// `mask ^ (1 << i)` for `i` in `0..width`
    pub fn sweep_zeros(&self) -> Sequence {
        self.strategy.produce(Pattern::SweepZeros, self.span())
    }

    /// Sets bits `0, step, 2*step, ...` one at a time, each element a superset of the previous.
    pub fn toggle_sparse(&self, step: usize) -> Result<Sequence> {
        self.generate(Pattern::ToggleSparse { step })
    }

    /// [`Self::toggle_sparse`] with the configured step.
    pub fn toggle_sparse_default(&self) -> Sequence {
        let pattern = Pattern::ToggleSparse {
            step: self.sparse_step,
        };
        self.strategy.produce(pattern, self.span())
    }

    /// Bit pairs symmetric around `width / 2`, from the center out to the edges.
    pub fn scan_patterns(&self) -> Sequence {
        self.strategy.produce(Pattern::ScanPatterns, self.span())
    }

    /// Reverses the order of the `width` significant bits of `value`, bits above `width` are ignored.
    ///
    /// Each byte is reversed through the lookup table and placed at the opposite byte position.
    /// When `width` is not a multiple of 8 the result is shifted down to drop the padding bits.
    pub fn mirror(&self, value: u64) -> u64 {
        let value = value & self.mask;
        let bytes_needed = self.width.div_ceil(8);

        let mut result = 0u64;
        for i in 0..bytes_needed {
            let byte = (value >> (i * 8)) as u8;
            let shift = (bytes_needed - 1 - i) * 8;
            result |= (self.mirror_table.mirror_byte(byte) as u64) << shift;
        }
        let mirrored = result >> (bytes_needed * 8 - self.width);

        debug_assert!(mirrored & !self.mask == 0);
        mirrored
    }

    /// Mirrors every value, preserving order.
    pub fn mirror_all(&self, values: &[u64]) -> Vec<u64> {
        self.strategy.mirror_all(self, values)
    }

    pub fn count_ones(&self, value: u64) -> u32 {
        (value & self.mask).count_ones()
    }

    /// `value` in binary, most significant bit first, zero-padded to exactly `width` characters.
    pub fn visualize(&self, value: u64) -> String {
        format!("{:0w$b}", value & self.mask, w = self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_at_extremes() {
        assert_eq!(PatternEngine::new(1).unwrap().mask(), 1);
        assert_eq!(PatternEngine::new(64).unwrap().mask(), u64::MAX);
        assert_eq!(PatternEngine::new(12).unwrap().mask(), 0xFFF);
    }

    #[test]
    fn rejects_bad_width() {
        assert_eq!(PatternEngine::new(0).unwrap_err(), BrushError::InvalidWidth(0));
        assert_eq!(PatternEngine::new(65).unwrap_err(), BrushError::InvalidWidth(65));
    }

    #[test]
    fn rejects_zero_step_in_config() {
        let config = BrushConfig {
            sparse_step: 0,
            ..BrushConfig::default()
        };
        assert_eq!(
            PatternEngine::from_config(&config).unwrap_err(),
            BrushError::InvalidStep(0)
        );
    }

    #[test]
    fn mirror_known_values() {
        let e8 = PatternEngine::new(8).unwrap();
        assert_eq!(e8.mirror(0b0000_0001), 0b1000_0000);
        assert_eq!(e8.mirror(0b1100_1010), 0b0101_0011);

        let e12 = PatternEngine::new(12).unwrap();
        assert_eq!(e12.mirror(0x001), 0x800);
        assert_eq!(e12.mirror(0x00F), 0xF00);

        let e1 = PatternEngine::new(1).unwrap();
        assert_eq!(e1.mirror(1), 1);
        assert_eq!(e1.mirror(0), 0);

        let e64 = PatternEngine::new(64).unwrap();
        assert_eq!(e64.mirror(1), 1 << 63);
    }

    #[test]
    fn mirror_ignores_bits_above_width() {
        let e4 = PatternEngine::new(4).unwrap();
        assert_eq!(e4.mirror(0xF1), 0b1000);
    }

    #[test]
    fn mirror_matches_std_reverse_bits() {
        for width in [3, 8, 13, 24, 40, 63, 64] {
            let engine = PatternEngine::new(width).unwrap();
            for x in [0u64, 1, 0xDEAD_BEEF_CAFE_F00D, u64::MAX] {
                let x = x & engine.mask();
                assert_eq!(engine.mirror(x), x.reverse_bits() >> (64 - width), "width {width}");
            }
        }
    }

    #[test]
    fn count_and_visualize() {
        let engine = PatternEngine::new(6).unwrap();
        assert_eq!(engine.count_ones(0b1011), 3);
        assert_eq!(engine.count_ones(u64::MAX), 6);
        assert_eq!(engine.visualize(0b1011), "001011");
        assert_eq!(engine.visualize(u64::MAX), "111111");
    }

    #[test]
    fn default_step_comes_from_config() {
        let config = BrushConfig {
            width: 9,
            sparse_step: 4,
            ..BrushConfig::default()
        };
        let engine = PatternEngine::from_config(&config).unwrap();
        assert_eq!(
            engine.toggle_sparse_default().collect::<Vec<_>>(),
            vec![0b1, 0b1_0001, 0b1_0001_0001]
        );
    }
}
