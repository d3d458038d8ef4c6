use crate::engine::PatternEngine;
use crate::error::{BrushError, Result};
use crate::pattern::batch::BatchStrategy;
use crate::pattern::lazy::{LazyStrategy, PatternIter};
use std::fmt::{Display, Formatter};

pub mod batch;
pub mod lazy;
#[cfg(feature = "simd")]
pub mod simd;

/// The structured sequences an engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// A single set bit moving from LSB to MSB
    SweepOnes,
    /// All bits set except one, the cleared bit moving from LSB to MSB
    SweepZeros,
    /// Every `step`-th bit switched on, one more per element
    ToggleSparse { step: usize },
    /// Bit pairs symmetric around the center, expanding outward
    ScanPatterns,
}

impl Pattern {
    pub fn validate(self) -> Result<Self> {
        match self {
            Pattern::ToggleSparse { step: 0 } => Err(BrushError::InvalidStep(0)),
            _ => Ok(self),
        }
    }

    /// Number of elements the pattern yields at the given width.
    pub fn len(self, width: u32) -> Result<usize> {
        Ok(self.validate()?.count(width))
    }

    /// [`Self::len`] for a pattern that already passed [`Self::validate`].
    pub(crate) fn count(self, width: u32) -> usize {
        debug_assert!(self.validate().is_ok());
        match self {
            Pattern::SweepOnes | Pattern::SweepZeros => width as usize,
            Pattern::ToggleSparse { step } => (width as usize).div_ceil(step),
            Pattern::ScanPatterns => (width / 2) as usize + 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::SweepOnes => "sweep_ones",
            Pattern::SweepZeros => "sweep_zeros",
            Pattern::ToggleSparse { .. } => "toggle_sparse",
            Pattern::ScanPatterns => "scan_patterns",
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::ToggleSparse { step } => write!(f, "{}({})", self.name(), step),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Width and derived mask, everything a strategy needs to know about an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSpan {
    pub width: u32,
    pub mask: u64,
}

impl BitSpan {
    #[inline(always)]
    pub fn center(&self) -> u32 {
        self.width / 2
    }
}

/// Producer of pattern sequences.
/// Implementations must yield identical values in identical order, they only differ in when the work is done.
pub trait SequenceStrategy {
    /// Fails with [`BrushError::InvalidStep`] on a zero sparse step.
    fn generate(&self, pattern: Pattern, span: BitSpan) -> Result<Sequence>;

    fn mirror_all(&self, engine: &PatternEngine, values: &[u64]) -> Vec<u64>;
}

/// Selects which [`SequenceStrategy`] an engine delegates to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Values are computed one at a time while iterating
    #[default]
    Lazy,
    /// The whole sequence is materialized up front
    Batch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Lazy, Strategy::Batch];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Lazy => "lazy",
            Strategy::Batch => "batch",
        }
    }
}

impl Strategy {
    /// Infallible path for patterns the engine has already validated.
    pub(crate) fn produce(self, pattern: Pattern, span: BitSpan) -> Sequence {
        match self {
            Strategy::Lazy => LazyStrategy.produce(pattern, span),
            Strategy::Batch => BatchStrategy.produce(pattern, span),
        }
    }
}

impl SequenceStrategy for Strategy {
    fn generate(&self, pattern: Pattern, span: BitSpan) -> Result<Sequence> {
        Ok(self.produce(pattern.validate()?, span))
    }

    fn mirror_all(&self, engine: &PatternEngine, values: &[u64]) -> Vec<u64> {
        match self {
            Strategy::Lazy => LazyStrategy.mirror_all(engine, values),
            Strategy::Batch => BatchStrategy.mirror_all(engine, values),
        }
    }
}

/// A finite sequence of masked values, as returned by every generator.
#[derive(Debug, Clone)]
pub enum Sequence {
    Lazy(PatternIter),
    Batch(std::vec::IntoIter<u64>),
}

impl Iterator for Sequence {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        match self {
            Sequence::Lazy(iter) => iter.next(),
            Sequence::Batch(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Sequence::Lazy(iter) => iter.size_hint(),
            Sequence::Batch(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Sequence {}

// Element formulas, shared by both strategies.

#[inline(always)]
pub fn single_bit(i: u32) -> u64 {
    1 << i
}

#[inline(always)]
pub fn single_hole(span: BitSpan, i: u32) -> u64 {
    span.mask ^ (1 << i)
}

#[inline(always)]
pub fn sparse_bit(step: usize, k: usize) -> u64 {
    1 << (k * step)
}

/// Element at `radius` of the symmetric scan.
/// At radius 0 the left and right terms are the same bit.
#[inline(always)]
pub fn symmetric_pair(span: BitSpan, radius: u32) -> u64 {
    let center = span.center();
    let left = 1u64 << (center - radius);
    let right = match center + radius < span.width {
        true => 1u64 << (center + radius),
        false => 0,
    };
    left | right
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAN_8: BitSpan = BitSpan {
        width: 8,
        mask: 0xFF,
    };

    #[test]
    fn pattern_lengths() {
        assert_eq!(Pattern::SweepOnes.len(8), Ok(8));
        assert_eq!(Pattern::SweepZeros.len(1), Ok(1));
        assert_eq!(Pattern::ToggleSparse { step: 3 }.len(9), Ok(3));
        assert_eq!(Pattern::ToggleSparse { step: 3 }.len(10), Ok(4));
        assert_eq!(Pattern::ToggleSparse { step: 100 }.len(64), Ok(1));
        assert_eq!(Pattern::ScanPatterns.len(8), Ok(5));
        assert_eq!(Pattern::ScanPatterns.len(1), Ok(1));
    }

    #[test]
    fn zero_step_has_no_length() {
        assert_eq!(
            Pattern::ToggleSparse { step: 0 }.len(8),
            Err(BrushError::InvalidStep(0))
        );
    }

    #[test]
    fn strategies_reject_zero_step() {
        let zero = Pattern::ToggleSparse { step: 0 };
        for strategy in Strategy::ALL {
            assert!(matches!(
                strategy.generate(zero, SPAN_8),
                Err(BrushError::InvalidStep(0))
            ));
        }
        assert!(matches!(
            LazyStrategy.generate(zero, SPAN_8),
            Err(BrushError::InvalidStep(0))
        ));
        assert!(matches!(
            BatchStrategy.generate(zero, SPAN_8),
            Err(BrushError::InvalidStep(0))
        ));
        assert!(matches!(
            PatternIter::new(zero, SPAN_8),
            Err(BrushError::InvalidStep(0))
        ));
    }

    #[test]
    fn zero_step_is_rejected() {
        assert_eq!(
            Pattern::ToggleSparse { step: 0 }.validate(),
            Err(BrushError::InvalidStep(0))
        );
        assert!(Pattern::ToggleSparse { step: 1 }.validate().is_ok());
    }

    #[test]
    fn symmetric_pair_radius_zero_is_single_bit() {
        assert_eq!(symmetric_pair(SPAN_8, 0), 1 << 4);
    }

    #[test]
    fn symmetric_pair_loses_right_term_at_edge() {
        assert_eq!(symmetric_pair(SPAN_8, 3), 0b1000_0010);
        assert_eq!(symmetric_pair(SPAN_8, 4), 0b0000_0001);
    }

    #[test]
    fn display_includes_step() {
        assert_eq!(Pattern::ToggleSparse { step: 3 }.to_string(), "toggle_sparse(3)");
        assert_eq!(Pattern::ScanPatterns.to_string(), "scan_patterns");
    }
}
