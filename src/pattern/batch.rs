use crate::consts::PAR_MIRROR_THRESHOLD;
use crate::engine::PatternEngine;
use crate::error::Result;
use crate::pattern::{
    BitSpan, Pattern, Sequence, SequenceStrategy, single_bit, single_hole, sparse_bit,
    symmetric_pair,
};
use rayon::prelude::*;

/// Materializes the whole sequence in one go and hands out an iterator over the buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchStrategy;

impl BatchStrategy {
    pub(crate) fn produce(&self, pattern: Pattern, span: BitSpan) -> Sequence {
        let values = match pattern {
            Pattern::SweepOnes => sweep_ones(span),
            Pattern::SweepZeros => sweep_zeros(span),
            Pattern::ToggleSparse { step } => toggle_sparse(span, step),
            Pattern::ScanPatterns => scan_patterns(span),
        };
        debug_assert_eq!(values.len(), pattern.count(span.width));
        Sequence::Batch(values.into_iter())
    }
}

impl SequenceStrategy for BatchStrategy {
    fn generate(&self, pattern: Pattern, span: BitSpan) -> Result<Sequence> {
        Ok(self.produce(pattern.validate()?, span))
    }

    fn mirror_all(&self, engine: &PatternEngine, values: &[u64]) -> Vec<u64> {
        match values.len() < PAR_MIRROR_THRESHOLD {
            true => values.iter().map(|&v| engine.mirror(v)).collect(),
            // collect on an indexed parallel iterator keeps the input order
            false => values.par_iter().map(|&v| engine.mirror(v)).collect(),
        }
    }
}

pub fn sweep_ones(span: BitSpan) -> Vec<u64> {
    #[cfg(feature = "simd")]
    {
        let values = crate::pattern::simd::sweep_ones_simd(span);
        debug_assert_eq!(values, (0..span.width).map(single_bit).collect::<Vec<_>>());
        values
    }
    #[cfg(not(feature = "simd"))]
    {
        (0..span.width).map(single_bit).collect()
    }
}

pub fn sweep_zeros(span: BitSpan) -> Vec<u64> {
    #[cfg(feature = "simd")]
    {
        let values = crate::pattern::simd::sweep_zeros_simd(span);
        debug_assert_eq!(
            values,
            (0..span.width).map(|i| single_hole(span, i)).collect::<Vec<_>>()
        );
        values
    }
    #[cfg(not(feature = "simd"))]
    {
        (0..span.width).map(|i| single_hole(span, i)).collect()
    }
}

/// Callers guarantee `step >= 1`.
pub(crate) fn toggle_sparse(span: BitSpan, step: usize) -> Vec<u64> {
    let n = Pattern::ToggleSparse { step }.count(span.width);
    let mut values = vec![0u64; n];
    for k in 0..n {
        let bit = sparse_bit(step, k);
        values[k] = match k {
            0 => bit,
            _ => values[k - 1] | bit,
        };
    }
    values
}

pub fn scan_patterns(span: BitSpan) -> Vec<u64> {
    (0..=span.center()).map(|r| symmetric_pair(span, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAN_8: BitSpan = BitSpan {
        width: 8,
        mask: 0xFF,
    };

    #[test]
    fn sweeps_at_width_8() {
        assert_eq!(sweep_ones(SPAN_8), vec![1, 2, 4, 8, 16, 32, 64, 128]);
        assert_eq!(
            sweep_zeros(SPAN_8),
            vec![254, 253, 251, 247, 239, 223, 191, 127]
        );
    }

    #[test]
    fn scan_at_width_8() {
        assert_eq!(scan_patterns(SPAN_8), vec![16, 40, 68, 130, 1]);
    }

    #[test]
    fn sparse_with_unit_step_fills_mask() {
        let values = toggle_sparse(SPAN_8, 1);
        assert_eq!(values.len(), 8);
        assert_eq!(values.last(), Some(&0xFF));
    }
}
