use crate::engine::PatternEngine;
use crate::error::Result;
use crate::pattern::{
    BitSpan, Pattern, Sequence, SequenceStrategy, single_bit, single_hole, sparse_bit,
    symmetric_pair,
};

/// Computes every element on demand, nothing is allocated.
#[derive(Debug, Clone, Copy, Default)]
pub struct LazyStrategy;

impl LazyStrategy {
    pub(crate) fn produce(&self, pattern: Pattern, span: BitSpan) -> Sequence {
        Sequence::Lazy(PatternIter::start(pattern, span))
    }
}

impl SequenceStrategy for LazyStrategy {
    fn generate(&self, pattern: Pattern, span: BitSpan) -> Result<Sequence> {
        Ok(Sequence::Lazy(PatternIter::new(pattern, span)?))
    }

    fn mirror_all(&self, engine: &PatternEngine, values: &[u64]) -> Vec<u64> {
        values.iter().map(|&v| engine.mirror(v)).collect()
    }
}

/// Cursor over one pattern. Every call to a generator creates a fresh one, so sequences restart from the first element.
#[derive(Debug, Clone)]
pub struct PatternIter {
    pattern: Pattern,
    span: BitSpan,
    pos: usize,
    len: usize,
    // running OR for ToggleSparse
    acc: u64,
}

impl PatternIter {
    pub fn new(pattern: Pattern, span: BitSpan) -> Result<Self> {
        Ok(Self::start(pattern.validate()?, span))
    }

    fn start(pattern: Pattern, span: BitSpan) -> Self {
        Self {
            pattern,
            span,
            pos: 0,
            len: pattern.count(span.width),
            acc: 0,
        }
    }
}

impl Iterator for PatternIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.pos >= self.len {
            return None;
        }
        let i = self.pos;
        let value = match self.pattern {
            Pattern::SweepOnes => single_bit(i as u32),
            Pattern::SweepZeros => single_hole(self.span, i as u32),
            Pattern::ToggleSparse { step } => {
                self.acc |= sparse_bit(step, i);
                self.acc
            }
            Pattern::ScanPatterns => symmetric_pair(self.span, i as u32),
        };
        self.pos += 1;

        debug_assert!(value & !self.span.mask == 0, "{value:#x} exceeds mask {:#x}", self.span.mask);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PatternIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(width: u32) -> BitSpan {
        BitSpan {
            width,
            mask: u64::MAX >> (64 - width),
        }
    }

    #[test]
    fn size_hint_counts_down() {
        let mut iter = PatternIter::new(Pattern::SweepOnes, span(4)).unwrap();
        assert_eq!(iter.len(), 4);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn sparse_accumulates() {
        let values: Vec<u64> = PatternIter::new(Pattern::ToggleSparse { step: 2 }, span(6))
            .unwrap()
            .collect();
        assert_eq!(values, vec![0b1, 0b101, 0b10101]);
    }

    #[test]
    fn cloned_cursor_is_independent() {
        let mut a = PatternIter::new(Pattern::ScanPatterns, span(8)).unwrap();
        a.next();
        let b = a.clone();
        assert_eq!(a.collect::<Vec<_>>(), b.collect::<Vec<_>>());
    }
}
