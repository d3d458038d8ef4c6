use crate::consts::MAX_WIDTH;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrushError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushError {
    /// Width is zero or does not fit in a native register
    #[error("invalid width: {0} (expected 1..={max})", max = MAX_WIDTH)]
    InvalidWidth(u32),
    /// Sparse toggle step must be at least one bit
    #[error("invalid step: {0} (expected >= 1)")]
    InvalidStep(usize),
}
