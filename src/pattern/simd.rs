use crate::pattern::BitSpan;
use std::simd::Simd;

/// Width of the SIMD vector
const SIMD_WIDTH: usize = 4;

#[allow(non_camel_case_types)]
type u64xN = Simd<u64, SIMD_WIDTH>;

/// Bit positions `base..base + SIMD_WIDTH`
#[inline(always)]
fn positions(base: usize) -> u64xN {
    u64xN::from_array(std::array::from_fn(|lane| (base + lane) as u64))
}

/// SIMD version of [`super::batch::sweep_ones`].
pub fn sweep_ones_simd(span: BitSpan) -> Vec<u64> {
    let n = span.width as usize;
    let one_n = u64xN::splat(1);
    let mut values = Vec::with_capacity(n);

    //process complete chunks with SIMD
    let chunks = n / SIMD_WIDTH;
    for chunk in 0..chunks {
        let shifted = one_n << positions(chunk * SIMD_WIDTH);
        values.extend_from_slice(shifted.as_array());
    }

    //process remaining positions with scalar operations
    for i in chunks * SIMD_WIDTH..n {
        values.push(1u64 << i);
    }
    values
}

/// SIMD version of [`super::batch::sweep_zeros`].
pub fn sweep_zeros_simd(span: BitSpan) -> Vec<u64> {
    let n = span.width as usize;
    let one_n = u64xN::splat(1);
    let mask_n = u64xN::splat(span.mask);
    let mut values = Vec::with_capacity(n);

    let chunks = n / SIMD_WIDTH;
    for chunk in 0..chunks {
        let holes = mask_n ^ (one_n << positions(chunk * SIMD_WIDTH));
        values.extend_from_slice(holes.as_array());
    }

    for i in chunks * SIMD_WIDTH..n {
        values.push(span.mask ^ (1u64 << i));
    }
    values
}

#[cfg(all(test, feature = "simd"))]
mod tests {
    use super::*;
    use crate::pattern::{single_bit, single_hole};

    fn span(width: u32) -> BitSpan {
        BitSpan {
            width,
            mask: u64::MAX >> (64 - width),
        }
    }

    #[test]
    fn lanes_match_scalar_across_chunk_boundaries() {
        for width in [1, 4, 5, 63, 64] {
            let s = span(width);
            let ones: Vec<u64> = (0..width).map(single_bit).collect();
            let holes: Vec<u64> = (0..width).map(|i| single_hole(s, i)).collect();
            assert_eq!(sweep_ones_simd(s), ones, "sweep_ones at width {width}");
            assert_eq!(sweep_zeros_simd(s), holes, "sweep_zeros at width {width}");
        }
    }
}
