use std::ops::Index;

/// Lookup table of byte values with their bit order reversed.
/// The entry at index `i` is `i` read from LSB to MSB, e.g. `0b0000_0110 -> 0b0110_0000`.
///
/// The table does not depend on any width, a single instance ([`MIRROR_TABLE`]) is shared by all engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTable {
    entries: [u8; 256],
}

pub static MIRROR_TABLE: MirrorTable = MirrorTable::build();

impl MirrorTable {
    pub const fn build() -> Self {
        let mut entries = [0u8; 256];

        // no for loops in const fn
        let mut i = 0;
        while i < 256 {
            entries[i] = reverse_byte(i as u8);
            i += 1;
        }

        Self { entries }
    }

    #[inline(always)]
    pub fn mirror_byte(&self, byte: u8) -> u8 {
        self.entries[byte as usize]
    }

    pub fn entries(&self) -> &[u8; 256] {
        &self.entries
    }
}

impl Index<u8> for MirrorTable {
    type Output = u8;

    fn index(&self, byte: u8) -> &Self::Output {
        &self.entries[byte as usize]
    }
}

/// Shifts the low bit of a working copy into the result, eight times.
const fn reverse_byte(byte: u8) -> u8 {
    let mut b = byte;
    let mut rev = 0u8;

    let mut i = 0;
    while i < 8 {
        rev = (rev << 1) | (b & 1);
        b >>= 1;
        i += 1;
    }

    rev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(MIRROR_TABLE[0], 0);
        assert_eq!(MIRROR_TABLE[255], 255);
        assert_eq!(MIRROR_TABLE[0b1000_0001], 0b1000_0001);
    }

    #[test]
    fn known_entries() {
        assert_eq!(MIRROR_TABLE[1], 128);
        assert_eq!(MIRROR_TABLE[0b0000_0110], 0b0110_0000);
        assert_eq!(MIRROR_TABLE[0xF0], 0x0F);
    }

    #[test]
    fn involution() {
        for i in 0..=u8::MAX {
            assert_eq!(MIRROR_TABLE[MIRROR_TABLE[i]], i, "byte {i:#010b}");
        }
    }

    #[test]
    fn matches_std_reverse_bits() {
        assert!(
            MIRROR_TABLE
                .entries()
                .iter()
                .enumerate()
                .all(|(i, &rev)| rev == (i as u8).reverse_bits())
        );
    }
}
