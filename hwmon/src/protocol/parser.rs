// hwmon/src/protocol/parser.rs

use crate::constants::WORD_SIZE;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a little-endian u32 at byte offset `idx`, with bounds checking.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    let end = idx.checked_add(WORD_SIZE).ok_or(Error::InvalidLength {
        expected: usize::MAX,
        actual: data.len(),
    })?;
    ensure_len(data, end)?;
    Ok(u32::from_le_bytes([
        data[idx],
        data[idx + 1],
        data[idx + 2],
        data[idx + 3],
    ]))
}

/// Read a little-endian i32 at byte offset `idx`, with bounds checking.
pub fn le_i32_at(data: &[u8], idx: usize) -> Result<i32> {
    le_u32_at(data, idx).map(|w| w as i32)
}

/// Iterate over the complete little-endian words of `data`. A trailing
/// partial word is ignored.
pub fn le_words(data: &[u8]) -> impl Iterator<Item = u32> + '_ {
    data.chunks_exact(WORD_SIZE)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
}
