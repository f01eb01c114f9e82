//! GOB (group of bytes) constants and the intra-GOB swizzle table.
//!
//! A GOB is 512 bytes laid out as 64 bytes by 8 rows. Inside a GOB, bytes are grouped into
//! 16-byte sectors arranged in the order below (each cell is one sector, `x` in bytes):
//!
//! ```text
//!          x: 0..16 16..32 32..48 48..64
//! rows 0..2:   0      2      16     18
//! rows 2..4:   4      6      20     22
//! rows 4..6:   8      10     24     26
//! rows 6..8:   12     14     28     30
//! ```
//!
//! Odd rows use the sector directly after their even row.

/// Width of a GOB in bytes.
pub const GOB_SIZE_X: u32 = 64;
/// Height of a GOB in rows.
pub const GOB_SIZE_Y: u32 = 8;
/// Depth of a GOB in slices.
pub const GOB_SIZE_Z: u32 = 1;
/// Size of a GOB in bytes.
pub const GOB_SIZE: u32 = GOB_SIZE_X * GOB_SIZE_Y * GOB_SIZE_Z;

/// `log2(GOB_SIZE_X)`.
pub const GOB_SIZE_X_SHIFT: u32 = 6;
/// `log2(GOB_SIZE_Y)`.
pub const GOB_SIZE_Y_SHIFT: u32 = 3;
/// `log2(GOB_SIZE_Z)`.
pub const GOB_SIZE_Z_SHIFT: u32 = 0;
/// `log2(GOB_SIZE)`.
pub const GOB_SIZE_SHIFT: u32 = GOB_SIZE_X_SHIFT + GOB_SIZE_Y_SHIFT + GOB_SIZE_Z_SHIFT;

/// Byte offset inside a GOB, indexed by `[row % 8][byte_x % 64]`.
pub static SWIZZLE_TABLE: [[u16; GOB_SIZE_X as usize]; GOB_SIZE_Y as usize] = make_swizzle_table();

const fn make_swizzle_table() -> [[u16; GOB_SIZE_X as usize]; GOB_SIZE_Y as usize] {
    let mut table = [[0u16; GOB_SIZE_X as usize]; GOB_SIZE_Y as usize];
    let mut y = 0;
    while y < GOB_SIZE_Y as usize {
        let mut x = 0;
        while x < GOB_SIZE_X as usize {
            table[y][x] = gob_offset(x as u32, y as u32) as u16;
            x += 1;
        }
        y += 1;
    }
    table
}

/// Offset of byte `x` on row `y` within a GOB. Both coordinates wrap to the GOB.
#[inline]
pub const fn gob_offset(x: u32, y: u32) -> u32 {
    ((x % 64) / 32) * 256 + ((y % 8) / 2) * 64 + ((x % 32) / 16) * 32 + (y % 2) * 16 + (x % 16)
}
