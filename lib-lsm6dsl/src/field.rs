/// Replaces the bits selected by `mask` in `current` with the matching bits of `value`, every bit
/// outside the mask is left untouched.
///
/// ```rs
/// // Set FS_G to 2000 dps without touching ODR_G.
/// let ctrl2_g = apply_field(0b0100_0000, FS_G_MASK, 0b0000_1100);
/// assert_eq!(ctrl2_g, 0b0100_1100);
/// ```
///
#[inline]
pub const fn apply_field(current: u8, mask: u8, value: u8) -> u8 {
    (current & !mask) | (value & mask)
}
