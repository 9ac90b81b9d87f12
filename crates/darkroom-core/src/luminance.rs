//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! Shared by the grayscale filter and the histogram so that the luminance
//! histogram of an image matches what the grayscale filter would produce.
//!
//! Weights are kept in integer thousandths so that sums landing exactly on
//! a half round up, as they would with exact decimal arithmetic.

/// ITU-R BT.601 coefficient for red channel, in thousandths.
pub const LUMA_R: u32 = 299;

/// ITU-R BT.601 coefficient for green channel, in thousandths.
pub const LUMA_G: u32 = 587;

/// ITU-R BT.601 coefficient for blue channel, in thousandths.
pub const LUMA_B: u32 = 114;

/// Weighted sum `wr*r + wg*g + wb*b / 1000`, rounded half up.
///
/// Weights are in thousandths. The result is not clamped.
#[inline]
pub(crate) fn weighted_round(weights: [u32; 3], r: u8, g: u8, b: u8) -> u32 {
    let [wr, wg, wb] = weights;
    (wr * r as u32 + wg * g as u32 + wb * b as u32 + 500) / 1000
}

/// Calculate luma from u8 RGB values, rounded to the nearest integer.
///
/// # Returns
/// Luma value (0-255)
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    // The weights sum to 1000, so the result never exceeds 255
    weighted_round([LUMA_R, LUMA_G, LUMA_B], r, g, b) as u8
}
