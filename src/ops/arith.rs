//! Integer passthrough.

/// Return `2 * x`, wrapping on overflow.
#[inline]
pub fn double(x: i32) -> i32 {
    x.wrapping_mul(2)
}
