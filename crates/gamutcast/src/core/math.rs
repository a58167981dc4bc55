use crate::Float;

/// An extension trait for floating point numbers.
///
/// This trait pre-computes the rounding factor for equality comparisons and
/// cache keys, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

/// Round the value to the given number of digits after the decimal.
///
/// The result never is negative zero, so that formatting a rounded quantity
/// close to zero does not produce a spurious minus sign.
#[inline]
pub(crate) fn round_to(value: Float, digits: i32) -> Float {
    let factor = (10.0 as Float).powi(digits);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
