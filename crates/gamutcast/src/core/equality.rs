use super::ColorModel;
use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the same
/// color.
///
/// Given a color model and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, clamping Oklab lightness,
/// scaling hues, reducing resolution, and dropping the sign of negative zeros
/// before comparing the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($model:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (model, cs1, cs2) = ($model, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(model, cs1);
        let bits2 = $crate::core::to_eq_coordinates(model, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

/// Test macro for asserting the equality of colors.
///
/// This macro tests the color objects for equality using the `Eq` trait, which
/// normalizes the coordinates of colors with the same color model before
/// comparing them.
///
/// # Panics
///
/// This macro panics if the colors differ. Its message places either color
/// models or the coordinates below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = ($c1, $c2);
        if c1.model() != c2.model() {
            assert_eq!(
                c1,
                c2,
                "color models differ:\n{:?}\n{:?}",
                c1.model(),
                c2.model()
            );
        }

        assert_eq!(
            c1,
            c2,
            "color coordinates differ:\n{:?}\n{:?}",
            c1.as_ref(),
            c2.as_ref()
        );
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function ensures that coordinates are well-formed. In particular, it
/// replaces not-a-number coordinates with zero. For polar models, a
/// not-a-number hue also zeroes out the chroma or saturation. All other
/// values, including out-of-range lightness and chroma, pass through
/// unchanged.
#[inline]
pub(crate) fn normalize(model: ColorModel, coordinates: &[Float; 3]) -> [Float; 3] {
    let mut cs = *coordinates;

    if let Some(hue) = model.hue_index() {
        if cs[hue].is_nan() {
            cs[hue] = 0.0;
            cs[1] = 0.0;
        }
    }

    for c in cs.iter_mut() {
        if c.is_nan() {
            *c = 0.0;
        }
    }

    cs
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(model: ColorModel, coordinates: &[Float; 3]) -> [Bits; 3] {
    let mut cs = normalize(model, coordinates);

    // Normalize rotation and scale to unit range.
    if let Some(hue) = model.hue_index() {
        cs[hue] = cs[hue].rem_euclid(360.0) / 360.0;
    }

    cs.map(to_eq_bits)
}

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// ====================================================================================================================
