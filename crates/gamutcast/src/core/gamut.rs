use crate::core::conversion::oklch_to_oklab;
use crate::core::{convert, ColorModel};
use crate::Float;

/// The default tolerance for gamut tests.
pub(crate) const EPSILON: Float = 1e-6;

/// The default upper bound for Display P3 coordinates during gamut detection.
pub(crate) const P3_LIMIT: Float = 1.6;

/// Determine whether all coordinates are within `-epsilon..=limit + epsilon`.
#[inline]
pub(crate) fn in_gamut(coordinates: &[Float; 3], limit: Float, epsilon: Float) -> bool {
    coordinates
        .iter()
        .all(|c| -epsilon <= *c && *c <= limit + epsilon)
}

/// Clip the coordinates to unit range.
#[inline]
pub(crate) fn clip(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

/// Compute Delta E for the two Oklab coordinates.
#[allow(non_snake_case)]
#[inline]
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

const JND: Float = 0.02;
const JND_EPSILON: Float = 0.0001;
const CHROMA_EPSILON: Float = 1e-6;

/// Map the given color coordinates into the sRGB gamut.
///
/// This function implements the CSS Color 4 [gamut mapping
/// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping). It
/// performs a binary search in Oklch for a color with less chroma than the
/// original, whose clipped version is within the *just noticeable difference*.
/// Since, by definition, the clipped version also is in gamut, it becomes the
/// result of the search. Lightness and hue stay fixed throughout.
///
/// The result always is in sRGB. If the coordinates cannot be projected into
/// Oklch, e.g., because they are infinite, the result is black.
pub(crate) fn to_gamut(model: ColorModel, coordinates: &[Float; 3], epsilon: Float) -> [Float; 3] {
    use ColorModel::*;

    let [l, c, h] = convert(model, Oklch, coordinates);
    if !l.is_finite() || !c.is_finite() {
        return [0.0, 0.0, 0.0];
    }
    // Gray has no hue
    let origin_as_oklch = [l, c, if h.is_nan() { 0.0 } else { h }];

    // Preliminary 1/2: Clamp Lightness
    if 1.0 <= l {
        return clip(&convert(Oklch, Rgb, &[1.0, 0.0, 0.0]));
    }
    if l <= 0.0 {
        return [0.0, 0.0, 0.0];
    }

    // Preliminary 2/2: Check gamut
    let origin_as_rgb = convert(model, Rgb, coordinates);
    if in_gamut(&origin_as_rgb, 1.0, epsilon) {
        return clip(&origin_as_rgb);
    }

    // Goal: Minimize just noticeable difference between current and clipped
    // colors
    let mut current_as_oklch = origin_as_oklch;
    let mut clipped_as_rgb = clip(&convert(Oklch, Rgb, &current_as_oklch));

    let difference = delta_e_ok(
        &convert(Rgb, Oklab, &clipped_as_rgb),
        &oklch_to_oklab(&current_as_oklch),
    );

    if difference < JND {
        return clipped_as_rgb;
    }

    // Strategy: Binary search by adjusting chroma in Oklch
    let mut min = 0.0;
    let mut max = origin_as_oklch[1];
    let mut min_in_gamut = true;

    while CHROMA_EPSILON < max - min {
        let chroma = (min + max) / 2.0;
        current_as_oklch = [current_as_oklch[0], chroma, current_as_oklch[2]];

        let current_as_rgb = convert(Oklch, Rgb, &current_as_oklch);

        if min_in_gamut && in_gamut(&current_as_rgb, 1.0, epsilon) {
            min = chroma;
            continue;
        }

        clipped_as_rgb = clip(&current_as_rgb);

        let difference = delta_e_ok(
            &convert(Rgb, Oklab, &clipped_as_rgb),
            &oklch_to_oklab(&current_as_oklch),
        );

        if difference < JND {
            if JND - difference < JND_EPSILON {
                return clipped_as_rgb;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    clipped_as_rgb
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{in_gamut, to_gamut, EPSILON, P3_LIMIT};
    use crate::core::{assert_same_coordinates, convert, to_24bit, ColorModel};
    use crate::Float;

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(&[0.0, 0.5, 1.0], 1.0, EPSILON));
        assert!(in_gamut(&[-0.0000005, 0.5, 1.0000005], 1.0, EPSILON));
        assert!(!in_gamut(&[-0.00001, 0.5, 1.0], 1.0, EPSILON));
        assert!(in_gamut(&[1.5, 0.5, 0.0], P3_LIMIT, EPSILON));
        assert!(!in_gamut(&[1.7, 0.5, 0.0], P3_LIMIT, EPSILON));
    }

    #[test]
    fn test_gamut() {
        // A very green green.
        let p3 = [0.0, 1.0, 0.0];
        let srgb = convert(ColorModel::P3, ColorModel::Rgb, &p3);
        assert_same_coordinates!(
            ColorModel::Rgb,
            &srgb,
            &[-0.5116049825853448, 1.0182656579378029, -0.3106746212905826],
        );

        let mapped = to_gamut(ColorModel::P3, &p3, EPSILON);
        assert!(in_gamut(&mapped, 1.0, 0.0));
        assert!(mapped[0] < 0.01);
        assert!(0.9 < mapped[1]);

        // An orange just beyond sRGB.
        let mapped = to_gamut(ColorModel::Oklch, &[0.7432, 0.2194, 51.36], EPSILON);
        assert_eq!(to_24bit(&mapped), [255, 126, 0]);

        // Colors already in gamut map to themselves.
        let teal = [0.1, 0.5, 0.5];
        assert_same_coordinates!(
            ColorModel::Rgb,
            &to_gamut(ColorModel::Rgb, &teal, EPSILON),
            &teal
        );
    }

    #[test]
    fn test_gamut_extremes() {
        assert_eq!(
            to_24bit(&to_gamut(ColorModel::Oklch, &[1.2, 0.3, 100.0], EPSILON)),
            [255, 255, 255]
        );
        assert_eq!(
            to_gamut(ColorModel::Oklch, &[0.0, 0.3, 100.0], EPSILON),
            [0.0, 0.0, 0.0]
        );
        assert_eq!(
            to_gamut(ColorModel::Xyz, &[Float::INFINITY, 0.0, 0.0], EPSILON),
            [0.0, 0.0, 0.0]
        );

        // Too bright grays still map to white.
        assert_eq!(
            to_24bit(&to_gamut(ColorModel::Rgb, &[1.2, 1.2, 1.2], EPSILON)),
            [255, 255, 255]
        );
    }
}
