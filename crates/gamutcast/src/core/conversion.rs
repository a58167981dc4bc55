use super::{normalize, ColorModel};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert a unit-range quantity to an unsigned byte.
///
/// The quantity is clamped to `0..=1` before scaling, so that out-of-gamut
/// coordinates saturate instead of wrapping around.
#[inline]
pub(crate) fn to_byte(value: Float) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function clamps coordinates to unit range before scaling them to
/// `0x00..=0xff`. It does not care whether the coordinates are sRGB or Display
/// P3, since both use the same unit range.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [to_byte(r), to_byte(g), to_byte(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected RGB to linear RGB using sRGB's
/// gamma. Display P3 uses the very same gamma. This is a one-hop, direct
/// conversion that preserves the sign of negative coordinates.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude < 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear RGB to gamma-corrected RGB using sRGB's
/// gamma. Display P3 uses the very same gamma. This is a one-hop, direct
/// conversion that preserves the sign of negative coordinates.
pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/p3-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_DISPLAY_P3_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

/// Convert coordinates for linear Display P3 to XYZ. This is a one-hop, direct
/// conversion.
fn linear_display_p3_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_DISPLAY_P3_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_DISPLAY_P3: [[Float; 3]; 3] = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

/// Convert coordinates for XYZ to linear Display P3. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_display_p3(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_DISPLAY_P3, value)
}

// --------------------------------------------------------------------------------------------------------------------

mod hsl {
    use crate::Float;

    /// The largest channel spread still treated as gray.
    const ACHROMATIC_DELTA: Float = 1e-9;

    /// Convert coordinates for HSL to sRGB. This is a one-hop, direct
    /// conversion following CSS Color 4.
    pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
        let [h, s, l] = *value;
        let h = h.rem_euclid(360.0);
        let a = s * l.min(1.0 - l);

        let channel = |n: Float| {
            let k = (n + h / 30.0).rem_euclid(12.0);
            l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        [channel(0.0), channel(8.0), channel(4.0)]
    }

    /// Convert coordinates for sRGB to HSL. This is a one-hop, direct
    /// conversion using the max/min/delta formulation.
    ///
    /// Achromatic colors, including those whose channels differ only by
    /// floating point noise, get a hue and saturation of zero. Since HSL
    /// derives from gamma-corrected sRGB, the result is only meaningful for
    /// coordinates that are not too far out of gamut.
    pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
        let [r, g, b] = *value;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta < ACHROMATIC_DELTA {
            return [0.0, 0.0, l];
        }

        let divisor = 1.0 - (2.0 * l - 1.0).abs();
        let s = if divisor == 0.0 { 0.0 } else { delta / divisor };

        #[allow(clippy::float_cmp)]
        let sextant = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        [(sextant * 60.0).rem_euclid(360.0), s, l]
    }
}

pub(crate) use hsl::{hsl_to_rgb, rgb_to_hsl};

// --------------------------------------------------------------------------------------------------------------------

mod oklab {
    use crate::Float;

    /// Convert coordinates for Oklch to Oklab. This is a one-hop, direct
    /// conversion.
    #[allow(non_snake_case)]
    pub(crate) fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;

        if h.is_nan() {
            [L, 0.0, 0.0]
        } else {
            let hue_radian = h.to_radians();
            [L, C * hue_radian.cos(), C * hue_radian.sin()]
        }
    }

    const EPSILON: Float = 0.0002;

    /// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
    /// conversion. Near-gray colors have a not-a-number hue.
    #[allow(non_snake_case)]
    pub(crate) fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;

        let a_m = a.abs();
        if a_m < EPSILON && b.abs() < EPSILON {
            return [L, 0.0, Float::NAN];
        }

        // per herbie 2.1
        let C = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };

        let h = b.atan2(a).to_degrees();
        let h = if h.is_sign_negative() { h + 360.0 } else { h };

        [L, C, h]
    }
}

pub(crate) use oklab::{oklab_to_oklch, oklch_to_oklab};

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

/// Convert coordinates for Oklab to XYZ. This is a one-hop, direct conversion,
/// even though it requires two matrix multiplications and a coordinate-wise
/// exponential.
fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert coordinates for XYZ to Oklab. This is a one-hop, direct conversion,
/// even though it requires two matrix multiplications and a coordinate-wise
/// exponential.
fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
#[inline]
fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert coordinates for XYZ to sRGB. This is a two-hop conversion.
#[inline]
fn xyz_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = xyz_to_linear_srgb(value);
    linear_rgb_to_rgb(&linear_srgb)
}

/// Convert coordinates for Display P3 to XYZ. This is a two-hop conversion.
#[inline]
fn p3_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_p3 = rgb_to_linear_rgb(value);
    linear_display_p3_to_xyz(&linear_p3)
}

/// Convert coordinates for XYZ to Display P3. This is a two-hop conversion.
#[inline]
fn xyz_to_p3(value: &[Float; 3]) -> [Float; 3] {
    let linear_p3 = xyz_to_linear_display_p3(value);
    linear_rgb_to_rgb(&linear_p3)
}

/// Convert coordinates for Oklch to XYZ. This is a two-hop conversion.
#[inline]
fn oklch_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let oklab = oklch_to_oklab(value);
    oklab_to_xyz(&oklab)
}

/// Convert coordinates for XYZ to Oklch. This is a two-hop conversion.
#[inline]
fn xyz_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let oklab = xyz_to_oklab(value);
    oklab_to_oklch(&oklab)
}

/// Convert coordinates for HSL to XYZ. This is a three-hop conversion.
#[inline]
fn hsl_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let rgb = hsl_to_rgb(value);
    rgb_to_xyz(&rgb)
}

/// Convert coordinates for XYZ to HSL. This is a three-hop conversion.
#[inline]
fn xyz_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let rgb = xyz_to_rgb(value);
    rgb_to_hsl(&rgb)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color model to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to to the targeted color model, which may be the same as the original
/// color model. This function does not check whether the result is in gamut for
/// the targeted color model.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_model: ColorModel,
    to_model: ColorModel,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorModel::*;

    // 1. Normalize coordinates. Be done if color models are the same.
    let coordinates = normalize(from_model, coordinates);
    if from_model == to_model {
        return coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root XYZ
    match (from_model, to_model) {
        (Rgb, Hsl) => return rgb_to_hsl(&coordinates),
        (Hsl, Rgb) => return hsl_to_rgb(&coordinates),
        (Oklch, Oklab) => return oklch_to_oklab(&coordinates),
        (Oklab, Oklch) => return oklab_to_oklch(&coordinates),
        _ => (),
    };

    // 3a. Convert from source color model to root XYZ
    let intermediate = match from_model {
        Rgb => rgb_to_xyz(&coordinates),
        Hsl => hsl_to_xyz(&coordinates),
        Oklch => oklch_to_xyz(&coordinates),
        Oklab => oklab_to_xyz(&coordinates),
        P3 => p3_to_xyz(&coordinates),
        Xyz => coordinates,
    };

    // 3b. Convert from root XYZ to target color model on different branch
    match to_model {
        Rgb => xyz_to_rgb(&intermediate),
        Hsl => xyz_to_hsl(&intermediate),
        Oklch => xyz_to_oklch(&intermediate),
        Oklab => xyz_to_oklab(&intermediate),
        P3 => xyz_to_p3(&intermediate),
        Xyz => intermediate,
    }
}

/// Convert the coordinates to linear sRGB.
///
/// Linear sRGB is not a color model of its own but only serves as rendering
/// target for `vec()` notation.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_linear_srgb(model: ColorModel, coordinates: &[Float; 3]) -> [Float; 3] {
    let rgb = convert(model, ColorModel::Rgb, coordinates);
    rgb_to_linear_rgb(&rgb)
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, ColorModel::*};
    use crate::Float;

    struct Representations {
        rgb: [Float; 3],
        linear_rgb: [Float; 3],
        hsl: [Float; 3],
        p3: [Float; 3],
        linear_p3: [Float; 3],
        oklch: [Float; 3],
        oklab: [Float; 3],
        xyz: [Float; 3],
    }

    const BLACK: Representations = Representations {
        // #000000
        rgb: [0.0, 0.0, 0.0],
        linear_rgb: [0.0, 0.0, 0.0],
        hsl: [0.0, 0.0, 0.0],
        p3: [0.0, 0.0, 0.0],
        linear_p3: [0.0, 0.0, 0.0],
        oklch: [0.0, 0.0, Float::NAN],
        oklab: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
    };

    const YELLOW: Representations = Representations {
        // #ffca00
        rgb: [1.0, 0.792156862745098, 0.0],
        linear_rgb: [1.0, 0.5906188409193369, 0.0],
        hsl: [47.52941176470588, 1.0, 0.5],
        p3: [0.967346220711791, 0.8002244967941964, 0.27134084647161244],
        linear_p3: [0.9273192749713864, 0.6042079205196976, 0.059841923211596565],
        oklch: [0.8613332073307732, 0.1760097742886813, 89.440876452466],
        oklab: [
            0.8613332073307732,
            0.0017175723640959761,
            0.17600139371700052,
        ],
        xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
    };

    const BLUE: Representations = Representations {
        // #3178ea
        rgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
        linear_rgb: [
            0.030713443732993635,
            0.18782077230067787,
            0.8227857543962835,
        ],
        hsl: [216.97297297297297, 0.8149779735682819, 0.5549019607843138],
        p3: [0.26851535563550943, 0.4644576150842869, 0.8876966971452301],
        linear_p3: [0.058605969547446124, 0.18260572039525869, 0.763285235993837],
        oklch: [0.5909012953108558, 0.18665606306724153, 259.66681920272595],
        oklab: [
            0.5909012953108558,
            -0.03348086515869664,
            -0.1836287492414715,
        ],
        xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        rgb: [1.0, 1.0, 1.0],
        linear_rgb: [1.0, 1.0, 1.0],
        hsl: [0.0, 0.0, 1.0],
        p3: [0.9999999999999999, 0.9999999999999997, 0.9999999999999999],
        linear_p3: [1.0, 0.9999999999999998, 1.0],
        oklch: [1.0000000000000002, 0.0, Float::NAN],
        oklab: [1.0000000000000002, -4.996003610813204e-16, 0.0],
        xyz: [0.9504559270516717, 1.0, 1.0890577507598784],
    };

    #[test]
    fn test_conversions() {
        for &color in [&BLACK, &YELLOW, &BLUE, &WHITE].iter() {
            // Test all one-hop conversions
            let linear_rgb = rgb_to_linear_rgb(&color.rgb);
            assert_same_coordinates!(Rgb, &linear_rgb, &color.linear_rgb);

            let rgb = linear_rgb_to_rgb(&linear_rgb);
            assert_same_coordinates!(Rgb, &rgb, &color.rgb);

            let hsl = rgb_to_hsl(&color.rgb);
            assert_same_coordinates!(Hsl, &hsl, &color.hsl);

            let also_rgb = hsl_to_rgb(&hsl);
            assert_same_coordinates!(Rgb, &also_rgb, &color.rgb);

            let xyz = linear_srgb_to_xyz(&linear_rgb);
            assert_same_coordinates!(Xyz, &xyz, &color.xyz);

            let also_linear_rgb = xyz_to_linear_srgb(&xyz);
            assert_same_coordinates!(Rgb, &also_linear_rgb, &linear_rgb);

            let linear_p3 = xyz_to_linear_display_p3(&xyz);
            assert_same_coordinates!(P3, &linear_p3, &color.linear_p3);

            let also_xyz = linear_display_p3_to_xyz(&linear_p3);
            assert_same_coordinates!(Xyz, &also_xyz, &xyz);

            let p3 = linear_rgb_to_rgb(&linear_p3);
            assert_same_coordinates!(P3, &p3, &color.p3);

            let also_linear_p3 = rgb_to_linear_rgb(&p3);
            assert_same_coordinates!(P3, &also_linear_p3, &linear_p3);

            let oklab = xyz_to_oklab(&xyz);
            assert_same_coordinates!(Oklab, &oklab, &color.oklab);

            let and_again_xyz = oklab_to_xyz(&oklab);
            assert_same_coordinates!(Xyz, &and_again_xyz, &xyz);

            let oklch = oklab_to_oklch(&oklab);
            assert_same_coordinates!(Oklch, &oklch, &color.oklch);

            let also_oklab = oklch_to_oklab(&oklch);
            assert_same_coordinates!(Oklab, &also_oklab, &oklab);
        }
    }

    #[test]
    fn test_multi_hop() {
        assert_same_coordinates!(
            Oklch,
            &convert(Rgb, Oklch, &BLUE.rgb),
            &BLUE.oklch
        );
        assert_same_coordinates!(Hsl, &convert(P3, Hsl, &YELLOW.p3), &YELLOW.hsl);
        assert_same_coordinates!(
            Rgb,
            &to_linear_srgb(Oklab, &YELLOW.oklab),
            &YELLOW.linear_rgb
        );
    }

    #[test]
    fn test_negative_linear() {
        let linear = rgb_to_linear_rgb(&[-0.5, 0.02, 1.2]);
        assert!(linear[0] < 0.0);
        assert_eq!(linear[1], 0.02 / 12.92);
        assert!(1.0 < linear[2]);

        let round_trip = linear_rgb_to_rgb(&linear);
        assert_same_coordinates!(Rgb, &round_trip, &[-0.5, 0.02, 1.2]);
    }

    #[test]
    fn test_noisy_gray_hsl() {
        let [h, s, l] = rgb_to_hsl(&[1.0, 0.9999999999999998, 1.0000000000000002]);
        assert_eq!([h, s], [0.0, 0.0]);
        assert!((l - 1.0).abs() < 1e-12);

        let [h, s, l] = rgb_to_hsl(&[0.5, 0.5 + 1e-15, 0.5 - 1e-15]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 0.5).abs() < 1e-12);

        // A genuine, if small, spread still has a hue.
        let [h, s, _] = rgb_to_hsl(&[0.5, 0.5, 0.5001]);
        assert!((h - 240.0).abs() < 1e-6);
        assert!(0.0 < s);
    }

    #[test]
    fn test_24bit() {
        assert_eq!(to_24bit(&[1.2, 0.49237, -0.2]), [255, 126, 0]);
        assert_eq!(from_24bit(255, 0, 51), [1.0, 0.0, 0.2]);
    }
}
