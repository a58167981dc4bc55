#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of supported color models.
///
/// # RGB
///
/// This crate supports two RGB color spaces, both in their gamma-corrected
/// form. From smaller to larger gamut, they are:
///
///   * [sRGB](https://en.wikipedia.org/wiki/SRGB), which has long served as the
///     default color space for the web and still is the only color space that
///     every display renders faithfully.
///   * [Display P3](https://en.wikipedia.org/wiki/DCI-P3), which covers about
///     a quarter more colors than sRGB and is supported by most recent Apple
///     hardware as well as Figma documents in P3 mode.
///
/// In-gamut coordinates range from 0 to 1, inclusive. Both color spaces share
/// the same transfer function, so their linear forms differ only by the
/// matrix used for conversion to XYZ. Linear sRGB is not a model of its own
/// but is produced on demand when rendering `vec()` notation.
///
/// # HSL
///
/// HSL is a cylindrical reparametrization of sRGB with hue in degrees as the
/// first and saturation and lightness in unit range as the second and third
/// coordinates. It is only as wide as sRGB, but coordinates computed from
/// out-of-gamut RGB values may exceed unit range.
///
/// # Oklab and Oklch
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) are the Cartesian
/// and polar forms of the same perceptually uniform color space. Oklab uses
/// lightness L with a/b for "colorness", Oklch uses lightness L, chroma C, and
/// hue h in degrees. Both are unbounded and hence can express any color,
/// including colors outside of Display P3. Gamut mapping searches for
/// in-gamut colors in Oklch because reducing chroma there preserves lightness
/// and hue.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) with the D65
/// standard illuminant serves as foundational color space. All conversions
/// between unrelated models go through XYZ.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "gamutcast")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    Rgb,
    Hsl,
    Oklch,
    Oklab,
    P3,
    Xyz,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorModel {
    /// Determine the index of the hue coordinate for polar models.
    pub const fn hue_index(&self) -> Option<usize> {
        match *self {
            Self::Hsl => Some(0),
            Self::Oklch => Some(2),
            _ => None,
        }
    }

    /// Create a human-readable representation for this color model. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl core::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorModel::*;

        let s = match *self {
            Rgb => "sRGB",
            Hsl => "HSL",
            Oklch => "Oklch",
            Oklab => "Oklab",
            P3 => "Display P3",
            Xyz => "XYZ D65",
        };

        f.write_str(s)
    }
}
