use core::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    convert, format, from_24bit, in_gamut, normalize, parse, to_24bit, to_eq_bits,
    to_eq_coordinates, to_gamut, ColorModel, EPSILON,
};
use crate::Float;

/// A high-resolution color object.
///
/// Every color object has a [color model](ColorModel), three coordinates, and
/// an optional alpha. An absent alpha means the color is opaque. A present
/// alpha is clamped to unit range upon construction.
///
/// # Color Coordinates
///
/// For RGB models, the coordinates of in-gamut colors have unit range. HSL's
/// saturation and lightness have unit range, too, whereas its hue is in
/// degrees. For the other color models, there are no gamut bounds.
///
/// A coordinate may be not-a-number because it is a [powerless
/// component](https://www.w3.org/TR/css-color-4/#powerless), such as the hue in
/// Oklch when chroma is zero, or a [missing
/// component](https://www.w3.org/TR/css-color-4/#missing), i.e., a component
/// intentionally set to `none`. Conversions normalize such coordinates to zero
/// before doing any arithmetic.
///
/// ## Equality Testing and Hashing
///
/// Equal colors must have equal hashes. Hence this class normalizes
/// coordinates before either operation: It replaces not-a-numbers with zero,
/// also zeroes out chroma or saturation for not-a-number hues, removes full
/// rotations from hues, reduces precision by rounding, and drops the sign of
/// negative zeros. Alpha is compared the same way, with an absent alpha
/// distinct from an opaque one.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "gamutcast")
)]
#[derive(Clone)]
pub struct Color {
    model: ColorModel,
    coordinates: [Float; 3],
    alpha: Option<Float>,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Instantiate a new, opaque color with the given color model and
    /// coordinates.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let pink = Color::new(ColorModel::Oklch, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink.as_ref(), &[0.7_f64, 0.22_f64, 3.0_f64]);
    /// assert_eq!(pink.alpha(), None);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(model: ColorModel, coordinates: [Float; 3]) -> Self {
        Self {
            model,
            coordinates,
            alpha: None,
        }
    }

    /// Instantiate a new, opaque color with the given color model and
    /// coordinates.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let pink = Color::new(ColorModel::Oklch, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink.as_ref(), &[0.7_f64, 0.22_f64, 3.0_f64]);
    /// assert_eq!(pink.alpha(), None);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(model: ColorModel, coordinates: [Float; 3]) -> Self {
        Self {
            model,
            coordinates,
            alpha: None,
        }
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as `Color`'s [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, crate::error::ColorFormatError> {
        Color::from_str(s)
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn rgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorModel::Rgb, [r, g, b])
    }

    /// Instantiate a new Display P3 color with the given red, green, and blue
    /// coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn p3(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorModel::P3, [r, g, b])
    }

    /// Instantiate a new HSL color with the given hue, saturation, and
    /// lightness. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn hsl(h: Float, s: Float, l: Float) -> Self {
        Self::new(ColorModel::Hsl, [h, s, l])
    }

    /// Instantiate a new Oklch color with the given lightness L, chroma C, and
    /// hue h. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklch(l: Float, c: Float, h: Float) -> Self {
        Self::new(ColorModel::Oklch, [l, c, h])
    }

    /// Instantiate a new Oklab color with the given lightness L, a, and b.
    /// <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorModel::Oklab, [l, a, b])
    }

    /// Instantiate a new XYZ color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn xyz(x: Float, y: Float, z: Float) -> Self {
        Self::new(ColorModel::Xyz, [x, y, z])
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let orange = Color::from_24bit(255, 126, 0);
    /// assert_eq!(orange.model(), ColorModel::Rgb);
    /// assert_eq!(orange.to_24bit(), [255, 126, 0]);
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorModel::Rgb, from_24bit(r, g, b))
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let orange = Color::from_24bit(255, 126, 0);
    /// assert_eq!(orange.model(), ColorModel::Rgb);
    /// assert_eq!(orange.to_24bit(), [255, 126, 0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorModel::Rgb, from_24bit(r, g, b))
    }

    /// Create a copy of this color with the given alpha, which is clamped to
    /// unit range. A not-a-number alpha makes the color opaque.
    ///
    /// ```
    /// # use gamutcast::Color;
    /// let ghost = Color::rgb(1, 1, 1).with_alpha(1.5);
    /// assert_eq!(ghost.alpha(), Some(1.0));
    /// assert_eq!(Color::rgb(1, 1, 1).with_alpha(-1.0).opacity(), 0.0);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            alpha: if alpha.is_nan() {
                None
            } else {
                Some(alpha.clamp(0.0, 1.0))
            },
            ..self.clone()
        }
    }

    /// Access the color model.
    #[inline]
    pub fn model(&self) -> ColorModel {
        self.model
    }

    /// Access the coordinates.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Access the alpha, if present.
    #[inline]
    pub fn alpha(&self) -> Option<Float> {
        self.alpha
    }

    /// Determine the opacity, i.e., the alpha defaulting to one.
    #[inline]
    pub fn opacity(&self) -> Float {
        self.alpha.unwrap_or(1.0)
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the coordinate at the given index. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -3..=-1 => Ok(self.coordinates[(3 + index) as usize]),
            0..=2 => Ok(self.coordinates[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Normalize this color.
    ///
    /// This method replaces not-a-number coordinates with zero. For polar
    /// models, a not-a-number hue also zeroes out chroma or saturation. All
    /// other coordinates pass through unchanged, even if out of range.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self {
            coordinates: normalize(self.model, &self.coordinates),
            ..self.clone()
        }
    }

    /// Convert this color to the target color model.
    ///
    /// The result carries over this color's alpha. This method does not check
    /// whether the result is finite; use [`Color::try_to`] for that.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let orange = Color::rgb(1.0, 0.5, 0.0);
    /// let same_orange = orange.to(ColorModel::Oklch).to(ColorModel::Rgb);
    /// assert_eq!(orange, same_orange);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorModel) -> Self {
        Self {
            model: target,
            coordinates: convert(self.model, target, &self.coordinates),
            alpha: self.alpha,
        }
    }

    /// Try converting this color to the target color model.
    ///
    /// This method returns `None` if the source coordinates include infinite
    /// values or if the converted coordinates are not finite. The only
    /// exception is a not-a-number hue, which indicates an achromatic color.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let unreal = Color::new(ColorModel::Xyz, [f64::INFINITY, 0.0, 0.0]);
    /// assert!(unreal.try_to(ColorModel::Oklch).is_none());
    /// assert!(Color::rgb(0, 0, 0).try_to(ColorModel::Oklch).is_some());
    /// ```
    pub fn try_to(&self, target: ColorModel) -> Option<Self> {
        if self.coordinates.iter().any(|c| c.is_infinite()) {
            return None;
        }

        let color = self.to(target);
        let hue = target.hue_index();
        color
            .coordinates
            .iter()
            .enumerate()
            .all(|(index, c)| c.is_finite() || (c.is_nan() && hue == Some(index)))
            .then_some(color)
    }

    /// Determine whether this color is in gamut for its color model.
    ///
    /// For RGB models, coordinates must be within unit range, allowing for a
    /// small tolerance. HSL colors must be in gamut in sRGB. The unbounded
    /// models always are in gamut.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let green = Color::p3(0.0, 1.0, 0.0);
    /// assert!(green.in_gamut());
    /// assert!(!green.to(ColorModel::Rgb).in_gamut());
    /// ```
    pub fn in_gamut(&self) -> bool {
        use ColorModel::*;

        match self.model {
            Rgb | P3 => in_gamut(&self.coordinates, 1.0, EPSILON),
            Hsl => in_gamut(&convert(Hsl, Rgb, &self.coordinates), 1.0, EPSILON),
            Oklch | Oklab | Xyz => true,
        }
    }

    /// Map this color into the sRGB gamut.
    ///
    /// This method uses the [CSS Color 4
    /// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping) for
    /// gamut mapping. It performs a binary search in Oklch for a color with
    /// less chroma than the original (but the same lightness and hue), whose
    /// clipped version is within the *just noticeable difference* and in
    /// gamut. That clipped color is the result, always in sRGB. Alpha carries
    /// over.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let too_green = Color::p3(0.0, 1.0, 0.0);
    /// let green = too_green.to_gamut();
    /// assert_eq!(green.model(), ColorModel::Rgb);
    /// assert!(green.in_gamut());
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_gamut(&self) -> Self {
        self.to_gamut_within(EPSILON)
    }

    /// Convert this color to 24-bit sRGB, clipping coordinates as needed.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&convert(self.model, ColorModel::Rgb, &self.coordinates))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its CSS representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Color {
    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let fire_brick = Color::rgb(177.0/255.0, 31.0/255.0, 36.0/255.0);
    /// assert_eq!(fire_brick.model(), ColorModel::Rgb);
    /// ```
    pub fn rgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorModel::Rgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Display P3 color with the given red, green, and blue
    /// coordinates.
    pub fn p3(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorModel::P3, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new HSL color with the given hue in degrees as well as
    /// saturation and lightness in unit range.
    pub fn hsl(h: impl Into<Float>, s: impl Into<Float>, l: impl Into<Float>) -> Self {
        Self::new(ColorModel::Hsl, [h.into(), s.into(), l.into()])
    }

    /// Instantiate a new Oklch color with the given lightness L, chroma C, and
    /// hue h.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// let orange = Color::oklch(0.7432, 0.2194, 51.36);
    /// assert_eq!(orange.model(), ColorModel::Oklch);
    /// assert!(!orange.to(ColorModel::Rgb).in_gamut());
    /// ```
    pub fn oklch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorModel::Oklch, [l.into(), c.into(), h.into()])
    }

    /// Instantiate a new Oklab color with the given lightness L, a, and b.
    pub fn oklab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorModel::Oklab, [l.into(), a.into(), b.into()])
    }

    /// Instantiate a new XYZ color with the D65 white point.
    pub fn xyz(x: impl Into<Float>, y: impl Into<Float>, z: impl Into<Float>) -> Self {
        Self::new(ColorModel::Xyz, [x.into(), y.into(), z.into()])
    }
}

impl Color {
    /// Map this color into the sRGB gamut with the given tolerance.
    pub(crate) fn to_gamut_within(&self, epsilon: Float) -> Self {
        Self {
            model: ColorModel::Rgb,
            coordinates: to_gamut(self.model, &self.coordinates, epsilon),
            alpha: self.alpha,
        }
    }
}

/// Map the color into the sRGB gamut.
///
/// This function is a thin wrapper around [`Color::to_gamut`]. The result
/// always is an sRGB color with less or equal chroma but the same lightness
/// and hue as the original, within the just noticeable difference. Colors that
/// cannot be projected into Oklch map to black.
///
/// ```
/// # use gamutcast::{map_to_gamut, Color};
/// let orange = Color::oklch(0.7432, 0.2194, 51.36);
/// assert_eq!(map_to_gamut(&orange).to_24bit(), [255, 126, 0]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn map_to_gamut(color: &Color) -> Color {
    color.to_gamut()
}

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// This method recognizes the following notations:
    ///
    ///   * The *hashed notation* with three, four, six, or eight hexadecimal
    ///     digits for sRGB, e.g., `#123` or `#ff7e0080`. The three and four
    ///     digit versions are short forms with every digit repeated.
    ///   * Figma's notation for Display P3 with the `Figma P3` prefix, e.g.,
    ///     `Figma P3 #FF8000FF`, and the shorthand with exactly eight
    ///     hexadecimal digits but no hash, e.g., `FF8000FF`.
    ///   * The `rgb()`, `rgba()`, `hsl()`, and `hsla()` CSS functions with
    ///     comma- or space-separated arguments.
    ///   * The `color()`, `oklab()`, and `oklch()` CSS functions. For
    ///     `color()`, the color space must be `srgb`, `display-p3`, `xyz`, or
    ///     `xyz-d65`.
    ///   * The `vec()` notation for linear sRGB.
    ///
    /// An optional alpha follows after a slash and, for legacy functions, also
    /// as fourth argument.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel};
    /// # use gamutcast::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let orange = Color::from_str("rgb(255, 126, 0)")?;
    /// assert_eq!(orange, Color::from_24bit(255, 126, 0));
    ///
    /// let figma: Color = str::parse("Figma P3 #FF8000FF")?;
    /// assert_eq!(figma.model(), ColorModel::P3);
    /// assert_eq!(figma.alpha(), Some(1.0));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(model, coordinates, alpha)| Self {
            model,
            coordinates,
            alpha,
        })
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl core::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl core::hash::Hash for Color {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.model.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.model, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
        self.alpha.map(to_eq_bits).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// ```
    /// # use gamutcast::{Color, Float};
    /// assert_eq!(
    ///     Color::rgb(Float::NAN, 1e-15, 0.12),
    ///     Color::rgb(0,          0,     0.12)
    /// );
    /// assert_eq!(Color::oklch(0.5, 0.1, 665), Color::oklch(0.5, 0.1, 305));
    /// assert_ne!(Color::rgb(0, 0, 0), Color::rgb(0, 0, 0).with_alpha(1.0));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.model != other.model {
            return false;
        } else if self.alpha.map(to_eq_bits) != other.alpha.map(to_eq_bits) {
            return false;
        }

        let n1 = to_eq_coordinates(self.model, &self.coordinates);
        let n2 = to_eq_coordinates(other.model, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl core::fmt::Debug for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        match self.alpha {
            Some(alpha) => f.write_fmt(format_args!(
                "Color({:?}, [{}, {}, {}], {})",
                self.model, c1, c2, c3, alpha
            )),
            None => f.write_fmt(format_args!(
                "Color({:?}, [{}, {}, {}])",
                self.model, c1, c2, c3
            )),
        }
    }
}

impl core::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in CSS format using either a `color()`,
    /// `hsl()`, `oklab()`, or `oklch()` CSS function and three space-separated
    /// coordinates, followed by alpha if it is below one. It respects the
    /// formatter's precision, defaulting to 5 digits past the decimal. Since
    /// degrees and percentages are up to two orders of magnitude larger than
    /// other coordinates, this method uses a precision smaller by 2 for them.
    ///
    /// ```
    /// # use gamutcast::{Color, ColorModel::*};
    /// # use gamutcast::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let lime = Color::from_str("#a1d2ae")?;
    /// assert_eq!(format!("{}", lime), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", lime), "color(srgb 0.631 0.824 0.682)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format(self.model, &self.coordinates, self.alpha, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{map_to_gamut, Color};
    use crate::core::ColorModel;
    use crate::error::ColorFormatError;
    use crate::Float;
    use std::collections::HashSet;

    #[test]
    fn test_try_to() {
        let orange = Color::oklch(0.7432, 0.2194, 51.36);
        let rgb = orange.try_to(ColorModel::Rgb);
        assert!(rgb.is_some());

        let unreal = Color::xyz(Float::INFINITY, 0.0, 0.0);
        assert!(unreal.try_to(ColorModel::Rgb).is_none());
        assert!(unreal.try_to(ColorModel::Xyz).is_none());

        // Not-a-number coordinates normalize to zero.
        let gray = Color::oklch(0.5, 0.0, Float::NAN);
        assert!(gray.try_to(ColorModel::Rgb).is_some());

        // Achromatic colors have a powerless hue.
        let white = Color::rgb(1, 1, 1).try_to(ColorModel::Oklch);
        assert!(white.is_some_and(|c| c[2].is_nan()));
    }

    #[test]
    fn test_alpha() -> Result<(), ColorFormatError> {
        let translucent: Color = "rgb(255 126 0 / 25%)".parse()?;
        assert_eq!(translucent.alpha(), Some(0.25));
        assert_eq!(translucent.to(ColorModel::Oklab).alpha(), Some(0.25));
        assert_eq!(map_to_gamut(&translucent).alpha(), Some(0.25));
        assert_eq!(Color::rgb(0, 0, 0).opacity(), 1.0);
        assert_eq!(Color::rgb(0, 0, 0).with_alpha(Float::NAN).alpha(), None);
        Ok(())
    }

    #[test]
    fn test_hashing() {
        let mut set = HashSet::new();
        set.insert(Color::oklch(0.5, 0.1, 665.0));
        set.insert(Color::oklch(0.5, 0.1, 305.0));
        set.insert(Color::oklch(0.5, 0.1, 305.0).with_alpha(0.5));
        set.insert(Color::rgb(0.5, 0.1, 305.0));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_map_to_gamut() {
        let white = map_to_gamut(&Color::oklch(1.0, 0.2, 120.0));
        assert_eq!(white.to_24bit(), [255, 255, 255]);

        let black = map_to_gamut(&Color::oklab(-0.1, 0.2, 0.2));
        assert_eq!(black, Color::rgb(0, 0, 0));

        let unreal = map_to_gamut(&Color::xyz(Float::INFINITY, 1.0, 1.0));
        assert_eq!(unreal, Color::rgb(0, 0, 0));

        let teal = Color::rgb(0.1, 0.5, 0.5);
        assert_eq!(map_to_gamut(&teal), teal);

        // Chroma never grows and lightness stays put within the JND.
        let orange = Color::oklch(0.7432, 0.2194, 51.36);
        let mapped = map_to_gamut(&orange);
        assert!(mapped.in_gamut());
        let [l, c, h] = mapped.to(ColorModel::Oklch).coordinates();
        assert!(c <= 0.2194);
        assert!((l - 0.7432).abs() < 0.02);
        assert!((h - 51.36).abs() < 5.0);
    }

    #[test]
    fn test_in_gamut() {
        assert!(Color::rgb(1, 0, 0).in_gamut());
        assert!(!Color::rgb(1.1, 0, 0).in_gamut());
        assert!(Color::hsl(120, 1, 0.5).in_gamut());
        assert!(Color::oklch(0.9, 0.4, 0).in_gamut());
    }
}
