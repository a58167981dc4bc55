//! Output notations and their rendering.
//!
//! Every [`OutputNotation`] has a fixed precision policy. The sRGB-native
//! notations clamp their channels to unit range before formatting, whereas the
//! wide-gamut notations faithfully reproduce out-of-gamut values.
//!
//! | Notation     | Example                                     |
//! | ------------ | ------------------------------------------- |
//! | `rgb`        | `rgb(255, 126, 0)`                          |
//! | `hex`        | `#FF7E00`                                   |
//! | `hex-alpha`  | `#FF7E00FF`                                 |
//! | `hsl`        | `hsl(29.54 100% 50%)`                       |
//! | `p3`         | `color(display-p3 1.0000 0.5020 0.0000)`    |
//! | `oklch`      | `oklch(74.32% 0.2194 51.36)`                |
//! | `oklab`      | `oklab(74.32% 0.14 0.2)`                    |
//! | `linear-rgb` | `vec(1.17638, 0.18288, -0.03661, 1.00000)`  |
//! | `figma-p3`   | `Figma P3 #FF8000FF`                        |

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{clip, rgb_to_hsl, round_to, to_byte, to_linear_srgb, ColorModel};
use crate::error::{RenderError, RenderErrorKind, UnknownNotationError};
use crate::{Color, Float};

/// The enumeration of output notations.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "gamutcast")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutputNotation {
    Rgb,
    Hex,
    HexAlpha,
    Hsl,
    P3,
    Oklch,
    Oklab,
    LinearRgb,
    FigmaP3,
}

impl OutputNotation {
    /// All output notations in their canonical order.
    pub const ALL: [OutputNotation; 9] = [
        Self::Rgb,
        Self::Hex,
        Self::HexAlpha,
        Self::Hsl,
        Self::P3,
        Self::Oklch,
        Self::Oklab,
        Self::LinearRgb,
        Self::FigmaP3,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl OutputNotation {
    /// Get this notation's kebab-case name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::Hex => "hex",
            Self::HexAlpha => "hex-alpha",
            Self::Hsl => "hsl",
            Self::P3 => "p3",
            Self::Oklch => "oklch",
            Self::Oklab => "oklab",
            Self::LinearRgb => "linear-rgb",
            Self::FigmaP3 => "figma-p3",
        }
    }

    /// Determine whether this notation can only express sRGB colors.
    pub const fn is_srgb_native(&self) -> bool {
        matches!(*self, Self::Rgb | Self::Hex | Self::HexAlpha | Self::Hsl)
    }

    /// Determine the color model this notation renders from.
    ///
    /// Linear sRGB is no color model of its own, so `linear-rgb` renders from
    /// sRGB.
    pub const fn model(&self) -> ColorModel {
        match *self {
            Self::Rgb | Self::Hex | Self::HexAlpha | Self::Hsl | Self::LinearRgb => ColorModel::Rgb,
            Self::P3 | Self::FigmaP3 => ColorModel::P3,
            Self::Oklch => ColorModel::Oklch,
            Self::Oklab => ColorModel::Oklab,
        }
    }

    /// Render the color in this notation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "render")]
    pub fn py_render(&self, color: &Color) -> Result<String, RenderError> {
        render(color, *self)
    }

    /// Get this notation's name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_string()
    }
}

impl core::str::FromStr for OutputNotation {
    type Err = UnknownNotationError;

    /// Parse a notation from its name, ignoring case and surrounding white
    /// space.
    ///
    /// ```
    /// # use gamutcast::OutputNotation;
    /// # use gamutcast::error::UnknownNotationError;
    /// let notation: OutputNotation = " Figma-P3 ".parse()?;
    /// assert_eq!(notation, OutputNotation::FigmaP3);
    /// assert!("cmyk".parse::<OutputNotation>().is_err());
    /// # Ok::<(), UnknownNotationError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.name() == name)
            .ok_or(UnknownNotationError { name })
    }
}

impl core::fmt::Display for OutputNotation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the value with the given number of decimals, dropping trailing
/// zeros and a trailing decimal point.
fn trimmed(value: Float, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, round_to(value, decimals as i32));
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Format the value with exactly the given number of decimals.
fn padded(value: Float, decimals: usize) -> String {
    format!("{:.*}", decimals, round_to(value, decimals as i32))
}

/// Format the alpha suffix, which is empty for opaque colors.
fn alpha_suffix(alpha: Float) -> String {
    if alpha < 1.0 {
        format!(" / {}", padded(alpha, 3))
    } else {
        String::new()
    }
}

/// Format the coordinates as uppercase hexadecimal with leading hash.
fn hex(coordinates: &[Float; 3], alpha: Option<Float>) -> String {
    let [r, g, b] = coordinates.map(to_byte);
    alpha.map_or_else(
        || format!("#{:02X}{:02X}{:02X}", r, g, b),
        |a| format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, to_byte(a)),
    )
}

/// Format the sRGB color as preview swatch, i.e., as `#RRGGBB` if opaque and
/// as `#RRGGBBAA` otherwise.
pub(crate) fn preview_hex(color: &Color) -> Option<String> {
    let rgb = color.try_to(ColorModel::Rgb)?;
    let alpha = rgb.opacity();
    Some(hex(
        &rgb.coordinates(),
        if alpha < 1.0 { Some(alpha) } else { None },
    ))
}

/// Render the color in the given notation.
///
/// This function first converts the color into the notation's color model.
/// The sRGB-native notations clamp coordinates to unit range. `hsl` derives
/// its coordinates from the clamped sRGB coordinates. `p3`, `oklch`, `oklab`,
/// and `linear-rgb` reproduce out-of-gamut values as they are. `figma-p3`
/// clamps to the same unit range as `hex`.
///
/// ```
/// # use gamutcast::{render, Color, OutputNotation};
/// let orange = Color::from_24bit(255, 126, 0);
/// assert_eq!(render(&orange, OutputNotation::Rgb).unwrap(), "rgb(255, 126, 0)");
/// assert_eq!(render(&orange, OutputNotation::HexAlpha).unwrap(), "#FF7E00FF");
/// assert_eq!(
///     render(&orange.with_alpha(0.5), OutputNotation::Rgb).unwrap(),
///     "rgb(255, 126, 0 / 0.500)"
/// );
/// ```
///
/// # Errors
///
/// This function fails if the color has infinite coordinates or cannot be
/// converted into the notation's color model.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn render(color: &Color, notation: OutputNotation) -> Result<String, RenderError> {
    use OutputNotation::*;

    if color.as_ref().iter().any(|c| c.is_infinite()) {
        return Err(RenderError::new(notation, RenderErrorKind::Infinite));
    }

    let converted = color
        .try_to(notation.model())
        .ok_or_else(|| RenderError::new(notation, RenderErrorKind::Projection))?;
    let alpha = converted.opacity();

    let text = match notation {
        Rgb => {
            let [r, g, b] = converted.coordinates().map(to_byte);
            format!("rgb({}, {}, {}{})", r, g, b, alpha_suffix(alpha))
        }
        Hex => hex(&converted.coordinates(), None),
        HexAlpha => hex(&converted.coordinates(), Some(alpha)),
        Hsl => {
            let [h, s, l] = rgb_to_hsl(&clip(&converted.coordinates()));
            // Hues just below 360 round up to it
            let h = round_to(h, 2).rem_euclid(360.0);
            format!(
                "hsl({} {}% {}%{})",
                trimmed(h, 2),
                trimmed(100.0 * s, 1),
                trimmed(100.0 * l, 1),
                alpha_suffix(alpha)
            )
        }
        P3 => {
            let [r, g, b] = converted.coordinates();
            format!(
                "color(display-p3 {} {} {}{})",
                padded(r, 4),
                padded(g, 4),
                padded(b, 4),
                alpha_suffix(alpha)
            )
        }
        Oklch => {
            let [l, c, h] = converted.normalize().coordinates();
            format!(
                "oklch({}% {} {}{})",
                trimmed(100.0 * l, 2),
                trimmed(c, 4),
                trimmed(h, 2),
                alpha_suffix(alpha)
            )
        }
        Oklab => {
            let [l, a, b] = converted.coordinates();
            format!(
                "oklab({}% {} {}{})",
                trimmed(100.0 * l, 2),
                trimmed(a, 2),
                trimmed(b, 1),
                alpha_suffix(alpha)
            )
        }
        LinearRgb => {
            let [r, g, b] = to_linear_srgb(ColorModel::Rgb, &converted.coordinates());
            format!(
                "vec({}, {}, {}, {})",
                padded(r, 5),
                padded(g, 5),
                padded(b, 5),
                padded(alpha, 5)
            )
        }
        FigmaP3 => format!("Figma P3 {}", hex(&converted.coordinates(), Some(alpha))),
    };

    Ok(text)
}

// ====================================================================================================================
