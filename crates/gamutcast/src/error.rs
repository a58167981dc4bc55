//! Utility module with gamutcast's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::notation::OutputNotation;

/// An erroneous color format.
///
/// The enumeration has unit variants only, since PyO3 only supports unit
/// variants without associated state. Thankfully, the attendant loss of
/// information is rather limited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `rgb`, or `Figma P3`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `color display-p3 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `oklab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is using an unknown color space. For example,
    /// `color(unknown 1 1 1)` uses an unknown color space.
    UnknownColorSpace,

    /// A color format that is missing a coordinate. For example, `rgb(0, 0)`
    /// is missing the third coordinate.
    MissingCoordinate,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format that has a malformed floating point number as
    /// coordinate. For example, `color(srgb 1.0 0..1 0.0)` has a malformed
    /// second coordinate.
    MalformedFloat,

    /// A color format with an alpha value that is neither number nor
    /// percentage. For example, `rgb(0 0 0 / half)` has a malformed alpha.
    MalformedAlpha,

    /// A color format with more than three coordinates plus alpha. For
    /// example, `rgb(1, 2, 3, 4, 5)` has one coordinate too many.
    TooManyCoordinates,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `rgb()`, `hsl()`, `color()`, `oklab()`, \
                `oklch()`, `vec()`, or `Figma P3`",
            ),
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace => {
                f.write_str("color format should have known color space but does not")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
            MalformedAlpha => {
                f.write_str("color format alpha should be a number or percentage but is not")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates and alpha but has more")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kinds of errors while rendering a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderErrorKind {
    /// A coordinate is infinite.
    Infinite,
    /// The color could not be converted to the notation's color model.
    Projection,
}

/// An error while rendering a color in some output notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderError {
    notation: OutputNotation,
    kind: RenderErrorKind,
}

impl RenderError {
    /// Create a new render error.
    pub fn new(notation: OutputNotation, kind: RenderErrorKind) -> Self {
        Self { notation, kind }
    }

    /// Get the notation that failed to render.
    pub fn notation(&self) -> OutputNotation {
        self.notation
    }

    /// Get the kind of error.
    pub fn kind(&self) -> RenderErrorKind {
        self.kind
    }
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cause = match self.kind {
            RenderErrorKind::Infinite => "could not render infinite coordinate in",
            RenderErrorKind::Projection => "could not convert color for",
        };
        f.write_fmt(format_args!("{} {} notation", cause, self.notation))
    }
}

impl std::error::Error for RenderError {}

#[cfg(feature = "pyffi")]
impl From<RenderError> for PyErr {
    fn from(value: RenderError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error indicating an unknown output notation name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownNotationError {
    pub name: String,
}

impl core::fmt::Display for UnknownNotationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "notation name should be `rgb`, `hex`, `hex-alpha`, `hsl`, `p3`, `oklch`, `oklab`, \
            `linear-rgb`, or `figma-p3` but is `{}`",
            self.name
        ))
    }
}

impl std::error::Error for UnknownNotationError {}

#[cfg(feature = "pyffi")]
impl From<UnknownNotationError> for PyErr {
    fn from(value: UnknownNotationError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
