//! Resolving colors into renderings with sRGB fallbacks.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::ColorModel;
use crate::error::{RenderError, RenderErrorKind};
use crate::notation::preview_hex;
use crate::{render, Color, Float, Gamut, GamutDetector, GamutReport, OutputNotation};

/// The warnings attached to a conversion result.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, hash, module = "gamutcast")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Warnings {
    /// The rendering is based on a gamut-mapped approximation of a color
    /// outside Display P3.
    pub used_fallback: bool,
    /// The color lies outside both sRGB and Display P3.
    pub out_of_gamut: bool,
}

/// The result of rendering one color in one notation.
///
/// Results are created fresh for every conversion and never change.
#[cfg_attr(feature = "pyffi", pyclass(frozen, get_all, module = "gamutcast"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionResult {
    notation: OutputNotation,
    rendered_text: String,
    preview_hex: String,
    gamut: Gamut,
    fallback_space: Gamut,
    warnings: Warnings,
}

impl ConversionResult {
    /// The text of degraded results.
    pub const INVALID_COLOR: &'static str = "Invalid Color";

    /// Create the placeholder result for a color that cannot be rendered in
    /// the given notation.
    pub fn degraded(notation: OutputNotation) -> Self {
        Self {
            notation,
            rendered_text: Self::INVALID_COLOR.to_string(),
            preview_hex: "#000000".to_string(),
            gamut: Gamut::Out,
            fallback_space: Gamut::Srgb,
            warnings: Warnings {
                used_fallback: true,
                out_of_gamut: true,
            },
        }
    }

    /// Get the notation.
    pub fn notation(&self) -> OutputNotation {
        self.notation
    }

    /// Get the rendered text.
    pub fn rendered_text(&self) -> &str {
        &self.rendered_text
    }

    /// Get the `#RRGGBB` or `#RRGGBBAA` preview of the sRGB fallback.
    pub fn preview_hex(&self) -> &str {
        &self.preview_hex
    }

    /// Get the gamut of the original color.
    pub fn gamut(&self) -> Gamut {
        self.gamut
    }

    /// Get the gamut of the fallback color, which always is sRGB.
    pub fn fallback_space(&self) -> Gamut {
        self.fallback_space
    }

    /// Get the warnings.
    pub fn warnings(&self) -> Warnings {
        self.warnings
    }

    /// Determine whether this result is the placeholder for a failed
    /// rendering.
    pub fn is_degraded(&self) -> bool {
        self.rendered_text == Self::INVALID_COLOR
    }
}

impl core::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.rendered_text)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Resolve the color for the given notation.
///
/// sRGB-native notations render the report's sRGB projection, which is
/// gamut-mapped for colors outside sRGB. `figma-p3` renders the Display P3
/// projection. `p3`, `oklch`, `oklab`, and `linear-rgb` render the original
/// color, preserving out-of-gamut values. A report without sRGB projection
/// falls back on mapping the color into gamut with the given tolerance.
///
/// # Errors
///
/// This function fails if the color cannot be rendered in the notation.
pub(crate) fn resolve_report(
    report: &GamutReport,
    color: &Color,
    notation: OutputNotation,
    epsilon: Float,
) -> Result<ConversionResult, RenderError> {
    if color.as_ref().iter().any(|c| c.is_infinite()) {
        return Err(RenderError::new(notation, RenderErrorKind::Infinite));
    }

    let projection_error = || RenderError::new(notation, RenderErrorKind::Projection);
    let fallback = report
        .rgb()
        .map_or_else(|| color.to_gamut_within(epsilon), Color::clone);
    let original_space = report.original_space();

    let rendered_text = if notation.is_srgb_native() {
        render(&fallback, notation)?
    } else if notation == OutputNotation::FigmaP3 {
        let p3 = match report.p3() {
            Some(p3) => p3.clone(),
            None => color.try_to(ColorModel::P3).ok_or_else(projection_error)?,
        };
        render(&p3, notation)?
    } else {
        render(color, notation)?
    };

    Ok(ConversionResult {
        notation,
        rendered_text,
        preview_hex: preview_hex(&fallback).ok_or_else(projection_error)?,
        gamut: original_space,
        fallback_space: report.fallback_space(),
        warnings: Warnings {
            used_fallback: notation.is_srgb_native() && original_space == Gamut::Out,
            out_of_gamut: original_space == Gamut::Out,
        },
    })
}

/// Resolve the color for the given notation.
///
/// This function never fails. If the color cannot be rendered, it returns the
/// [degraded](ConversionResult::degraded) result.
///
/// ```
/// # use gamutcast::{resolve, Color, Gamut, GamutDetector, OutputNotation};
/// let detector = GamutDetector::new();
/// let orange = Color::oklch(0.7432, 0.2194, 51.36);
///
/// let hex = resolve(&detector, &orange, OutputNotation::Hex);
/// assert_eq!(hex.rendered_text(), "#FF7E00");
/// assert_eq!(hex.gamut(), Gamut::P3);
/// assert!(!hex.warnings().used_fallback);
///
/// let oklch = resolve(&detector, &orange, OutputNotation::Oklch);
/// assert_eq!(oklch.rendered_text(), "oklch(74.32% 0.2194 51.36)");
/// assert_eq!(oklch.preview_hex(), "#FF7E00");
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn resolve(
    detector: &GamutDetector,
    color: &Color,
    notation: OutputNotation,
) -> ConversionResult {
    let report = detector.detect(color);
    resolve_report(&report, color, notation, detector.epsilon())
        .unwrap_or_else(|_| ConversionResult::degraded(notation))
}

// ====================================================================================================================
