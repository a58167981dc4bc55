//! # Gamutcast
//!
//! Gamutcast converts colors between CSS notations while keeping an eye on
//! the sRGB and Display P3 gamuts.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers Python
integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Gamutcast's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorModel`] with three [`Float`] coordinates and an optional alpha.
//!     It parses CSS color syntax, Figma's Display P3 hex codes, and `vec()`
//!     literals for linear sRGB.
//!   * [`GamutDetector`] **classifies colors** as inside sRGB, inside Display
//!     P3 only, or outside both, producing a [`GamutReport`] with projections
//!     into both gamuts. It caches reports per color.
//!   * [`map_to_gamut`] implements **CSS Color 4 gamut mapping** by reducing
//!     Oklch chroma until the clipped color is within a just noticeable
//!     difference.
//!   * [`render`] formats a color in one of nine [`OutputNotation`]s, each
//!     with its own precision policy.
//!   * [`resolve`] combines detection, mapping, and rendering into a
//!     [`ConversionResult`] with [`Warnings`], never failing.
//!   * [`Converter`] ties everything together, turning color text into one
//!     result per requested notation, with [`opt::Options`] for configuration
//!     and a [`log::Log`] for diagnostics.
//!
//!
//! ## 2. Converting Colors
//!
//! ```
//! # use gamutcast::{Converter, Gamut, OutputNotation};
//! let converter = Converter::new();
//! let conversion = converter.convert("oklch(74.32% 0.2194 51.36)")?;
//!
//! for result in conversion.results() {
//!     assert_eq!(result.gamut(), Gamut::P3);
//! }
//!
//! let hex = conversion.result(OutputNotation::Hex).unwrap();
//! assert_eq!(hex.rendered_text(), "#FF7E00");
//! assert!(!hex.warnings().out_of_gamut);
//! # Ok::<(), gamutcast::error::ColorFormatError>(())
//! ```
//!
//! Colors that are valid sRGB render exactly. Colors inside Display P3 but
//! outside sRGB render gamut-mapped in the sRGB-native notations `rgb`, `hex`,
//! `hex-alpha`, and `hsl`, but exactly in the wide-gamut notations. Colors
//! outside both gamuts additionally carry the `out_of_gamut` warning, and
//! their sRGB-native renditions the `used_fallback` warning.
//!
//!
//! ## 3. Feature Flags
//!
//! Gamutcast supports two feature flags:
//!
//!   - `f64` selects the eponymous type as [`Float`] and `u64` as [`Bits`].
//!     Without the feature, gamutcast uses `f32` and `u32`, respectively.
//!     This feature is enabled by default.
//!   - `pyffi` enables the Python bindings, built with PyO3.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 4. Acknowledgements
//!
//! Gamutcast reuses [Color.js](https://colorjs.io)' formulae for conversion
//! between color spaces and implements the gamut mapping algorithm of [CSS
//! Color 4](https://www.w3.org/TR/css-color-4/).
//!
#![cfg_attr(test, allow(clippy::missing_assert_message, clippy::unwrap_used))]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod converter;
mod core;
mod detect;
pub mod error;
pub mod log;
mod notation;
mod object;
pub mod opt;
mod resolve;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use converter::{sniff_notation, Conversion, Converter};
pub use core::ColorModel;
pub use detect::{Gamut, GamutDetector, GamutReport};
pub use notation::{render, OutputNotation};
pub use object::{map_to_gamut, Color};
pub use resolve::{resolve, ConversionResult, Warnings};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn gamutcast(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(map_to_gamut, m)?)?;
    m.add_function(wrap_pyfunction!(render, m)?)?;
    m.add_function(wrap_pyfunction!(resolve, m)?)?;
    m.add_function(wrap_pyfunction!(sniff_notation, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<ColorModel>()?;
    m.add_class::<Conversion>()?;
    m.add_class::<ConversionResult>()?;
    m.add_class::<Converter>()?;
    m.add_class::<Gamut>()?;
    m.add_class::<GamutDetector>()?;
    m.add_class::<GamutReport>()?;
    m.add_class::<OutputNotation>()?;
    m.add_class::<Warnings>()?;

    Ok(())
}
