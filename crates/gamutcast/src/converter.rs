//! Converting color text into all requested notations.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::is_figma_shorthand;
use crate::error::ColorFormatError;
use crate::log::{Entry, Log};
use crate::opt::Options;
use crate::resolve::resolve_report;
use crate::{Color, ConversionResult, GamutDetector, OutputNotation};

/// Guess the notation of the given color text.
///
/// The guess is advisory only. It ignores case and leading white space and
/// defaults to `rgb` for text that matches no other notation. Eight hex
/// digits are Figma P3 shorthand only without a leading `#`; with it, they
/// are sRGB `hex-alpha`, which is also how the parser reads them.
///
/// ```
/// # use gamutcast::{sniff_notation, OutputNotation};
/// assert_eq!(sniff_notation("Figma P3 #FF8000FF"), OutputNotation::FigmaP3);
/// assert_eq!(sniff_notation("ff8000ff"), OutputNotation::FigmaP3);
/// assert_eq!(sniff_notation("#ff8000ff"), OutputNotation::HexAlpha);
/// assert_eq!(sniff_notation("  #f80"), OutputNotation::Hex);
/// assert_eq!(sniff_notation("color(display-p3 1 0.5 0)"), OutputNotation::P3);
/// assert_eq!(sniff_notation("papayawhip"), OutputNotation::Rgb);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn sniff_notation(text: &str) -> OutputNotation {
    use OutputNotation::*;

    let lowercase = text.trim_start().to_ascii_lowercase();
    let text = lowercase.as_str();

    if text.starts_with("figma p3") || is_figma_shorthand(text.trim_end()) {
        FigmaP3
    } else if let Some(digits) = text.strip_prefix('#') {
        if digits.trim_end().len() == 8 {
            HexAlpha
        } else {
            Hex
        }
    } else if text.starts_with("rgb") {
        Rgb
    } else if text.starts_with("hsl") {
        Hsl
    } else if text.starts_with("oklch") {
        Oklch
    } else if text.starts_with("oklab") {
        Oklab
    } else if text.starts_with("color(display-p3") {
        P3
    } else if text.starts_with("vec") {
        LinearRgb
    } else {
        Rgb
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The conversion of one color text.
#[cfg_attr(feature = "pyffi", pyclass(frozen, get_all, module = "gamutcast"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    color: Color,
    input_notation: OutputNotation,
    results: Vec<ConversionResult>,
}

impl Conversion {
    /// Get the parsed color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Get the guessed notation of the input text.
    pub fn input_notation(&self) -> OutputNotation {
        self.input_notation
    }

    /// Get the results in the order of the requested notations.
    pub fn results(&self) -> &[ConversionResult] {
        &self.results
    }

    /// Get the result for the given notation, if it was requested.
    pub fn result(&self, notation: OutputNotation) -> Option<&ConversionResult> {
        self.results.iter().find(|r| r.notation() == notation)
    }

    /// Consume this conversion and return its results.
    pub fn into_results(self) -> Vec<ConversionResult> {
        self.results
    }
}

/// A color converter.
///
/// A converter combines [`Options`], a [`GamutDetector`], and a diagnostic
/// [`Log`]. It parses color text, classifies the color, and renders it in
/// every requested notation, substituting gamut-mapped sRGB colors where a
/// notation cannot represent the original color.
///
/// A converter can be shared between threads. Its only mutable state are the
/// detector's cache and the log, both of which sit behind mutexes.
///
/// ```
/// # use gamutcast::{Converter, OutputNotation};
/// let converter = Converter::new();
/// let results = converter.convert_all("oklch(74.32% 0.2194 51.36)");
/// assert_eq!(results.len(), 9);
/// assert_eq!(results[0].rendered_text(), "rgb(255, 126, 0)");
/// assert_eq!(results[1].rendered_text(), "#FF7E00");
/// assert_eq!(results[3].rendered_text(), "hsl(29.54 100% 50%)");
///
/// assert!(converter.convert_all("not-a-color").is_empty());
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "gamutcast"))]
#[derive(Debug, Default)]
pub struct Converter {
    options: Options,
    detector: GamutDetector,
    log: Log,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Converter {
    /// Create a new converter with default options.
    #[cfg_attr(feature = "pyffi", new)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new converter with options from the environment.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_environment() -> Self {
        Self::with_options(Options::from_environment())
    }

    /// Convert the color text into all requested notations.
    ///
    /// If the text cannot be parsed, this method returns an empty vector.
    pub fn convert_all(&self, text: &str) -> Vec<ConversionResult> {
        self.convert(text)
            .map(Conversion::into_results)
            .unwrap_or_default()
    }

    /// Convert the already parsed color into all requested notations.
    pub fn convert_color(&self, color: &Color) -> Vec<ConversionResult> {
        let (report, cached) = self.detector.lookup(color);
        self.log.record(|| Entry::Classified {
            color: color.clone(),
            gamut: report.original_space(),
            cached,
        });

        let epsilon = self.detector.epsilon();
        self.options
            .notations()
            .iter()
            .map(|&notation| match resolve_report(&report, color, notation, epsilon) {
                Ok(result) => {
                    if notation.is_srgb_native() && report.needs_fallback() {
                        self.log.record(|| Entry::Fallback {
                            notation,
                            gamut: report.original_space(),
                        });
                    }
                    result
                }
                Err(error) => {
                    self.log.record(|| Entry::Degraded { notation, error });
                    ConversionResult::degraded(notation)
                }
            })
            .collect()
    }

    /// Convert the color text, returning the parse error if there is one.
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "convert")]
    pub fn py_convert(&self, text: &str) -> PyResult<Conversion> {
        Ok(self.convert(text)?)
    }

    /// Drain the diagnostic log as one line per entry.
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "take_log")]
    pub fn py_take_log(&self) -> Vec<String> {
        self.take_log().iter().map(ToString::to_string).collect()
    }
}

impl Converter {
    /// Create a new converter with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            detector: GamutDetector::with_options(&options),
            log: Log::new(options.volume()),
            options,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get the gamut detector.
    pub fn detector(&self) -> &GamutDetector {
        &self.detector
    }

    /// Convert the color text.
    ///
    /// ```
    /// # use gamutcast::{Converter, OutputNotation};
    /// let converter = Converter::new();
    /// let conversion = converter.convert("Figma P3 #FF8000FF")?;
    /// assert_eq!(conversion.input_notation(), OutputNotation::FigmaP3);
    /// assert_eq!(
    ///     conversion.result(OutputNotation::LinearRgb).unwrap().rendered_text(),
    ///     "vec(1.17638, 0.18288, -0.03661, 1.00000)"
    /// );
    /// # Ok::<(), gamutcast::error::ColorFormatError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// This method fails if the text cannot be parsed.
    pub fn convert(&self, text: &str) -> Result<Conversion, ColorFormatError> {
        let color = text.parse::<Color>().inspect_err(|error| {
            self.log.record(|| Entry::ParseFailure {
                text: text.to_string(),
                error: error.clone(),
            });
        })?;

        let results = self.convert_color(&color);
        Ok(Conversion {
            color,
            input_notation: sniff_notation(text),
            results,
        })
    }

    /// Remove and return the diagnostic entries recorded so far.
    pub fn take_log(&self) -> Vec<Entry> {
        self.log.take()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{sniff_notation, Converter};
    use crate::log::Entry;
    use crate::opt::{Options, Volume};
    use crate::{Color, ConversionResult, Gamut, OutputNotation};

    #[test]
    fn test_sniff_notation() {
        use OutputNotation::*;

        for (text, notation) in [
            ("FIGMA P3 #ff8000", FigmaP3),
            ("  FF8000FF", FigmaP3),
            ("#FF8000FF", HexAlpha),
            ("#FF8000", Hex),
            ("#f80", Hex),
            ("rgba(1, 2, 3, 0.5)", Rgb),
            ("HSL(30 100% 50%)", Hsl),
            ("oklch(0.7 0.2 50)", Oklch),
            ("oklab(0.7 0.1 0.1)", Oklab),
            ("color(display-p3 1 0 0)", P3),
            ("color(srgb 1 0 0)", Rgb),
            ("vec(1, 0, 0, 1)", LinearRgb),
            ("", Rgb),
        ] {
            assert_eq!(sniff_notation(text), notation, "{:?}", text);
        }
    }

    #[test]
    fn test_convert_all() {
        let converter = Converter::new();
        let texts: Vec<String> = converter
            .convert_all("oklch(74.32% 0.2194 51.36)")
            .iter()
            .map(|r| r.rendered_text().to_string())
            .collect();

        assert_eq!(
            texts,
            vec![
                "rgb(255, 126, 0)",
                "#FF7E00",
                "#FF7E00FF",
                "hsl(29.54 100% 50%)",
                "color(display-p3 1.0000 0.5020 0.0004)",
                "oklch(74.32% 0.2194 51.36)",
                "oklab(74.32% 0.14 0.2)",
                "vec(1.17626, 0.18291, -0.03657, 1.00000)",
                "Figma P3 #FF8000FF",
            ]
        );
    }

    #[test]
    fn test_convert() {
        let converter = Converter::new();
        let conversion = converter.convert("Figma P3 #FF8000FF");
        assert!(conversion.is_ok());
        let Ok(conversion) = conversion else { return };

        assert_eq!(conversion.input_notation(), OutputNotation::FigmaP3);
        assert_eq!(
            conversion.color(),
            &Color::p3(1.0, 128.0 / 255.0, 0.0).with_alpha(1.0)
        );
        assert_eq!(conversion.results().len(), 9);
        for (notation, text) in [
            (OutputNotation::Rgb, "rgb(255, 126, 0)"),
            (OutputNotation::Hex, "#FF7E00"),
            (OutputNotation::P3, "color(display-p3 1.0000 0.5020 0.0000)"),
            (OutputNotation::Oklch, "oklch(74.32% 0.2194 51.36)"),
        ] {
            assert_eq!(
                conversion.result(notation).map(|r| r.rendered_text()),
                Some(text)
            );
        }

        assert!(converter.convert("not-a-color").is_err());
    }

    #[test]
    fn test_selected_notations() {
        let converter = Converter::with_options(
            Options::builder()
                .notations([OutputNotation::Oklab, OutputNotation::Hex])
                .build(),
        );

        let results = converter.convert_all("#008080");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].notation(), OutputNotation::Oklab);
        assert_eq!(results[1].rendered_text(), "#008080");
        assert_eq!(results[1].gamut(), Gamut::Srgb);
    }

    #[test]
    fn test_log() {
        let silent = Converter::new();
        silent.convert_all("nope");
        assert!(silent.take_log().is_empty());

        let regular = Converter::with_options(Options::with_log());
        regular.convert_all("nope");
        regular.convert_all("color(display-p3 0 1 0)");
        let entries = regular.take_log();
        assert!(matches!(entries[0], Entry::ParseFailure { .. }));
        assert_eq!(entries.len(), 5);
        assert!(entries[1..]
            .iter()
            .all(|e| matches!(e, Entry::Fallback { gamut: Gamut::P3, .. })));

        let detailed = Converter::with_options(
            Options::builder()
                .volume(Volume::Detailed)
                .notations([OutputNotation::Oklch])
                .build(),
        );
        detailed.convert_all("#008080");
        detailed.convert_all("#008080");
        let entries = detailed.take_log();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], Entry::Classified { cached: false, .. }));
        assert!(matches!(entries[1], Entry::Classified { cached: true, .. }));
        assert_eq!(detailed.detector().cache_hits(), 1);
    }

    #[test]
    fn test_degraded() {
        let converter = Converter::with_options(Options::with_log());
        let results = converter.convert_color(&Color::xyz(crate::Float::INFINITY, 0.0, 0.0));
        assert_eq!(results.len(), 9);
        assert!(results.iter().all(ConversionResult::is_degraded));

        let entries = converter.take_log();
        assert_eq!(entries.len(), 9);
        assert!(entries.iter().all(|e| matches!(e, Entry::Degraded { .. })));
    }
}
