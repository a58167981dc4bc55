//! Gamut detection with a per-detector cache.

use core::sync::atomic::{AtomicU64, Ordering};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{in_gamut, to_eq_bits, to_eq_coordinates, ColorModel, EPSILON, P3_LIMIT};
use crate::opt::Options;
use crate::{Bits, Color, Float};

/// The outcome of classifying a color against the sRGB and Display P3
/// gamuts.
///
/// This is not an inclusion order: [`Gamut::P3`] means inside Display P3 but
/// outside sRGB, and [`Gamut::Out`] means inside neither.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "gamutcast")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gamut {
    Srgb,
    P3,
    Out,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Gamut {
    /// Get this gamut's lowercase name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Srgb => "srgb",
            Self::P3 => "p3",
            Self::Out => "out",
        }
    }

    /// Get this gamut's name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_string()
    }
}

impl core::fmt::Display for Gamut {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A gamut report.
///
/// The report classifies a color and holds its projections into Display P3 and
/// sRGB. The sRGB projection is exact for colors in sRGB and gamut-mapped
/// otherwise. The fallback space always is sRGB.
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "gamutcast"))]
#[derive(Clone, Debug, PartialEq)]
pub struct GamutReport {
    original_space: Gamut,
    p3_projection: Option<Color>,
    rgb_projection: Option<Color>,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl GamutReport {
    /// Get the gamut the color belongs to.
    pub fn original_space(&self) -> Gamut {
        self.original_space
    }

    /// Get the gamut of fallback colors, which always is sRGB.
    pub fn fallback_space(&self) -> Gamut {
        Gamut::Srgb
    }

    /// Get the color's projection into Display P3, if it exists.
    pub fn p3_projection(&self) -> Option<Color> {
        self.p3_projection.clone()
    }

    /// Get the color's sRGB rendition, if it exists.
    pub fn rgb_projection(&self) -> Option<Color> {
        self.rgb_projection.clone()
    }

    /// Determine whether the color is in sRGB.
    pub fn in_gamut(&self) -> bool {
        self.original_space == Gamut::Srgb
    }

    /// Determine whether the color needs an sRGB fallback.
    pub fn needs_fallback(&self) -> bool {
        self.original_space != Gamut::Srgb
    }
}

impl GamutReport {
    /// Access the color's sRGB rendition without cloning.
    pub(crate) fn rgb(&self) -> Option<&Color> {
        self.rgb_projection.as_ref()
    }

    /// Access the color's Display P3 projection without cloning.
    pub(crate) fn p3(&self) -> Option<&Color> {
        self.p3_projection.as_ref()
    }

    pub(crate) fn out() -> Self {
        Self {
            original_space: Gamut::Out,
            p3_projection: None,
            rgb_projection: None,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

type CacheKey = (ColorModel, [Bits; 3], Option<Bits>);

fn cache_key(color: &Color) -> CacheKey {
    (
        color.model(),
        to_eq_coordinates(color.model(), color.as_ref()),
        color.alpha().map(to_eq_bits),
    )
}

fn with_alpha_of(color: Color, alpha: Option<Float>) -> Color {
    alpha.map_or(color.clone(), |alpha| color.with_alpha(alpha))
}

/// A gamut detector.
///
/// The detector classifies colors as inside sRGB, inside Display P3 but
/// outside sRGB, or outside both. It projects every color into Oklch via XYZ
/// first and then tests the sRGB and Display P3 coordinates of that proxy with
/// a small tolerance. Display P3 coordinates may go up to the P3 limit, which
/// defaults to 1.6.
///
/// Each detector owns a cache of reports, keyed by the color model and the
/// normalized bits of coordinates and alpha. Cached reports never change and
/// live as long as the detector. The cache sits behind a mutex, so that a
/// detector can be shared between threads.
///
/// ```
/// # use gamutcast::{Color, Gamut, GamutDetector};
/// let detector = GamutDetector::new();
/// let report = detector.detect(&Color::oklch(0.7432, 0.2194, 51.36));
/// assert_eq!(report.original_space(), Gamut::P3);
/// assert_eq!(report.rgb_projection().unwrap().to_24bit(), [255, 126, 0]);
///
/// let report = detector.detect(&Color::oklch(0.7432, 0.2194, 51.36));
/// assert!(report.needs_fallback());
/// assert_eq!(detector.cache_hits(), 1);
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "gamutcast"))]
#[derive(Debug)]
pub struct GamutDetector {
    epsilon: Float,
    p3_limit: Float,
    cache: Mutex<HashMap<CacheKey, GamutReport>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl GamutDetector {
    /// Create a new gamut detector with default tolerance and P3 limit.
    #[cfg_attr(feature = "pyffi", new)]
    pub fn new() -> Self {
        Self::with_limits(EPSILON, P3_LIMIT)
    }

    /// Classify the color.
    pub fn detect(&self, color: &Color) -> GamutReport {
        self.lookup(color).0
    }

    /// Get the number of cache hits so far.
    pub fn cache_hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Get the number of cache misses so far.
    pub fn cache_misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Get the number of cached reports.
    pub fn cache_len(&self) -> usize {
        self.lock().len()
    }
}

impl GamutDetector {
    /// Create a new gamut detector with the given tolerance and P3 limit.
    pub fn with_limits(epsilon: Float, p3_limit: Float) -> Self {
        Self {
            epsilon,
            p3_limit,
            cache: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a new gamut detector with the options' tolerance and P3 limit.
    pub fn with_options(options: &Options) -> Self {
        Self::with_limits(options.epsilon(), options.p3_limit())
    }

    /// Get the tolerance for gamut tests.
    pub fn epsilon(&self) -> Float {
        self.epsilon
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, GamutReport>> {
        // Reports are inserted whole, so a poisoned map still is consistent.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Classify the color and also determine whether the report came from
    /// the cache.
    pub(crate) fn lookup(&self, color: &Color) -> (GamutReport, bool) {
        let key = cache_key(color);
        if let Some(report) = self.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return (report.clone(), true);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let report = self.classify(color);
        self.lock().insert(key, report.clone());
        (report, false)
    }

    fn classify(&self, color: &Color) -> GamutReport {
        use ColorModel::*;

        let alpha = color.alpha();

        // Pure white has no hue.
        if color.model() == Oklch {
            let [l, c, _] = color.coordinates();
            if l == 1.0 && c == 0.0 {
                return GamutReport {
                    original_space: Gamut::Srgb,
                    p3_projection: Some(with_alpha_of(Color::new(P3, [1.0, 1.0, 1.0]), alpha)),
                    rgb_projection: Some(with_alpha_of(Color::new(Rgb, [1.0, 1.0, 1.0]), alpha)),
                };
            }
        }

        let Some(proxy) = color.try_to(Oklch) else {
            return GamutReport::out();
        };
        let Some(rgb) = proxy.try_to(Rgb) else {
            return GamutReport::out();
        };
        let p3 = proxy.try_to(P3);

        // Projections skip the proxy to avoid its rounding noise.
        if in_gamut(rgb.as_ref(), 1.0, self.epsilon) {
            return GamutReport {
                original_space: Gamut::Srgb,
                p3_projection: color.try_to(P3).or(p3),
                rgb_projection: color.try_to(Rgb).or(Some(rgb)),
            };
        }

        let original_space = match p3 {
            Some(ref p3) if in_gamut(p3.as_ref(), self.p3_limit, self.epsilon) => Gamut::P3,
            _ => Gamut::Out,
        };

        GamutReport {
            original_space,
            p3_projection: color.try_to(P3).or(p3),
            rgb_projection: Some(color.to_gamut_within(self.epsilon)),
        }
    }
}

impl Default for GamutDetector {
    fn default() -> Self {
        Self::new()
    }
}

// ====================================================================================================================
