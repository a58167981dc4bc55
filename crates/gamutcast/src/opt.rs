//! Helper module with the options for converting colors.
//!
//! This module provides the options for a [`Converter`](crate::Converter) and
//! the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use gamutcast::OutputNotation;
//! # use gamutcast::opt::{Options, Volume};
//! let options = Options::builder()
//!     .volume(Volume::Regular)
//!     .notations([OutputNotation::Hex, OutputNotation::Oklch])
//!     .build();
//!
//! assert_eq!(options.volume(), Volume::Regular);
//! assert_eq!(options.notations(), &[OutputNotation::Hex, OutputNotation::Oklch]);
//! ```

use crate::core::{EPSILON, P3_LIMIT};
use crate::util::{Env, Environment};
use crate::{Float, OutputNotation};

/// The diagnostic logging volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Volume {
    Silent,
    Regular,
    Detailed,
}

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    notations: Vec<OutputNotation>,
    epsilon: Float,
    p3_limit: Float,
}

impl OptionData {
    pub fn new() -> Self {
        Self {
            volume: Volume::Silent,
            notations: OutputNotation::ALL.to_vec(),
            epsilon: EPSILON,
            p3_limit: P3_LIMIT,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the output notations in the order they are rendered.
    pub fn notations<I>(&mut self, notations: I) -> &mut Self
    where
        I: IntoIterator<Item = OutputNotation>,
    {
        self.0.notations = notations.into_iter().collect();
        self
    }

    /// Set the tolerance for gamut tests.
    ///
    /// Negative and not-a-number tolerances are replaced by zero.
    pub fn epsilon(&mut self, epsilon: Float) -> &mut Self {
        self.0.epsilon = if epsilon.is_nan() { 0.0 } else { epsilon.max(0.0) };
        self
    }

    /// Set the upper bound for Display P3 coordinates during gamut detection.
    ///
    /// Limits below one are raised to one.
    pub fn p3_limit(&mut self, limit: Float) -> &mut Self {
        self.0.p3_limit = if limit.is_nan() { P3_LIMIT } else { limit.max(1.0) };
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular debugging output
    /// enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed debugging output
    /// enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Instantiate the options from the environment.
    ///
    /// `GAMUTCAST_LOG` selects the volume, with `regular` and `detailed`
    /// enabling the corresponding output and anything else meaning silent.
    /// `GAMUTCAST_NOTATIONS` holds a comma-separated list of notation names.
    /// Unknown names are skipped. If the variable is absent or names no known
    /// notation, all notations are rendered.
    pub fn from_environment() -> Options {
        options_from_environment(&Env::default())
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Get the output notations.
    pub fn notations(&self) -> &[OutputNotation] {
        &self.0.notations
    }

    /// Get the tolerance for gamut tests.
    pub fn epsilon(&self) -> Float {
        self.0.epsilon
    }

    /// Get the upper bound for Display P3 coordinates.
    pub fn p3_limit(&self) -> Float {
        self.0.p3_limit
    }
}

pub(crate) fn options_from_environment<E: Environment>(env: &E) -> Options {
    let mut builder = Options::builder();

    if let Ok(value) = env.read("GAMUTCAST_LOG") {
        builder.volume(match value.trim().to_ascii_lowercase().as_str() {
            "regular" => Volume::Regular,
            "detailed" => Volume::Detailed,
            _ => Volume::Silent,
        });
    }

    if let Ok(value) = env.read("GAMUTCAST_NOTATIONS") {
        let notations: Vec<OutputNotation> = value
            .split(',')
            .filter_map(|name| name.trim().parse().ok())
            .collect();
        if !notations.is_empty() {
            builder.notations(notations);
        }
    }

    builder.build()
}

// ====================================================================================================================
