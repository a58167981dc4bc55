//! Helper module with volume-gated diagnostics.
//!
//! A [`Converter`](crate::Converter) records [`Entry`] values in its [`Log`]
//! whenever the configured [`Volume`] admits them. Nothing is printed;
//! applications drain the entries with
//! [`Converter::take_log`](crate::Converter::take_log) and display them as they
//! see fit.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{ColorFormatError, RenderError};
use crate::opt::Volume;
use crate::{Color, Gamut, OutputNotation};

/// A diagnostic log entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// Input text that could not be parsed.
    ParseFailure {
        text: String,
        error: ColorFormatError,
    },

    /// A gamut classification, which may have come from the cache.
    Classified {
        color: Color,
        gamut: Gamut,
        cached: bool,
    },

    /// A rendering that used a gamut-mapped sRGB fallback.
    Fallback {
        notation: OutputNotation,
        gamut: Gamut,
    },

    /// A rendering that failed and was replaced by the placeholder result.
    Degraded {
        notation: OutputNotation,
        error: RenderError,
    },
}

impl Entry {
    /// Get the minimum volume for recording this entry.
    pub fn volume(&self) -> Volume {
        match *self {
            Self::Classified { .. } => Volume::Detailed,
            _ => Volume::Regular,
        }
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::ParseFailure {
                ref text,
                ref error,
            } => {
                write!(f, "convert::parse text={:?} error=\"{}\"", text, error)
            }
            Self::Classified {
                ref color,
                gamut,
                cached,
            } => write!(
                f,
                "convert::classify color={} gamut={} cached={}",
                color, gamut, cached
            ),
            Self::Fallback { notation, gamut } => {
                write!(f, "convert::fallback notation={} gamut={}", notation, gamut)
            }
            Self::Degraded {
                notation,
                ref error,
            } => {
                write!(f, "convert::degrade notation={} error=\"{}\"", notation, error)
            }
        }
    }
}

/// A volume-gated log.
///
/// ```
/// # use gamutcast::log::{Entry, Log};
/// # use gamutcast::opt::Volume;
/// # use gamutcast::{Color, Gamut};
/// let log = Log::new(Volume::Regular);
/// log.record(|| Entry::Classified {
///     color: Color::from_24bit(0, 0, 0),
///     gamut: Gamut::Srgb,
///     cached: false,
/// });
/// assert!(log.take().is_empty());
/// ```
#[derive(Debug)]
pub struct Log {
    volume: Volume,
    entries: Mutex<Vec<Entry>>,
}

impl Log {
    /// Create a new log with the given volume.
    pub fn new(volume: Volume) -> Self {
        Self {
            volume,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Get the log's volume.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Determine whether the log records anything at all.
    pub fn is_enabled(&self) -> bool {
        self.volume > Volume::Silent
    }

    /// Record the entry created by the given function if the volume admits
    /// it.
    ///
    /// The entry is only created when it is recorded.
    pub fn record<F>(&self, make: F)
    where
        F: FnOnce() -> Entry,
    {
        if !self.is_enabled() {
            return;
        }

        let entry = make();
        if entry.volume() <= self.volume {
            self.lock().push(entry);
        }
    }

    /// Remove and return all entries recorded so far.
    pub fn take(&self) -> Vec<Entry> {
        core::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new(Volume::Silent)
    }
}

// ====================================================================================================================
