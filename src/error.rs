//! Crate-level error types.

use std::fmt;

use crate::element::PropertyKind;

/// A tween request that cannot be started as configured.
///
/// Configuration errors are raised by [`TweenBuilder::build`] and
/// [`TweenScheduler::start`] before any element or scheduler state is
/// touched.
///
/// [`TweenBuilder::build`]: crate::animation::TweenBuilder::build
/// [`TweenScheduler::start`]: crate::animation::TweenScheduler::start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Duration was below zero milliseconds.
    NegativeDuration(i64),
    /// Start delay was below zero milliseconds.
    NegativeDelay(i64),
    /// The target element was dropped or reports itself detached.
    DetachedElement,
    /// The target element is mutably borrowed by the caller.
    ElementBusy,
    /// The tween has no property tracks to drive.
    NoTracks,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDuration(ms) => {
                write!(f, "duration must be >= 0 ms, got {ms}")
            }
            Self::NegativeDelay(ms) => {
                write!(f, "start delay must be >= 0 ms, got {ms}")
            }
            Self::DetachedElement => {
                write!(f, "target element is no longer available")
            }
            Self::ElementBusy => {
                write!(f, "target element is borrowed elsewhere")
            }
            Self::NoTracks => write!(f, "tween has no property tracks"),
        }
    }
}

/// Errors produced by the viewtween crate.
#[derive(Debug)]
pub enum TweenError {
    /// Invalid tween configuration.
    Config(ConfigError),
    /// The element does not expose a property a track needs.
    InvalidPropertyKind(PropertyKind),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TweenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid tween configuration: {e}"),
            Self::InvalidPropertyKind(kind) => {
                write!(f, "element does not support property {kind}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TweenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for TweenError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for TweenError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
