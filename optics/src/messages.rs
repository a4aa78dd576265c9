//! Localized user-facing error strings.
//!
//! Users only ever see one of two messages: the input was not a usable
//! number, or the number was outside the allowed range.

use crate::configuration::ConfigError;
use crate::input::InputError;
use clap::ValueEnum;

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// German
    De,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::De => write!(f, "de"),
        }
    }
}

/// The two kinds of message shown in place of results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    InvalidNumber,
    OutOfRange,
}

impl MessageKind {
    pub fn of(err: &InputError) -> Self {
        match err {
            InputError::Malformed { .. } => MessageKind::InvalidNumber,
            InputError::Config(ConfigError::MissingArgument(_)) => MessageKind::InvalidNumber,
            InputError::Config(ConfigError::OutOfRange { .. }) => MessageKind::OutOfRange,
        }
    }

    pub fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MessageKind::InvalidNumber, Locale::En) => "Please enter valid numbers.",
            (MessageKind::InvalidNumber, Locale::De) => "Bitte gültige Zahlen eingeben.",
            (MessageKind::OutOfRange, Locale::En) => "All values must be greater than zero.",
            (MessageKind::OutOfRange, Locale::De) => "Alle Werte müssen größer als null sein.",
        }
    }
}

/// Message to display for an input failure
pub fn localize(err: &InputError, locale: Locale) -> &'static str {
    MessageKind::of(err).text(locale)
}
