//! Text-form adapter in front of [`OpticalConfiguration`].
//!
//! Owns everything the core deliberately does not: turning user-entered
//! text into numbers and tracking whether the optional Barlow and focal
//! reducer inputs are active. An inactive optional input contributes a
//! factor of 1.0 and its text is never parsed.

use crate::configuration::{ConfigError, Field, OpticalConfiguration};
use log::debug;
use thiserror::Error;

/// Failures produced while turning form text into a configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Value {text:?} for {field} is not a number")]
    Malformed { field: Field, text: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parse one text field.
///
/// Surrounding whitespace is ignored and blank text means the value was not
/// supplied.
pub fn parse_measurement(field: Field, text: &str) -> Result<Option<f64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| InputError::Malformed {
            field,
            text: text.to_string(),
        })
}

/// Raw state of the input form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpticalInput {
    pub aperture_diameter: String,
    pub focal_length: String,
    pub eyepiece_focal_length: String,
    pub barlow_factor: String,
    pub focal_reducer_factor: String,
    /// Whether the Barlow input is shown and used
    pub barlow_enabled: bool,
    /// Whether the focal reducer input is shown and used
    pub reducer_enabled: bool,
}

impl OpticalInput {
    /// Form with the three required fields filled in and no accessories
    pub fn new(
        aperture_diameter: impl Into<String>,
        focal_length: impl Into<String>,
        eyepiece_focal_length: impl Into<String>,
    ) -> Self {
        Self {
            aperture_diameter: aperture_diameter.into(),
            focal_length: focal_length.into(),
            eyepiece_focal_length: eyepiece_focal_length.into(),
            ..Self::default()
        }
    }

    /// Activate the Barlow input with the given text
    pub fn with_barlow(mut self, text: impl Into<String>) -> Self {
        self.barlow_factor = text.into();
        self.barlow_enabled = true;
        self
    }

    /// Activate the focal reducer input with the given text
    pub fn with_reducer(mut self, text: impl Into<String>) -> Self {
        self.focal_reducer_factor = text.into();
        self.reducer_enabled = true;
        self
    }

    /// Text of a field, or `None` when it is an inactive optional input
    fn active_text(&self, field: Field) -> Option<&str> {
        let text = match field {
            Field::ApertureDiameter => Some(&self.aperture_diameter),
            Field::FocalLength => Some(&self.focal_length),
            Field::EyepieceFocalLength => Some(&self.eyepiece_focal_length),
            Field::BarlowFactor => self.barlow_enabled.then_some(&self.barlow_factor),
            Field::FocalReducerFactor => {
                self.reducer_enabled.then_some(&self.focal_reducer_factor)
            }
        };
        text.map(String::as_str)
    }

    /// Parse every active field and build the configuration
    pub fn to_configuration(&self) -> Result<OpticalConfiguration, InputError> {
        let mut builder = OpticalConfiguration::builder();
        for field in Field::ALL {
            let value = match self.active_text(field) {
                Some(text) => parse_measurement(field, text)?,
                None => None,
            };
            builder = builder.field(field, value);
        }
        debug!("Parsed form input into {builder:?}");
        Ok(builder.build()?)
    }

    /// Clear all text and hide the optional inputs
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measurement() {
        assert_eq!(
            parse_measurement(Field::FocalLength, " 1000 ").unwrap(),
            Some(1000.0)
        );
        assert_eq!(
            parse_measurement(Field::BarlowFactor, "2.5").unwrap(),
            Some(2.5)
        );
        assert_eq!(parse_measurement(Field::FocalLength, "   ").unwrap(), None);
        // Range checks belong to the core, not the parser
        assert_eq!(
            parse_measurement(Field::ApertureDiameter, "-3").unwrap(),
            Some(-3.0)
        );
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_measurement(Field::EyepieceFocalLength, "10mm").unwrap_err();
        assert_eq!(
            err,
            InputError::Malformed {
                field: Field::EyepieceFocalLength,
                text: "10mm".to_string()
            }
        );
    }

    #[test]
    fn test_to_configuration() {
        let config = OpticalInput::new("200", "1000", "10")
            .to_configuration()
            .unwrap();
        assert_eq!(config.magnification(), 100.0);
        assert_eq!(config.barlow_factor(), 1.0);
    }

    #[test]
    fn test_inactive_optional_ignored() {
        let mut input = OpticalInput::new("200", "1000", "10")
            .with_barlow("2")
            .with_reducer("not a number");
        input.reducer_enabled = false;

        let config = input.to_configuration().unwrap();
        assert_eq!(config.barlow_factor(), 2.0);
        assert_eq!(config.focal_reducer_factor(), 1.0);
    }

    #[test]
    fn test_blank_active_optional_defaults() {
        let config = OpticalInput::new("200", "1000", "10")
            .with_barlow("")
            .to_configuration()
            .unwrap();
        assert_eq!(config.barlow_factor(), 1.0);
    }

    #[test]
    fn test_missing_required() {
        let err = OpticalInput::new("200", "", "10")
            .to_configuration()
            .unwrap_err();
        assert_eq!(
            err,
            InputError::Config(ConfigError::MissingArgument(Field::FocalLength))
        );
    }

    #[test]
    fn test_out_of_range() {
        let err = OpticalInput::new("200", "1000", "10")
            .with_reducer("0")
            .to_configuration()
            .unwrap_err();
        assert_eq!(
            err,
            InputError::Config(ConfigError::OutOfRange {
                field: Field::FocalReducerFactor,
                value: 0.0
            })
        );
    }

    #[test]
    fn test_reset() {
        let mut input = OpticalInput::new("200", "1000", "10").with_barlow("2");
        input.reset();
        assert_eq!(input, OpticalInput::default());
        assert!(!input.barlow_enabled);
    }
}
