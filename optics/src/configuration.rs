//! Telescope/eyepiece configuration and its derived optical quantities.
//!
//! [`OpticalConfiguration`] holds the five physical inputs of a visual
//! observing setup and computes everything else on demand:
//!
//! - **Magnification**: M = B·f·R / e
//! - **Useful magnification range**: D / 6 (6 mm exit pupil) up to 2·D
//! - **Focal ratio**: N = (B·f / D)·R
//! - **Exit pupil**: D / M (mm)
//! - **Dawes limit**: 116 / D (arcsec)
//!
//! where D is the aperture diameter, f the native focal length, e the
//! eyepiece focal length, B the Barlow factor and R the focal reducer
//! factor. All lengths are in millimeters.
//!
//! Every field is validated to be finite and strictly positive on
//! construction and on each individual replacement, so none of the
//! computations can divide by zero.
//!
//! # Examples
//!
//! ```rust
//! use optics::configuration::OpticalConfiguration;
//!
//! let mut config = OpticalConfiguration::new(200.0, 1000.0, 10.0).unwrap();
//! assert_eq!(config.magnification(), 100.0);
//! assert_eq!(config.exit_pupil_mm(), 2.0);
//!
//! // A 2x Barlow doubles the effective focal length
//! config.set_barlow_factor(2.0).unwrap();
//! assert_eq!(config.magnification(), 200.0);
//! ```

use log::debug;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Largest exit pupil a dark-adapted eye can use, in millimeters
pub const MAX_EXIT_PUPIL_MM: f64 = 6.0;

/// Conventional ceiling on usable magnification per millimeter of aperture
pub const MAX_MAGNIFICATION_PER_MM: f64 = 2.0;

/// Empirical Dawes resolving-power constant (arcsec·mm)
pub const DAWES_CONSTANT_ARCSEC_MM: f64 = 116.0;

/// Identifies one of the five configuration inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ApertureDiameter,
    FocalLength,
    EyepieceFocalLength,
    BarlowFactor,
    FocalReducerFactor,
}

impl Field {
    /// All fields in validation order
    pub const ALL: [Field; 5] = [
        Field::ApertureDiameter,
        Field::FocalLength,
        Field::EyepieceFocalLength,
        Field::BarlowFactor,
        Field::FocalReducerFactor,
    ];

    /// Whether the field has to be supplied at construction
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::ApertureDiameter | Field::FocalLength | Field::EyepieceFocalLength
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::ApertureDiameter => write!(f, "aperture_diameter"),
            Field::FocalLength => write!(f, "focal_length"),
            Field::EyepieceFocalLength => write!(f, "eyepiece_focal_length"),
            Field::BarlowFactor => write!(f, "barlow_factor"),
            Field::FocalReducerFactor => write!(f, "focal_reducer_factor"),
        }
    }
}

/// Errors raised while constructing or modifying an [`OpticalConfiguration`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("Required field {0} was not supplied")]
    MissingArgument(Field),
    #[error("Field {field} must be a finite value greater than zero, got {value}")]
    OutOfRange { field: Field, value: f64 },
}

impl ConfigError {
    /// The field that caused the failure
    pub fn field(&self) -> Field {
        match self {
            ConfigError::MissingArgument(field) => *field,
            ConfigError::OutOfRange { field, .. } => *field,
        }
    }
}

fn validate(field: Field, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

/// A validated telescope + eyepiece + accessory combination.
///
/// Derived quantities are recomputed from the current fields on every call;
/// nothing is cached, so a setter is reflected by the very next computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpticalConfiguration {
    aperture_diameter_mm: f64,
    focal_length_mm: f64,
    eyepiece_focal_length_mm: f64,
    barlow_factor: f64,
    focal_reducer_factor: f64,
}

impl OpticalConfiguration {
    /// Create a configuration without Barlow or focal reducer (both factors 1.0)
    pub fn new(
        aperture_diameter_mm: f64,
        focal_length_mm: f64,
        eyepiece_focal_length_mm: f64,
    ) -> Result<Self, ConfigError> {
        Self::with_factors(
            aperture_diameter_mm,
            focal_length_mm,
            eyepiece_focal_length_mm,
            1.0,
            1.0,
        )
    }

    /// Create a configuration with all five inputs given explicitly.
    ///
    /// Fields are checked in order (aperture, focal length, eyepiece, Barlow,
    /// reducer) and the first violation is reported.
    pub fn with_factors(
        aperture_diameter_mm: f64,
        focal_length_mm: f64,
        eyepiece_focal_length_mm: f64,
        barlow_factor: f64,
        focal_reducer_factor: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            aperture_diameter_mm: validate(Field::ApertureDiameter, aperture_diameter_mm)?,
            focal_length_mm: validate(Field::FocalLength, focal_length_mm)?,
            eyepiece_focal_length_mm: validate(
                Field::EyepieceFocalLength,
                eyepiece_focal_length_mm,
            )?,
            barlow_factor: validate(Field::BarlowFactor, barlow_factor)?,
            focal_reducer_factor: validate(Field::FocalReducerFactor, focal_reducer_factor)?,
        };
        debug!("Created optical configuration: {config:?}");
        Ok(config)
    }

    /// Start a builder where any input may be left absent
    pub fn builder() -> OpticalConfigurationBuilder {
        OpticalConfigurationBuilder::default()
    }

    pub fn aperture_diameter_mm(&self) -> f64 {
        self.aperture_diameter_mm
    }

    pub fn focal_length_mm(&self) -> f64 {
        self.focal_length_mm
    }

    pub fn eyepiece_focal_length_mm(&self) -> f64 {
        self.eyepiece_focal_length_mm
    }

    pub fn barlow_factor(&self) -> f64 {
        self.barlow_factor
    }

    pub fn focal_reducer_factor(&self) -> f64 {
        self.focal_reducer_factor
    }

    /// Look up a field value by identifier
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::ApertureDiameter => self.aperture_diameter_mm,
            Field::FocalLength => self.focal_length_mm,
            Field::EyepieceFocalLength => self.eyepiece_focal_length_mm,
            Field::BarlowFactor => self.barlow_factor,
            Field::FocalReducerFactor => self.focal_reducer_factor,
        }
    }

    /// Replace a single field. On error the configuration is left unchanged.
    pub fn set(&mut self, field: Field, value: f64) -> Result<(), ConfigError> {
        let value = validate(field, value)?;
        let slot = match field {
            Field::ApertureDiameter => &mut self.aperture_diameter_mm,
            Field::FocalLength => &mut self.focal_length_mm,
            Field::EyepieceFocalLength => &mut self.eyepiece_focal_length_mm,
            Field::BarlowFactor => &mut self.barlow_factor,
            Field::FocalReducerFactor => &mut self.focal_reducer_factor,
        };
        debug!("Replacing {field}: {} -> {value}", *slot);
        *slot = value;
        Ok(())
    }

    pub fn set_aperture_diameter_mm(&mut self, value: f64) -> Result<(), ConfigError> {
        self.set(Field::ApertureDiameter, value)
    }

    pub fn set_focal_length_mm(&mut self, value: f64) -> Result<(), ConfigError> {
        self.set(Field::FocalLength, value)
    }

    pub fn set_eyepiece_focal_length_mm(&mut self, value: f64) -> Result<(), ConfigError> {
        self.set(Field::EyepieceFocalLength, value)
    }

    pub fn set_barlow_factor(&mut self, value: f64) -> Result<(), ConfigError> {
        self.set(Field::BarlowFactor, value)
    }

    pub fn set_focal_reducer_factor(&mut self, value: f64) -> Result<(), ConfigError> {
        self.set(Field::FocalReducerFactor, value)
    }

    /// Focal length of the telescope including Barlow and reducer, in mm
    pub fn effective_focal_length_mm(&self) -> f64 {
        self.barlow_factor * self.focal_length_mm * self.focal_reducer_factor
    }

    /// Magnifying power of the eyepiece in this optical train
    ///
    /// M = B·f·R / e
    pub fn magnification(&self) -> f64 {
        self.effective_focal_length_mm() / self.eyepiece_focal_length_mm
    }

    /// Lowest useful magnification, where the exit pupil reaches
    /// [`MAX_EXIT_PUPIL_MM`]
    pub fn lower_magnification_limit(&self) -> f64 {
        self.aperture_diameter_mm / MAX_EXIT_PUPIL_MM
    }

    /// Highest useful magnification, [`MAX_MAGNIFICATION_PER_MM`] times the
    /// aperture in mm
    pub fn upper_magnification_limit(&self) -> f64 {
        MAX_MAGNIFICATION_PER_MM * self.aperture_diameter_mm
    }

    /// Effective f-number: N = (B·f / D)·R
    pub fn focal_ratio(&self) -> f64 {
        (self.barlow_factor * self.focal_length_mm / self.aperture_diameter_mm)
            * self.focal_reducer_factor
    }

    /// Diameter of the light beam leaving the eyepiece, in mm
    pub fn exit_pupil_mm(&self) -> f64 {
        self.aperture_diameter_mm / self.magnification()
    }

    /// Dawes resolving-power limit in arcseconds
    pub fn dawes_limit_arcsec(&self) -> f64 {
        DAWES_CONSTANT_ARCSEC_MM / self.aperture_diameter_mm
    }

    /// Whether the current magnification lies within the useful range
    pub fn is_magnification_useful(&self) -> bool {
        let magnification = self.magnification();
        magnification >= self.lower_magnification_limit()
            && magnification <= self.upper_magnification_limit()
    }
}

/// Collects configuration inputs that may or may not have been supplied.
///
/// Mirrors a form where the required fields might still be blank; `build`
/// reports the first missing required field before any range check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OpticalConfigurationBuilder {
    aperture_diameter_mm: Option<f64>,
    focal_length_mm: Option<f64>,
    eyepiece_focal_length_mm: Option<f64>,
    barlow_factor: Option<f64>,
    focal_reducer_factor: Option<f64>,
}

impl OpticalConfigurationBuilder {
    pub fn aperture_diameter_mm(mut self, value: f64) -> Self {
        self.aperture_diameter_mm = Some(value);
        self
    }

    pub fn focal_length_mm(mut self, value: f64) -> Self {
        self.focal_length_mm = Some(value);
        self
    }

    pub fn eyepiece_focal_length_mm(mut self, value: f64) -> Self {
        self.eyepiece_focal_length_mm = Some(value);
        self
    }

    pub fn barlow_factor(mut self, value: f64) -> Self {
        self.barlow_factor = Some(value);
        self
    }

    pub fn focal_reducer_factor(mut self, value: f64) -> Self {
        self.focal_reducer_factor = Some(value);
        self
    }

    /// Set or clear any field by identifier
    pub fn field(mut self, field: Field, value: Option<f64>) -> Self {
        match field {
            Field::ApertureDiameter => self.aperture_diameter_mm = value,
            Field::FocalLength => self.focal_length_mm = value,
            Field::EyepieceFocalLength => self.eyepiece_focal_length_mm = value,
            Field::BarlowFactor => self.barlow_factor = value,
            Field::FocalReducerFactor => self.focal_reducer_factor = value,
        }
        self
    }

    pub fn build(self) -> Result<OpticalConfiguration, ConfigError> {
        let aperture = self
            .aperture_diameter_mm
            .ok_or(ConfigError::MissingArgument(Field::ApertureDiameter))?;
        let focal_length = self
            .focal_length_mm
            .ok_or(ConfigError::MissingArgument(Field::FocalLength))?;
        let eyepiece = self
            .eyepiece_focal_length_mm
            .ok_or(ConfigError::MissingArgument(Field::EyepieceFocalLength))?;

        OpticalConfiguration::with_factors(
            aperture,
            focal_length,
            eyepiece,
            self.barlow_factor.unwrap_or(1.0),
            self.focal_reducer_factor.unwrap_or(1.0),
        )
    }
}
