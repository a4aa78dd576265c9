//! Predefined telescope bodies.
//!
//! A [`TelescopeModel`] captures only the fixed part of an instrument
//! (aperture and native focal length). Pairing it with an eyepiece yields a
//! full [`OpticalConfiguration`].

use crate::configuration::{ConfigError, OpticalConfiguration};

/// Aperture and native focal length of a telescope, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelescopeModel {
    /// Model name or identifier
    pub name: &'static str,
    /// Clear aperture of the objective or primary mirror
    pub aperture_mm: f64,
    /// Native focal length without any Barlow or reducer
    pub focal_length_mm: f64,
}

impl TelescopeModel {
    pub const fn new(name: &'static str, aperture_mm: f64, focal_length_mm: f64) -> Self {
        Self {
            name,
            aperture_mm,
            focal_length_mm,
        }
    }

    /// Native f-number of the telescope
    pub fn f_number(&self) -> f64 {
        self.focal_length_mm / self.aperture_mm
    }

    /// Combine with an eyepiece, no Barlow or reducer
    pub fn with_eyepiece(
        &self,
        eyepiece_focal_length_mm: f64,
    ) -> Result<OpticalConfiguration, ConfigError> {
        OpticalConfiguration::new(
            self.aperture_mm,
            self.focal_length_mm,
            eyepiece_focal_length_mm,
        )
    }
}

/// 80mm f/6 apochromatic refractor
pub const REFRACTOR_80MM: TelescopeModel = TelescopeModel::new("80mm f/6 Refractor", 80.0, 480.0);

/// 102mm f/13 Maksutov-Cassegrain
pub const MAKSUTOV_102MM: TelescopeModel =
    TelescopeModel::new("102mm f/13 Maksutov", 102.0, 1300.0);

/// 150mm f/8 Newtonian reflector
pub const NEWTONIAN_150MM: TelescopeModel =
    TelescopeModel::new("150mm f/8 Newtonian", 150.0, 1200.0);

/// 200mm f/5 Newtonian reflector
pub const NEWTONIAN_200MM: TelescopeModel =
    TelescopeModel::new("200mm f/5 Newtonian", 200.0, 1000.0);

/// 203mm f/10 Schmidt-Cassegrain
pub const SCT_203MM: TelescopeModel = TelescopeModel::new("8\" f/10 SCT", 203.2, 2032.0);

/// All predefined telescope models
pub const ALL_TELESCOPES: [&TelescopeModel; 5] = [
    &REFRACTOR_80MM,
    &MAKSUTOV_102MM,
    &NEWTONIAN_150MM,
    &NEWTONIAN_200MM,
    &SCT_203MM,
];

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_predefined_telescopes() {
        assert_eq!(NEWTONIAN_200MM.f_number(), 5.0);
        assert_eq!(REFRACTOR_80MM.f_number(), 6.0);
        assert!(approx_eq!(f64, SCT_203MM.f_number(), 10.0, epsilon = 1e-12));

        for telescope in ALL_TELESCOPES {
            assert!(telescope.aperture_mm > 0.0, "{}", telescope.name);
            assert!(telescope.focal_length_mm > 0.0, "{}", telescope.name);
        }
    }

    #[test]
    fn test_with_eyepiece() {
        let config = NEWTONIAN_200MM.with_eyepiece(10.0).unwrap();
        assert_eq!(config.magnification(), 100.0);
        assert_eq!(config.focal_ratio(), NEWTONIAN_200MM.f_number());

        assert!(NEWTONIAN_200MM.with_eyepiece(0.0).is_err());
    }
}
