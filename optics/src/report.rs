//! Snapshot and text rendering of derived optical quantities.

use crate::configuration::OpticalConfiguration;
use serde::Serialize;
use std::fmt;

/// Suffix for magnification-type values
pub const MAGNIFICATION_SUFFIX: &str = "x";

/// Suffix for angular resolution values
pub const ARCSEC_SUFFIX: &str = "arcsec";

/// Suffix for exit pupil diameter
pub const MILLIMETER_SUFFIX: &str = "mm";

/// Render a value with two decimals followed by its unit suffix.
///
/// An empty suffix yields the bare number with no trailing space.
pub fn format_quantity(value: f64, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{value:.2}")
    } else {
        format!("{value:.2} {suffix}")
    }
}

/// All derived quantities of a configuration, evaluated at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpticsReport {
    pub magnification: f64,
    pub lower_magnification_limit: f64,
    pub upper_magnification_limit: f64,
    pub focal_ratio: f64,
    pub exit_pupil_mm: f64,
    pub dawes_limit_arcsec: f64,
}

impl OpticsReport {
    pub fn from_configuration(config: &OpticalConfiguration) -> Self {
        Self {
            magnification: config.magnification(),
            lower_magnification_limit: config.lower_magnification_limit(),
            upper_magnification_limit: config.upper_magnification_limit(),
            focal_ratio: config.focal_ratio(),
            exit_pupil_mm: config.exit_pupil_mm(),
            dawes_limit_arcsec: config.dawes_limit_arcsec(),
        }
    }

    /// Label/rendered-value pairs in display order
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Magnification",
                format_quantity(self.magnification, MAGNIFICATION_SUFFIX),
            ),
            (
                "Lower magnification limit",
                format_quantity(self.lower_magnification_limit, MAGNIFICATION_SUFFIX),
            ),
            (
                "Upper magnification limit",
                format_quantity(self.upper_magnification_limit, MAGNIFICATION_SUFFIX),
            ),
            ("Focal ratio", format_quantity(self.focal_ratio, "")),
            (
                "Exit pupil",
                format_quantity(self.exit_pupil_mm, MILLIMETER_SUFFIX),
            ),
            (
                "Dawes limit",
                format_quantity(self.dawes_limit_arcsec, ARCSEC_SUFFIX),
            ),
        ]
    }
}

impl From<&OpticalConfiguration> for OpticsReport {
    fn from(config: &OpticalConfiguration) -> Self {
        Self::from_configuration(config)
    }
}

impl fmt::Display for OpticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label:<26} {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(100.0, MAGNIFICATION_SUFFIX), "100.00 x");
        assert_eq!(format_quantity(200.0 / 6.0, "x"), "33.33 x");
        assert_eq!(format_quantity(0.58, ARCSEC_SUFFIX), "0.58 arcsec");
        assert_eq!(format_quantity(5.0, ""), "5.00");
    }

    #[test]
    fn test_report_values() {
        let config = OpticalConfiguration::new(200.0, 1000.0, 10.0).unwrap();
        let report = OpticsReport::from(&config);
        assert_eq!(report.magnification, 100.0);
        assert_eq!(report.upper_magnification_limit, 400.0);
        assert_eq!(report.focal_ratio, 5.0);
        assert_eq!(report.exit_pupil_mm, 2.0);
        assert_eq!(report.dawes_limit_arcsec, 0.58);
    }

    #[test]
    fn test_report_display() {
        let config = OpticalConfiguration::new(200.0, 1000.0, 10.0).unwrap();
        let text = OpticsReport::from_configuration(&config).to_string();
        assert!(text.contains("Magnification              100.00 x"));
        assert!(text.contains("Lower magnification limit  33.33 x"));
        assert!(text.contains("Focal ratio                5.00\n"));
        assert!(text.contains("Dawes limit                0.58 arcsec"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_report_json() {
        let config = OpticalConfiguration::new(116.0, 1160.0, 10.0).unwrap();
        let json = serde_json::to_value(OpticsReport::from(&config)).unwrap();
        assert_eq!(json["magnification"], 116.0);
        assert_eq!(json["dawes_limit_arcsec"], 1.0);
    }
}
