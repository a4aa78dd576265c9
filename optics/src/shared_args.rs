use crate::input::OpticalInput;
use crate::messages::Locale;
use crate::models::{self, TelescopeModel};
use clap::{Parser, ValueEnum};

/// Available telescope presets for selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TelescopePreset {
    /// 80mm f/6 refractor
    #[value(name = "refractor80mm")]
    Refractor80mm,
    /// 102mm f/13 Maksutov
    #[value(name = "maksutov102mm")]
    Maksutov102mm,
    /// 150mm f/8 Newtonian
    #[value(name = "newtonian150mm")]
    Newtonian150mm,
    /// 200mm f/5 Newtonian
    #[value(name = "newtonian200mm")]
    Newtonian200mm,
    /// 8" f/10 Schmidt-Cassegrain
    #[value(name = "sct203mm")]
    Sct203mm,
}

impl std::fmt::Display for TelescopePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelescopePreset::Refractor80mm => write!(f, "refractor80mm"),
            TelescopePreset::Maksutov102mm => write!(f, "maksutov102mm"),
            TelescopePreset::Newtonian150mm => write!(f, "newtonian150mm"),
            TelescopePreset::Newtonian200mm => write!(f, "newtonian200mm"),
            TelescopePreset::Sct203mm => write!(f, "sct203mm"),
        }
    }
}

impl TelescopePreset {
    /// Get the corresponding TelescopeModel for the selected preset
    pub fn to_model(&self) -> &'static TelescopeModel {
        match self {
            TelescopePreset::Refractor80mm => &models::REFRACTOR_80MM,
            TelescopePreset::Maksutov102mm => &models::MAKSUTOV_102MM,
            TelescopePreset::Newtonian150mm => &models::NEWTONIAN_150MM,
            TelescopePreset::Newtonian200mm => &models::NEWTONIAN_200MM,
            TelescopePreset::Sct203mm => &models::SCT_203MM,
        }
    }
}

/// Optical train arguments shared by command line tools.
///
/// Numeric values are kept as text so they go through the same parsing and
/// error reporting as any other form input.
#[derive(Parser, Debug, Clone)]
pub struct OpticalTrainArgs {
    /// Telescope preset supplying aperture and focal length
    #[arg(long)]
    pub telescope: Option<TelescopePreset>,

    /// Aperture diameter in millimeters (overrides the preset)
    #[arg(long)]
    pub aperture: Option<String>,

    /// Native focal length in millimeters (overrides the preset)
    #[arg(long)]
    pub focal_length: Option<String>,

    /// Eyepiece focal length in millimeters
    #[arg(long)]
    pub eyepiece: Option<String>,

    /// Barlow lens factor (omit for none)
    #[arg(long)]
    pub barlow: Option<String>,

    /// Focal reducer factor (omit for none)
    #[arg(long)]
    pub reducer: Option<String>,

    /// Language for error messages
    #[arg(long, default_value_t = Locale::En)]
    pub locale: Locale,
}

impl OpticalTrainArgs {
    /// Assemble the form state, filling aperture and focal length from the
    /// preset when they were not given explicitly
    pub fn to_input(&self) -> OpticalInput {
        let preset = self.telescope.map(|p| p.to_model());
        let aperture = self
            .aperture
            .clone()
            .or_else(|| preset.map(|m| m.aperture_mm.to_string()))
            .unwrap_or_default();
        let focal_length = self
            .focal_length
            .clone()
            .or_else(|| preset.map(|m| m.focal_length_mm.to_string()))
            .unwrap_or_default();

        let mut input = OpticalInput::new(
            aperture,
            focal_length,
            self.eyepiece.clone().unwrap_or_default(),
        );
        if let Some(barlow) = &self.barlow {
            input = input.with_barlow(barlow.clone());
        }
        if let Some(reducer) = &self.reducer {
            input = input.with_reducer(reducer.clone());
        }
        input
    }
}
