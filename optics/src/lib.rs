//! Telescope and eyepiece optics calculator
//!
//! This crate computes the derived optical parameters of a visual observing
//! setup (magnification, useful magnification range, focal ratio, exit pupil
//! and Dawes limit) from a validated telescope/eyepiece configuration, and
//! provides the text-form adapter and report rendering used by the
//! command line tool.

pub mod configuration;
pub mod input;
pub mod messages;
pub mod models;
pub mod report;
pub mod shared_args;

// Re-exports for easier access
pub use configuration::{ConfigError, Field, OpticalConfiguration};
pub use input::{InputError, OpticalInput};
pub use messages::{localize, Locale};
pub use models::TelescopeModel;
pub use report::OpticsReport;
