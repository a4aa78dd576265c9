//! Command line calculator for telescope/eyepiece combinations
//!
//! Prints magnification, useful magnification range, focal ratio, exit pupil
//! and Dawes limit for the given optical train.
//!
//! Usage:
//! ```
//! cargo run --bin optics_calculator -- --telescope newtonian200mm --eyepiece 10 --barlow 2
//! ```
//!
//! See --help for detailed options.

use clap::Parser;
use log::{debug, info};
use optics::shared_args::OpticalTrainArgs;
use optics::{localize, OpticsReport};

/// Command line arguments for the optics calculator
#[derive(Parser, Debug)]
#[command(
    name = "Optics Calculator",
    about = "Computes derived optical parameters of a telescope/eyepiece configuration",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    optics: OpticalTrainArgs,

    /// Print the results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging from environment variables
    env_logger::init();

    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let input = args.optics.to_input();
    let config = match input.to_configuration() {
        Ok(config) => config,
        Err(e) => {
            info!("Rejected input: {e}");
            eprintln!("{}", localize(&e, args.optics.locale));
            std::process::exit(1);
        }
    };

    let report = OpticsReport::from_configuration(&config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(preset) = args.optics.telescope {
        println!("Telescope: {}", preset.to_model().name);
    }
    println!(
        "Optical train: {:.1} mm aperture, {:.1} mm focal length, {:.1} mm eyepiece",
        config.aperture_diameter_mm(),
        config.focal_length_mm(),
        config.eyepiece_focal_length_mm()
    );
    println!(
        "Barlow: {:.2}x  Reducer: {:.2}x  Effective focal length: {:.1} mm",
        config.barlow_factor(),
        config.focal_reducer_factor(),
        config.effective_focal_length_mm()
    );
    println!();
    print!("{report}");

    if !config.is_magnification_useful() {
        println!();
        println!("Warning: magnification is outside the useful range for this aperture");
    }

    Ok(())
}
