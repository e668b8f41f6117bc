//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::ScannerMode;

/// Plant identification and care assistant.
#[derive(Parser, Debug)]
#[command(name = "plantus", version, about)]
pub struct Cli {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose logging (debug level unless `RUST_LOG` is set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Identify a plant (or diagnose it) from photos.
    Identify(IdentifyArgs),
    /// Ask the botanist assistant a question.
    Chat(ChatArgs),
    /// Current weather at a location.
    Weather(WeatherArgs),
    /// City and country for a location.
    Locate(LocationArgs),
    /// Place and weather together; either may be missing.
    Conditions(WeatherArgs),
}

/// Arguments for `identify`.
#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Scanner mode: `identify` takes 1 image, `diagnose`/`multiple` take 3.
    #[arg(long, value_enum, default_value_t = ScannerMode::Identify)]
    pub mode: ScannerMode,

    /// Model name or short alias (flash, flash-lite, pro).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Write the JSON result to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image files.
    pub images: Vec<PathBuf>,
}

/// Arguments for `chat`.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// JSON file holding earlier messages: `[{"role": "user", "content": "..."}]`.
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Image to attach to the message.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Model name or short alias.
    #[arg(short, long)]
    pub model: Option<String>,

    /// The message to send.
    pub message: String,
}

/// Coordinates plus units.
#[derive(Args, Debug)]
pub struct WeatherArgs {
    /// Where to look.
    #[command(flatten)]
    pub location: LocationArgs,

    /// Units: metric, imperial.
    #[arg(short, long)]
    pub units: Option<String>,
}

/// A latitude/longitude pair.
#[derive(Args, Debug)]
pub struct LocationArgs {
    /// Latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}
