//! Plantus - plant identification and care assistant CLI.

mod adapters;
mod assemble;
mod cassette;
mod chat;
mod cli;
mod conditions;
mod config;
mod context;
mod error;
mod gallery;
mod inline_image;
mod model;
mod output;
mod params;
mod parse;
mod pipeline;
mod plant;
mod ports;
mod prompt;
#[cfg(test)]
mod testing;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::chat::{send_chat_message, ChatMessage};
use crate::cli::{ChatArgs, Cli, Command, IdentifyArgs, LocationArgs, WeatherArgs};
use crate::conditions::{fetch_place, fetch_weather, refresh};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::PlantError;
use crate::inline_image::load_data_uri;
use crate::model::{resolve_model, validate_model, ScannerMode};
use crate::output::Outcome;
use crate::params::{validate_coordinates, validate_image_count, validate_message, validate_units};
use crate::pipeline::PlantIdentifier;
use crate::ports::{Coordinates, Units};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout stays a single JSON document.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,plantus=debug" } else { "warn,plantus=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

/// A command whose arguments have been validated and whose files are loaded.
enum Prepared {
    Identify { mode: ScannerMode, model: String, images: Vec<String>, output: Option<PathBuf> },
    Chat { model: String, messages: Vec<ChatMessage>, image: Option<String> },
    Weather { coordinates: Coordinates, units: Units },
    Locate { coordinates: Coordinates },
    Conditions { coordinates: Coordinates, units: Units },
}

/// Returns whether the command succeeded; `Err` is reserved for failures
/// that happen before any envelope can be printed.
async fn run(cli: Cli) -> Result<bool, PlantError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(PlantError::Config)?;

    let prepared = prepare(cli.command, &config)?;

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("PLANTUS_REPLAY").ok();
    let is_recording = std::env::var("PLANTUS_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        tracing::info!("recording mode enabled");
        let (ctx, session) = ServiceContext::recording(&config);
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config), None)
    };

    let success = execute(&ctx, prepared).await?;

    drop(ctx);
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => tracing::warn!(error = %e, "failed to save cassette"),
        }
    }

    Ok(success)
}

fn prepare(command: Command, config: &Config) -> Result<Prepared, PlantError> {
    match command {
        Command::Identify(IdentifyArgs { mode, model, output, images }) => {
            let model = select_model(model.as_deref(), config)?;
            validate_image_count(mode, images.len()).map_err(PlantError::Validation)?;
            let images = images.iter().map(|path| read_image(path)).collect::<Result<_, _>>()?;
            Ok(Prepared::Identify { mode, model, images, output })
        }
        Command::Chat(ChatArgs { history, image, model, message }) => {
            let model = select_model(model.as_deref(), config)?;
            validate_message(&message).map_err(PlantError::InvalidArgument)?;
            let mut messages = match history {
                Some(path) => read_history(&path)?,
                None => Vec::new(),
            };
            messages.push(ChatMessage::user(message));
            let image = image.as_deref().map(read_image).transpose()?;
            Ok(Prepared::Chat { model, messages, image })
        }
        Command::Weather(args) => {
            let (coordinates, units) = weather_args(&args, config)?;
            Ok(Prepared::Weather { coordinates, units })
        }
        Command::Locate(location) => Ok(Prepared::Locate { coordinates: coordinates(&location)? }),
        Command::Conditions(args) => {
            let (coordinates, units) = weather_args(&args, config)?;
            Ok(Prepared::Conditions { coordinates, units })
        }
    }
}

async fn execute(ctx: &ServiceContext, command: Prepared) -> Result<bool, PlantError> {
    match command {
        Prepared::Identify { mode, model, images, output } => {
            let identifier = PlantIdentifier::new(ctx, model).on_error(|message| eprintln!("Error: {message}"));
            let outcome = Outcome::from(identifier.identify(&images, mode).await);
            outcome.emit(output.as_deref())?;
            Ok(outcome.success)
        }
        Prepared::Chat { model, messages, image } => {
            report(Outcome::from(send_chat_message(ctx, &model, &messages, image.as_deref()).await))
        }
        Prepared::Weather { coordinates, units } => {
            report(Outcome::from(fetch_weather(ctx, coordinates, units).await))
        }
        Prepared::Locate { coordinates } => report(Outcome::from(fetch_place(ctx, coordinates).await)),
        Prepared::Conditions { coordinates, units } => {
            report(Outcome::from(Ok(refresh(ctx, coordinates, units).await)))
        }
    }
}

/// Print the envelope to stdout and any failure to stderr.
fn report<T: Serialize>(outcome: Outcome<T>) -> Result<bool, PlantError> {
    if let Some(ref message) = outcome.error {
        eprintln!("Error: {message}");
    }
    outcome.emit(None)?;
    Ok(outcome.success)
}

fn select_model(explicit: Option<&str>, config: &Config) -> Result<String, PlantError> {
    let model = resolve_model(explicit.unwrap_or(&config.defaults.model));
    validate_model(&model).map_err(PlantError::InvalidArgument)?;
    tracing::debug!(%model, "resolved model");
    Ok(model)
}

fn weather_args(args: &WeatherArgs, config: &Config) -> Result<(Coordinates, Units), PlantError> {
    let coordinates = coordinates(&args.location)?;
    let units = match args.units.as_deref() {
        Some(units) => validate_units(units).map_err(PlantError::InvalidArgument)?,
        None => config.defaults.units,
    };
    Ok((coordinates, units))
}

fn coordinates(location: &LocationArgs) -> Result<Coordinates, PlantError> {
    validate_coordinates(location.lat, location.lon).map_err(PlantError::InvalidArgument)
}

fn read_image(path: &Path) -> Result<String, PlantError> {
    load_data_uri(path)
        .map_err(|e| PlantError::InvalidArgument(format!("Cannot read image {}: {e}", path.display())))
}

fn read_history(path: &Path) -> Result<Vec<ChatMessage>, PlantError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        PlantError::InvalidArgument(format!("Invalid chat history {}: {e}", path.display()))
    })
}
