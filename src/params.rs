//! Input validation shared by the CLI and the pipelines.

use crate::model::ScannerMode;
use crate::ports::{Coordinates, Units};

/// Validate the number of images supplied for a scanner mode.
///
/// # Errors
///
/// Returns an error if no images are given or the count doesn't match the mode.
pub fn validate_image_count(mode: ScannerMode, count: usize) -> Result<(), String> {
    if count == 0 {
        return Err("No images provided".to_string());
    }
    if count == mode.required_images() {
        return Ok(());
    }
    match mode {
        ScannerMode::Identify => Err("Identify mode requires exactly 1 image".to_string()),
        ScannerMode::Diagnose | ScannerMode::Multiple => {
            Err("Diagnose/Multiple mode requires exactly 3 images".to_string())
        }
    }
}

/// Validate the units parameter.
///
/// # Errors
///
/// Returns an error if the units are not recognized.
pub fn validate_units(units: &str) -> Result<Units, String> {
    units.parse()
}

/// Validate a latitude/longitude pair.
///
/// # Errors
///
/// Returns an error if either value is out of range or not finite.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<Coordinates, String> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Unsupported latitude '{lat}'. Valid: -90 to 90"));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("Unsupported longitude '{lon}'. Valid: -180 to 180"));
    }
    Ok(Coordinates { lat, lon })
}

/// Validate a chat message.
///
/// # Errors
///
/// Returns an error if the message is blank.
pub fn validate_message(message: &str) -> Result<(), String> {
    if message.trim().is_empty() {
        Err("Message must not be empty".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identify_requires_one_image() {
        assert!(validate_image_count(ScannerMode::Identify, 1).is_ok());
        assert_eq!(
            validate_image_count(ScannerMode::Identify, 3).unwrap_err(),
            "Identify mode requires exactly 1 image"
        );
    }

    #[test]
    fn diagnose_and_multiple_require_three() {
        for mode in [ScannerMode::Diagnose, ScannerMode::Multiple] {
            assert!(validate_image_count(mode, 3).is_ok());
            assert!(validate_image_count(mode, 1).is_err());
            assert!(validate_image_count(mode, 4).is_err());
        }
    }

    #[test]
    fn zero_images_rejected_first() {
        assert_eq!(validate_image_count(ScannerMode::Diagnose, 0).unwrap_err(), "No images provided");
    }

    #[test]
    fn units_valid_and_invalid() {
        assert_eq!(validate_units("metric").unwrap(), Units::Metric);
        assert_eq!(validate_units("imperial").unwrap(), Units::Imperial);
        assert!(validate_units("standard").is_err());
    }

    #[test]
    fn coordinates_range() {
        assert!(validate_coordinates(41.3, 69.2).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn blank_message_rejected() {
        assert!(validate_message("How often should I water?").is_ok());
        assert!(validate_message("   ").is_err());
    }
}
