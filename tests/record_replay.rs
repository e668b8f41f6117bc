//! Cassette replay integration tests, zero network I/O.
//!
//! All tests set `PLANTUS_REPLAY` to a cassette file path so that the binary
//! never contacts a live API endpoint.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=800&q=80";

fn cmd(cassette: &str) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("plantus");
    cmd.env("PLANTUS_REPLAY", fixtures_dir().join(cassette))
        .env("PLANTUS_CONFIG", "/nonexistent/config.toml")
        .env_remove("PLANTUS_REC")
        .env_remove("GEMINI_API_KEY")
        .env_remove("PEXELS_API_KEY");
    cmd
}

/// Absolute path to the `test_fixtures` directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

/// A real 2x2 PNG on disk, unique per test.
fn leaf_photo(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plantus_replay_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{name}.png"));
    image::DynamicImage::new_rgb8(2, 2).save(&path).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be one JSON document")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn identify_happy_path_assembles_full_record() {
    let photo = leaf_photo("monstera");
    let output = cmd("identify_monstera.cassette.yaml")
        .args(["identify", path_arg(&photo)])
        .assert()
        .success()
        .get_output()
        .clone();

    let envelope = stdout_json(&output);
    assert_eq!(envelope["success"], true);
    assert!(envelope.get("error").is_none());

    let data = &envelope["data"];
    assert_eq!(data["name"], "Monstera deliciosa");
    assert_eq!(data["labels"], serde_json::json!(["Tropical", "Climber"]));
    assert_eq!(data["images"].as_array().unwrap().len(), 6);

    let overview = &data["overview"];
    assert_eq!(overview["wateringNeeds"]["negative"], "Soggy soil rots roots");
    assert_eq!(overview["wateringNeeds"]["about"][0]["list"][1], "Every two weeks in winter");
    assert_eq!(overview["fertilizing"]["negative"], "Salt build-up burns tips");
    assert_eq!(overview["humidity"]["negative"], "Dry air browns edges");

    let careplan = &data["careplan"];
    assert_eq!(careplan["watering"]["customRepeat"]["value"], 7);
    assert_eq!(careplan["watering"]["time"], "08:00:00");
    assert_eq!(careplan["fertilize"]["time"], "09:00:00");
    assert_eq!(careplan["repotting"]["repeat"], "Everyday");

    let disease = &data["disease"][0];
    assert_eq!(disease["title"], "Root Rot");
    assert_eq!(disease["negative"], "Leaves droop and yellow");
    assert_eq!(disease["image"], "https://images.pexels.com/photos/99/root-rot.jpeg");
}

#[test]
fn identify_writes_report_file() {
    let photo = leaf_photo("monstera-report");
    let out = photo.with_extension("json");
    let _ = std::fs::remove_file(&out);

    cmd("identify_monstera.cassette.yaml")
        .args(["identify", "-o", path_arg(&out), path_arg(&photo)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Saved:"));

    let report: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["data"]["name"], "Monstera deliciosa");
}

#[test]
fn failed_photo_lookups_fall_back() {
    let photo = leaf_photo("pothos");
    let output = cmd("identify_gallery_down.cassette.yaml")
        .args(["identify", path_arg(&photo)])
        .assert()
        .success()
        .get_output()
        .clone();

    let data = &stdout_json(&output)["data"];
    assert_eq!(data["images"], serde_json::json!([FALLBACK_IMAGE]));
    assert_eq!(data["disease"][0]["image"], FALLBACK_IMAGE);
    assert_eq!(data["description"], "");
    assert_eq!(data["careplan"]["soilcheck"]["customRepeat"]["type"], "day");
}

#[test]
fn not_a_plant_reports_model_message() {
    let photo = leaf_photo("mug");
    let output = cmd("identify_not_a_plant.cassette.yaml")
        .args(["identify", path_arg(&photo)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: This looks like a coffee mug, not a plant."))
        .get_output()
        .clone();

    let envelope = stdout_json(&output);
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "This looks like a coffee mug, not a plant.");
    assert!(envelope.get("data").is_none());
}

#[test]
fn rejected_credentials_stop_the_pipeline() {
    let photo = leaf_photo("fern");
    cmd("credentials_rejected.cassette.yaml")
        .args(["identify", path_arg(&photo)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to fetch API keys: 401"))
        .stdout(predicate::str::contains(r#""success": false"#));
}

#[test]
fn chat_reply_drops_persona_label() {
    let output = cmd("chat_watering.cassette.yaml")
        .args(["chat", "How often should I water my fern?"])
        .assert()
        .success()
        .get_output()
        .clone();

    let envelope = stdout_json(&output);
    assert_eq!(envelope["data"]["message"], "Water your fern when the top inch of soil feels dry.");
}

#[test]
fn chat_history_file_is_accepted() {
    let dir = std::env::temp_dir().join(format!("plantus_replay_history_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let history = dir.join("history.json");
    std::fs::write(
        &history,
        r#"[{"role": "user", "content": "Hi"}, {"role": "assistant", "content": "Hello! How are your plants?"}]"#,
    )
    .unwrap();

    cmd("chat_watering.cassette.yaml")
        .args(["chat", "--history", path_arg(&history), "How often should I water my fern?"])
        .assert()
        .success();

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn weather_replays_report() {
    let output = cmd("conditions_tashkent.cassette.yaml")
        .args(["weather", "--lat", "41.31", "--lon", "69.28"])
        .assert()
        .success()
        .get_output()
        .clone();

    let data = &stdout_json(&output)["data"];
    assert_eq!(data["location"], "Tashkent");
    assert_eq!(data["temp"], 24);
    assert_eq!(data["windSpeed"], 3.1);
}

#[test]
fn locate_without_results_fails() {
    cmd("conditions_tashkent.cassette.yaml")
        .args(["locate", "--lat", "41.31", "--lon", "69.28"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No results found"));
}

#[test]
fn conditions_keep_partial_results() {
    let output = cmd("conditions_tashkent.cassette.yaml")
        .args(["conditions", "--lat", "41.31", "--lon", "69.28"])
        .assert()
        .success()
        .get_output()
        .clone();

    let data = &stdout_json(&output)["data"];
    assert!(data["place"].is_null());
    assert_eq!(data["weather"]["description"], "clear sky");
}

#[test]
fn exhausted_cassette_is_an_error() {
    cmd("credentials_rejected.cassette.yaml")
        .args(["weather", "--lat", "0", "--lon", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cassette exhausted"));
}

#[test]
fn missing_cassette_is_reported() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("plantus");
    cmd.env("PLANTUS_REPLAY", "/nonexistent/missing.cassette.yaml")
        .env("PLANTUS_CONFIG", "/nonexistent/config.toml")
        .args(["locate", "--lat", "0", "--lon", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load cassette"));
}
