//! Instruction text sent to Gemini for each scanner mode and for chat.

use crate::model::ScannerMode;

const IDENTIFY_INSTRUCTIONS: &str = r#"Analyze this image carefully.

CRITICAL: First verify that this image contains a PLANT or FLOWER. If the image shows anything else (person, animal, object, food, etc.), respond with ONLY this JSON:
{
  "error": "not_a_plant",
  "message": "This image does not appear to contain a plant or flower. Please upload a clear photo of a plant."
}

If it IS a plant or flower, identify it and provide complete information."#;

const DIAGNOSE_INSTRUCTIONS: &str = r#"Analyze these 3 images carefully.

CRITICAL: First verify that ALL images contain the SAME PLANT or FLOWER. If any image shows something else or different plants, respond with ONLY this JSON:
{
  "error": "not_a_plant",
  "message": "Please ensure all images show the same plant from different angles."
}

If all images show the same plant, identify it and diagnose any issues."#;

const MULTIPLE_INSTRUCTIONS: &str = r#"Analyze these 3 images carefully.

CRITICAL: First verify that ALL images contain the SAME PLANT or FLOWER. If any image shows something else or different plants, respond with ONLY this JSON:
{
  "error": "not_a_plant",
  "message": "Please ensure all images show the same plant from different angles."
}

If all images show the same plant, provide complete identification and care information."#;

/// Output contract shared by every scanner mode. The parser and assembler
/// rely on these key names, including the `nagitive` spelling.
const RESPONSE_SCHEMA: &str = r#"Return ONLY valid JSON with this exact structure (no markdown, no explanation, no code blocks):

{
  "name": "Common name of the plant (e.g., Monstera)",
  "description": "Scientific name (e.g., Monstera Deliciosa)",
  "labels": ["🌿 Tropical", "🐾 Pet-toxic", "🌱 Easy Care", "💧 Moderate Water"],

  "overview": {
    "WateringNeeds": {
      "mainDescription": "💧 Every 7-10 days when top 2-3cm dry",
      "negative": "Detailed potential issues with overwatering (2-3 sentences)",
      "about": [
        {
          "title": "Clear instruction title (one sentence)",
          "list": ["Actionable tip 1", "Actionable tip 2", "Actionable tip 3"]
        },
        {
          "title": "Second instruction title",
          "list": ["Actionable tip 1", "Actionable tip 2", "Actionable tip 3"]
        }
      ]
    },
    "Fertilizing": {
      "mainDescription": "🌱 NPK 10-10-10 every 2-4 weeks (spring-summer)",
      "negative": "Over-fertilizing issues (2-3 sentences)",
      "about": [
        {"title": "Feeding schedule guidance", "list": ["Tip 1", "Tip 2", "Tip 3"]},
        {"title": "Fertilizer type guidance", "list": ["Tip 1", "Tip 2", "Tip 3"]}
      ]
    },
    "LightRequirement": {
      "mainDescription": "☀️ Bright indirect 4-6hrs daily",
      "negative": "Light issues (2-3 sentences)",
      "about": [
        {"title": "Optimal light conditions", "list": ["Tip 1", "Tip 2", "Tip 3"]},
        {"title": "Adapting to home lighting", "list": ["Tip 1", "Tip 2", "Tip 3"]}
      ]
    },
    "Humidity": {
      "mainDescription": "💨 40-60% • Mist 2-3x weekly",
      "negative": "Low humidity issues (2-3 sentences)",
      "about": [
        {"title": "Humidity requirements", "list": ["Tip 1", "Tip 2", "Tip 3"]},
        {"title": "Increasing humidity", "list": ["Tip 1", "Tip 2", "Tip 3"]}
      ]
    },
    "TemperatureRange": {
      "mainDescription": "🌡️ 18-24°C (64-75°F) • Min 13°C (55°F)",
      "negative": "Temperature stress issues (2-3 sentences)",
      "about": [
        {"title": "Ideal temperature range", "list": ["Tip 1", "Tip 2", "Tip 3"]},
        {"title": "Temperature protection", "list": ["Tip 1", "Tip 2", "Tip 3"]}
      ]
    },
    "SoilType": {
      "mainDescription": "🪴 Well-draining mix • pH 6.0-7.0",
      "negative": "Wrong soil issues (2-3 sentences)",
      "about": [
        {"title": "Soil mix requirements", "list": ["Tip 1", "Tip 2", "Tip 3"]},
        {"title": "Matching soil to habitat", "list": ["Tip 1", "Tip 2", "Tip 3"]}
      ]
    },
    "PotDrainage": {
      "mainDescription": "⚫ Pot 15-25cm • Drainage holes required",
      "negative": "Poor drainage issues (2-3 sentences)",
      "about": [
        {"title": "Drainage hole requirements", "list": ["Tip 1", "Tip 2", "Tip 3"]},
        {"title": "Drainage layer setup", "list": ["Tip 1", "Tip 2", "Tip 3"]}
      ]
    },
    "PruningNeeds": {
      "mainDescription": "✂️ Remove dead leaves • Trim in spring",
      "negative": "Neglecting pruning issues (2-3 sentences)",
      "about": [
        {"title": "Regular pruning guidance", "list": ["Tip 1", "Tip 2", "Tip 3"]},
        {"title": "Proper pruning technique", "list": ["Tip 1", "Tip 2", "Tip 3"]}
      ]
    }
  },

  "careplan": {
    "Watering": {
      "Repeat": "Everyweek",
      "CustomRepeat": { "Value": 1, "Type": "week" },
      "Time": "09:00:00"
    },
    "Fertilize": {
      "Repeat": "Everymonth",
      "CustomRepeat": { "Value": 2, "Type": "month" },
      "Time": "10:00:00"
    },
    "Repotting": {
      "Repeat": "Custom",
      "CustomRepeat": { "Value": 1, "Type": "year" },
      "Time": "10:00:00"
    },
    "Pruning": {
      "Repeat": "Custom",
      "CustomRepeat": { "Value": 3, "Type": "month" },
      "Time": "10:00:00"
    },
    "Humidity": {
      "Repeat": "Everyday",
      "CustomRepeat": { "Value": 1, "Type": "day" },
      "Time": "08:00:00"
    },
    "Soilcheck": {
      "Repeat": "Everyweek",
      "CustomRepeat": { "Value": 2, "Type": "week" },
      "Time": "10:00:00"
    }
  },

  "disease": [
    {
      "image": "https://example.com/disease.jpg",
      "title": "Yellow Leaves",
      "description": "Detailed 2-3 sentence description",
      "nagitive": "Consequences if untreated (2-3 sentences)",
      "fix": "1. Step one\n2. Step two\n3. Step three\n4. Step four\n5. Step five"
    },
    {
      "image": "https://example.com/disease2.jpg",
      "title": "Brown Tips",
      "description": "Detailed description",
      "nagitive": "Consequences",
      "fix": "Numbered steps separated by \\n"
    },
    {
      "image": "https://example.com/disease3.jpg",
      "title": "Root Rot",
      "description": "Detailed description",
      "nagitive": "Consequences",
      "fix": "Numbered steps"
    },
    {
      "image": "https://example.com/disease4.jpg",
      "title": "Common Pests",
      "description": "Detailed description",
      "nagitive": "Consequences",
      "fix": "Numbered steps"
    }
  ]
}

IMPORTANT RULES FOR mainDescription:
- Keep it 1-2 lines maximum (under 50 characters total)
- Use emoji symbols: 💧 ☀️ 🌡️ 💨 🪴 ⚫ ✂️ 🌱
- Use concise measurements: cm, %, °C, °F, hrs
- Use bullet separator: •

CRITICAL: Provide EXACTLY 4 disease items with realistic, actionable information."#;

/// Persona instructions for the chat assistant.
pub const CHAT_PERSONA: &str = "You are Mr. Oliver, an expert AI botanist assistant.
You help users with plant care, identification, disease diagnosis, and gardening advice.
Be friendly, helpful, and provide accurate botanical information.
If the user shares an image, analyze it and provide relevant plant advice.
Keep responses concise but informative.";

/// Label the assistant's turns carry in the transcript.
pub const ASSISTANT_LABEL: &str = "Mr. Oliver";

/// Mode-specific verification and task instructions.
#[must_use]
pub fn instructions(mode: ScannerMode) -> &'static str {
    match mode {
        ScannerMode::Identify => IDENTIFY_INSTRUCTIONS,
        ScannerMode::Diagnose => DIAGNOSE_INSTRUCTIONS,
        ScannerMode::Multiple => MULTIPLE_INSTRUCTIONS,
    }
}

/// Full text part for an identification request.
#[must_use]
pub fn build_identification_prompt(mode: ScannerMode) -> String {
    format!("{}\n\n{RESPONSE_SCHEMA}", instructions(mode))
}
