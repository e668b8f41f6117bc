//! The plant-information record handed back to callers.

use serde::{Deserialize, Serialize};

/// Everything learned about a plant from one identification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantInformation {
    /// Common name.
    pub name: String,
    /// Scientific name.
    pub description: String,
    /// Short emoji-prefixed tags.
    pub labels: Vec<String>,
    /// Care aspects.
    pub overview: PlantOverview,
    /// Suggested care schedule.
    pub careplan: PlantCarePlan,
    /// Gallery photo URLs.
    pub images: Vec<String>,
    /// Likely problems, in the order the model listed them.
    pub disease: Vec<PlantDiseaseItem>,
}

/// The eight care aspects shown on the plant overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantOverview {
    /// How much and how often to water.
    pub watering_needs: PlantOverviewItem,
    /// Feeding schedule.
    pub fertilizing: PlantOverviewItem,
    /// Light level.
    pub light_requirement: PlantOverviewItem,
    /// Preferred air humidity.
    pub humidity: PlantOverviewItem,
    /// Comfortable temperatures.
    pub temperature_range: PlantOverviewItem,
    /// Potting mix.
    pub soil_type: PlantOverviewItem,
    /// Drainage needs.
    pub pot_drainage: PlantOverviewItem,
    /// When and how to prune.
    pub pruning_needs: PlantOverviewItem,
}

/// One care aspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantOverviewItem {
    /// Short annotated summary, e.g. `💧 Weekly`.
    pub main_description: String,
    /// What goes wrong when the aspect is neglected.
    pub negative: String,
    /// Grouped tips.
    pub about: Vec<AboutSection>,
}

/// A titled list of tips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    /// Section heading.
    pub title: String,
    /// Tips under the heading.
    pub list: Vec<String>,
}

/// The six scheduled care tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantCarePlan {
    /// Watering.
    pub watering: PlantCarePlanItem,
    /// Fertilizing.
    pub fertilize: PlantCarePlanItem,
    /// Repotting.
    pub repotting: PlantCarePlanItem,
    /// Pruning.
    pub pruning: PlantCarePlanItem,
    /// Misting or humidifying.
    pub humidity: PlantCarePlanItem,
    /// Checking soil moisture.
    pub soilcheck: PlantCarePlanItem,
}

/// Recurrence for one care task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantCarePlanItem {
    /// `Everyday`, `Everyweek`, `Everymonth` or `Custom`.
    pub repeat: String,
    /// Interval used when `repeat` is `Custom`.
    pub custom_repeat: CustomRepeat,
    /// Time of day as `HH:MM:SS`.
    pub time: String,
}

impl Default for PlantCarePlanItem {
    fn default() -> Self {
        Self {
            repeat: DEFAULT_REPEAT.to_string(),
            custom_repeat: CustomRepeat::default(),
            time: DEFAULT_TIME.to_string(),
        }
    }
}

/// Custom recurrence interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRepeat {
    /// Positive number of periods.
    pub value: u32,
    /// Period unit: `day`, `week`, `month` or `year`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for CustomRepeat {
    fn default() -> Self {
        Self { value: DEFAULT_REPEAT_VALUE, kind: DEFAULT_REPEAT_TYPE.to_string() }
    }
}

/// A likely plant problem with its remedy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantDiseaseItem {
    /// Illustrative photo URL.
    pub image: String,
    /// Problem name.
    pub title: String,
    /// Symptoms.
    pub description: String,
    /// Consequences if untreated.
    pub negative: String,
    /// Numbered remedy steps separated by newlines.
    pub fix: String,
}

/// Repeat label used when the model gives none.
pub(crate) const DEFAULT_REPEAT: &str = "Everyday";
/// Custom interval count used when the model gives none.
pub(crate) const DEFAULT_REPEAT_VALUE: u32 = 1;
/// Custom interval unit used when the model gives none.
pub(crate) const DEFAULT_REPEAT_TYPE: &str = "day";
/// Reminder time used when the model gives none.
pub(crate) const DEFAULT_TIME: &str = "09:00:00";
