//! Maps a parsed identification reply onto [`PlantInformation`].
//!
//! The model does not always honour the requested key spelling, so every
//! field is looked up through the alias table below. Anything absent falls
//! back to a fixed default; assembly never fails.

use serde_json::Value;

use crate::parse::RawPlant;
use crate::plant::{
    AboutSection, CustomRepeat, PlantCarePlan, PlantCarePlanItem, PlantDiseaseItem,
    PlantInformation, PlantOverview, PlantOverviewItem, DEFAULT_REPEAT, DEFAULT_REPEAT_TYPE,
    DEFAULT_REPEAT_VALUE, DEFAULT_TIME,
};

/// Canonical fields and the reply keys accepted for them, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Labels,
    Overview,
    Careplan,
    WateringNeeds,
    Fertilizing,
    LightRequirement,
    OverviewHumidity,
    TemperatureRange,
    SoilType,
    PotDrainage,
    PruningNeeds,
    MainDescription,
    Negative,
    About,
    Title,
    List,
    Watering,
    Fertilize,
    Repotting,
    Pruning,
    CareHumidity,
    Soilcheck,
    Repeat,
    CustomRepeat,
    RepeatValue,
    RepeatType,
    Time,
    DiseaseTitle,
    DiseaseDescription,
    DiseaseNegative,
    DiseaseFix,
}

impl Field {
    /// Keys accepted for this field, most preferred first.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Description => &["description", "Description"],
            Self::Labels => &["labels", "Labels"],
            Self::Overview => &["overview", "Overview"],
            Self::Careplan => &["careplan", "Careplan", "carePlan", "CarePlan"],
            Self::WateringNeeds => &["WateringNeeds", "wateringNeeds", "wateringneeds"],
            Self::Fertilizing => &["Fertilizing", "fertilizing"],
            Self::LightRequirement => &["LightRequirement", "lightRequirement", "lightrequirement"],
            Self::OverviewHumidity | Self::CareHumidity => &["Humidity", "humidity"],
            Self::TemperatureRange => &["TemperatureRange", "temperatureRange", "temperaturerange"],
            Self::SoilType => &["SoilType", "soilType", "soiltype"],
            Self::PotDrainage => &["PotDrainage", "potDrainage", "potdrainage"],
            Self::PruningNeeds => &["PruningNeeds", "pruningNeeds", "pruningneeds"],
            Self::MainDescription => &["mainDescription", "MainDescription", "maindescription"],
            Self::Negative => &["negative", "Negative", "nagitive"],
            Self::About => &["about", "About"],
            Self::Title | Self::DiseaseTitle => &["title", "Title"],
            Self::List => &["list", "List"],
            Self::Watering => &["Watering", "watering"],
            Self::Fertilize => &["Fertilize", "fertilize"],
            Self::Repotting => &["Repotting", "repotting"],
            Self::Pruning => &["Pruning", "pruning"],
            Self::Soilcheck => &["Soilcheck", "soilcheck", "SoilCheck", "soilCheck"],
            Self::Repeat => &["Repeat", "repeat"],
            Self::CustomRepeat => &["CustomRepeat", "customRepeat"],
            Self::RepeatValue => &["Value", "value"],
            Self::RepeatType => &["Type", "type"],
            Self::Time => &["Time", "time"],
            Self::DiseaseDescription => &["description", "Description"],
            Self::DiseaseNegative => &["nagitive", "negative", "Negative"],
            Self::DiseaseFix => &["fix", "Fix"],
        }
    }
}

/// First present, non-null value under any alias of `field`.
fn lookup(object: &Value, field: Field) -> Option<&Value> {
    field.aliases().iter().find_map(|key| object.get(key).filter(|v| !v.is_null()))
}

/// Non-empty string under `field`, or the empty string.
fn text(object: &Value, field: Field) -> String {
    text_or(object, field, "")
}

fn text_or(object: &Value, field: Field, default: &str) -> String {
    field
        .aliases()
        .iter()
        .find_map(|key| object.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()))
        .unwrap_or(default)
        .to_string()
}

/// String entries of the array under `field`; other entries are dropped.
fn strings(object: &Value, field: Field) -> Vec<String> {
    lookup(object, field)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// Positive integer under `field`, accepting numeric strings and whole floats.
fn positive_integer(object: &Value, field: Field) -> Option<u32> {
    let value = lookup(object, field)?;
    let number = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64().filter(|f| f.is_finite() && *f >= 1.0).map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(number).ok().filter(|n| *n > 0)
}

fn overview_item(data: Option<&Value>) -> PlantOverviewItem {
    let Some(data) = data else {
        return PlantOverviewItem::default();
    };
    let about = lookup(data, Field::About)
        .and_then(Value::as_array)
        .map(|sections| {
            sections
                .iter()
                .map(|section| AboutSection {
                    title: text(section, Field::Title),
                    list: strings(section, Field::List),
                })
                .collect()
        })
        .unwrap_or_default();

    PlantOverviewItem {
        main_description: text(data, Field::MainDescription),
        negative: text(data, Field::Negative),
        about,
    }
}

fn care_plan_item(data: Option<&Value>) -> PlantCarePlanItem {
    let Some(data) = data else {
        return PlantCarePlanItem::default();
    };
    let custom = lookup(data, Field::CustomRepeat);

    PlantCarePlanItem {
        repeat: text_or(data, Field::Repeat, DEFAULT_REPEAT),
        custom_repeat: CustomRepeat {
            value: custom
                .and_then(|c| positive_integer(c, Field::RepeatValue))
                .unwrap_or(DEFAULT_REPEAT_VALUE),
            kind: custom.map_or_else(
                || DEFAULT_REPEAT_TYPE.to_string(),
                |c| text_or(c, Field::RepeatType, DEFAULT_REPEAT_TYPE),
            ),
        },
        time: text_or(data, Field::Time, DEFAULT_TIME),
    }
}

fn overview(data: Option<&Value>) -> PlantOverview {
    let get = |field| data.and_then(|d| lookup(d, field));
    PlantOverview {
        watering_needs: overview_item(get(Field::WateringNeeds)),
        fertilizing: overview_item(get(Field::Fertilizing)),
        light_requirement: overview_item(get(Field::LightRequirement)),
        humidity: overview_item(get(Field::OverviewHumidity)),
        temperature_range: overview_item(get(Field::TemperatureRange)),
        soil_type: overview_item(get(Field::SoilType)),
        pot_drainage: overview_item(get(Field::PotDrainage)),
        pruning_needs: overview_item(get(Field::PruningNeeds)),
    }
}

fn care_plan(data: Option<&Value>) -> PlantCarePlan {
    let get = |field| data.and_then(|d| lookup(d, field));
    PlantCarePlan {
        watering: care_plan_item(get(Field::Watering)),
        fertilize: care_plan_item(get(Field::Fertilize)),
        repotting: care_plan_item(get(Field::Repotting)),
        pruning: care_plan_item(get(Field::Pruning)),
        humidity: care_plan_item(get(Field::CareHumidity)),
        soilcheck: care_plan_item(get(Field::Soilcheck)),
    }
}

/// Title of a disease entry, used to pick its illustration.
#[must_use]
pub fn disease_title(entry: &Value) -> String {
    text(entry, Field::DiseaseTitle)
}

/// Build the final record from a validated reply and its resolved photos.
///
/// `disease_images[i]` illustrates the `i`-th disease entry; a missing
/// entry leaves that image empty.
#[must_use]
pub fn assemble(raw: &RawPlant, images: Vec<String>, disease_images: &[String]) -> PlantInformation {
    let root = raw.value();

    let disease = raw
        .diseases()
        .iter()
        .enumerate()
        .map(|(i, entry)| PlantDiseaseItem {
            image: disease_images.get(i).cloned().unwrap_or_default(),
            title: disease_title(entry),
            description: text(entry, Field::DiseaseDescription),
            negative: text(entry, Field::DiseaseNegative),
            fix: text(entry, Field::DiseaseFix),
        })
        .collect();

    PlantInformation {
        name: raw.name().to_string(),
        description: text(root, Field::Description),
        labels: strings(root, Field::Labels),
        overview: overview(lookup(root, Field::Overview)),
        careplan: care_plan(lookup(root, Field::Careplan)),
        images,
        disease,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::parse::parse_identification;

    fn raw(value: &Value) -> RawPlant {
        parse_identification(&value.to_string()).unwrap()
    }

    fn full_reply() -> Value {
        json!({
            "name": "Monstera",
            "description": "Monstera deliciosa",
            "labels": ["🌿 Tropical", 7, "🐾 Pet-toxic"],
            "overview": {
                "WateringNeeds": {
                    "mainDescription": "💧 Weekly",
                    "negative": "Root rot when soggy.",
                    "about": [{"title": "Check soil", "list": ["Finger test", "Use a meter"]}]
                },
                "lightRequirement": {"MainDescription": "☀️ Bright indirect", "nagitive": "Scorch"}
            },
            "careplan": {
                "Watering": {"Repeat": "Everyweek", "CustomRepeat": {"Value": 2, "Type": "week"}, "Time": "07:30:00"},
                "fertilize": {"repeat": "Custom", "customRepeat": {"value": "3", "type": "month"}},
                "Pruning": {"Repeat": "", "CustomRepeat": {"Value": 0}}
            },
            "disease": [
                {"title": "Yellow Leaves", "description": "Old leaves fade.", "nagitive": "Spreads", "fix": "1. Water less"},
                {"title": "Root Rot", "negative": "Plant collapses"}
            ]
        })
    }

    #[test]
    fn maps_primary_keys() {
        let info = assemble(&raw(&full_reply()), vec!["a".into()], &["d1".into(), "d2".into()]);
        assert_eq!(info.name, "Monstera");
        assert_eq!(info.description, "Monstera deliciosa");
        assert_eq!(info.labels, vec!["🌿 Tropical", "🐾 Pet-toxic"]);
        assert_eq!(info.overview.watering_needs.main_description, "💧 Weekly");
        assert_eq!(info.overview.watering_needs.about[0].list, vec!["Finger test", "Use a meter"]);
        assert_eq!(info.careplan.watering.custom_repeat, CustomRepeat { value: 2, kind: "week".into() });
        assert_eq!(info.careplan.watering.time, "07:30:00");
        assert_eq!(info.images, vec!["a"]);
    }

    #[test]
    fn accepts_alias_spellings() {
        let info = assemble(&raw(&full_reply()), vec![], &[]);
        assert_eq!(info.overview.light_requirement.main_description, "☀️ Bright indirect");
        assert_eq!(info.overview.light_requirement.negative, "Scorch");
        assert_eq!(info.careplan.fertilize.repeat, "Custom");
        assert_eq!(info.careplan.fertilize.custom_repeat.value, 3);
        assert_eq!(info.disease[0].negative, "Spreads");
        assert_eq!(info.disease[1].negative, "Plant collapses");
    }

    #[test]
    fn absent_fields_take_defaults() {
        let info = assemble(&raw(&full_reply()), vec![], &[]);
        assert_eq!(info.overview.humidity, PlantOverviewItem::default());
        assert_eq!(info.careplan.repotting, PlantCarePlanItem::default());
        assert_eq!(info.careplan.pruning.repeat, "Everyday");
        assert_eq!(info.careplan.pruning.custom_repeat, CustomRepeat { value: 1, kind: "day".into() });
        assert_eq!(info.careplan.pruning.time, "09:00:00");
        assert_eq!(info.careplan.fertilize.time, "09:00:00");
        assert_eq!(info.disease[1].description, "");
        assert_eq!(info.disease[1].image, "");
    }

    #[test]
    fn non_object_sections_never_fail() {
        let reply = json!({"name": "Fern", "overview": "n/a", "careplan": [], "disease": [42, null]});
        let info = assemble(&raw(&reply), vec![], &[]);
        assert_eq!(info.overview, PlantOverview::default());
        assert_eq!(info.careplan, PlantCarePlan::default());
        assert_eq!(info.disease.len(), 2);
        assert_eq!(info.disease[0], PlantDiseaseItem::default());
        assert!(info.labels.is_empty());
    }

    #[test]
    fn assembly_is_idempotent() {
        let raw = raw(&full_reply());
        let images = vec!["g1".to_string(), "g2".to_string()];
        let disease_images = ["d1".to_string(), "d2".to_string()];
        let first = assemble(&raw, images.clone(), &disease_images);
        let second = assemble(&raw, images, &disease_images);
        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
    }

    #[test]
    fn disease_negative_prefers_misspelled_key() {
        let entry = json!({"nagitive": "first", "negative": "second"});
        assert_eq!(text(&entry, Field::DiseaseNegative), "first");
        assert_eq!(disease_title(&json!({"Title": "Mildew"})), "Mildew");
    }
}
