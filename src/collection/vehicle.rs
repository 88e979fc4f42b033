use serde::{Deserialize, Serialize};

use super::specs::VehicleSpecs;
use crate::lenient;
use crate::locale::{Locale, LocalizedText};

/// Everything the back office publishes about a single vehicle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleData {
    /// Localized naming and free-text fields.
    #[serde(deserialize_with = "lenient::or_default")]
    pub text: VehicleText,
    /// Flat technical attributes.
    #[serde(deserialize_with = "lenient::or_default")]
    pub specs: VehicleSpecs,
    /// Photo URLs; the first one is the cover shot.
    #[serde(deserialize_with = "lenient::string_vec")]
    pub images: Vec<String>,
    /// Extra equipment, one localized entry per option.
    #[serde(deserialize_with = "lenient::or_default")]
    pub additional_options: Vec<LocalizedText>,
    /// Accident and servicing record.
    #[serde(deserialize_with = "lenient::or_default")]
    pub inspection_history: InspectionHistory,
}

impl VehicleData {
    /// Display title of the vehicle: resolved make and model, joined
    /// with a space. Empty components are skipped.
    pub fn title(&self, locale: Locale) -> String {
        [self.text.make.get(locale), self.text.model.get(locale)]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolved additional options with empty entries dropped.
    pub fn options(&self, locale: Locale) -> Vec<String> {
        self.additional_options
            .iter()
            .map(|option| option.get(locale))
            .filter(|option| !option.is_empty())
            .collect()
    }
}

/// Localized naming fields of a vehicle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleText {
    /// Manufacturer name.
    pub make: LocalizedText,
    /// Model name.
    pub model: LocalizedText,
    /// Trim level.
    pub trim: LocalizedText,
    /// Exterior color.
    pub color: LocalizedText,
    /// Interior color.
    pub interior_color: LocalizedText,
    /// Free-text sales description.
    pub description: LocalizedText,
}

/// Accident and servicing record shown on the detail page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectionHistory {
    /// Whether the vehicle has any recorded accidents.
    #[serde(deserialize_with = "lenient::truthy")]
    pub accidents: bool,
    /// Servicing record text.
    pub maintenance_history: LocalizedText,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn title_skips_empty_components() {
        let data: VehicleData = serde_json::from_value(json!({
            "text": {"make": {"en": "Hyundai"}, "model": {}}
        }))
        .unwrap();
        assert_eq!(data.title(Locale::En), "Hyundai");
        assert_eq!(VehicleData::default().title(Locale::En), "");
    }

    #[test]
    fn options_drop_unresolvable_entries() {
        let data: VehicleData = serde_json::from_value(json!({
            "additionalOptions": [{"en": "Sunroof"}, "Heated seats", {}, 42]
        }))
        .unwrap();
        assert_eq!(data.options(Locale::En), ["Sunroof", "Heated seats"]);
    }
}
