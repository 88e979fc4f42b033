//! Vehicle specification rows for the detail table.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::vehicle::VehicleText;
use crate::lenient;
use crate::locale::Locale;

/// Flat technical attributes of a vehicle.
///
/// Every field is optional and tolerant of the string/number mixups the
/// back office produces.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleSpecs {
    /// Model year.
    #[serde(deserialize_with = "lenient::u64_opt")]
    pub year: Option<u64>,
    /// Odometer reading in kilometers.
    #[serde(deserialize_with = "lenient::u64_opt")]
    pub mileage_km: Option<u64>,
    /// Fuel type code: `gasoline`, `diesel`, `hybrid` or `electric`.
    #[serde(deserialize_with = "lenient::string_opt")]
    pub fuel_type: Option<String>,
    /// Transmission code: `automatic`, `manual`, `cvt` or `dct`.
    #[serde(deserialize_with = "lenient::string_opt")]
    pub transmission: Option<String>,
    /// Engine displacement in cubic centimeters.
    #[serde(deserialize_with = "lenient::u64_opt")]
    pub engine_displacement_cc: Option<u64>,
    /// Asking price.
    #[serde(rename = "priceKRW", deserialize_with = "lenient::u64_opt")]
    pub price_krw: Option<u64>,
    /// Currency code of the price, `KRW` when absent.
    #[serde(deserialize_with = "lenient::string_opt")]
    pub currency: Option<String>,
}

/// One row of the specs table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    /// Table label.
    pub label: &'static str,
    /// Formatted display value.
    pub value: String,
}

static FUEL_TYPE_LABELS: LazyLock<HashMap<Locale, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                Locale::En,
                HashMap::from([
                    ("gasoline", "Gasoline"),
                    ("diesel", "Diesel"),
                    ("hybrid", "Hybrid"),
                    ("electric", "Electric"),
                ]),
            ),
            (
                Locale::Ru,
                HashMap::from([
                    ("gasoline", "Бензин"),
                    ("diesel", "Дизель"),
                    ("hybrid", "Гибрид"),
                    ("electric", "Электро"),
                ]),
            ),
            (
                Locale::Uz,
                HashMap::from([
                    ("gasoline", "Benzin"),
                    ("diesel", "Dizel"),
                    ("hybrid", "Gibrid"),
                    ("electric", "Elektrik"),
                ]),
            ),
            (
                Locale::Kz,
                HashMap::from([
                    ("gasoline", "Бензин"),
                    ("diesel", "Дизель"),
                    ("hybrid", "Гибрид"),
                    ("electric", "Электр"),
                ]),
            ),
            (
                Locale::Ko,
                HashMap::from([
                    ("gasoline", "가솔린"),
                    ("diesel", "디젤"),
                    ("hybrid", "하이브리드"),
                    ("electric", "전기"),
                ]),
            ),
        ])
    });

static TRANSMISSION_LABELS: LazyLock<HashMap<Locale, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                Locale::En,
                HashMap::from([
                    ("automatic", "Automatic"),
                    ("manual", "Manual"),
                    ("cvt", "CVT"),
                    ("dct", "Dual Clutch"),
                ]),
            ),
            (
                Locale::Ru,
                HashMap::from([
                    ("automatic", "Автомат"),
                    ("manual", "Механика"),
                    ("cvt", "Вариатор"),
                    ("dct", "Робот"),
                ]),
            ),
            (
                Locale::Uz,
                HashMap::from([
                    ("automatic", "Avtomat"),
                    ("manual", "Mexanika"),
                    ("cvt", "Variator"),
                    ("dct", "Robot"),
                ]),
            ),
            (
                Locale::Kz,
                HashMap::from([
                    ("automatic", "Автомат"),
                    ("manual", "Механика"),
                    ("cvt", "Вариатор"),
                    ("dct", "Робот"),
                ]),
            ),
            (
                Locale::Ko,
                HashMap::from([
                    ("automatic", "자동"),
                    ("manual", "수동"),
                    ("cvt", "CVT"),
                    ("dct", "듀얼 클러치"),
                ]),
            ),
        ])
    });

/// Builds the specs table rows for one vehicle.
///
/// Row order is fixed regardless of which fields are present; rows
/// whose value resolves to nothing are omitted rather than rendered
/// blank.
pub fn spec_rows(specs: &VehicleSpecs, text: &VehicleText, locale: Locale) -> Vec<SpecRow> {
    let mut rows = Vec::new();
    let mut push = |label: &'static str, value: String| {
        if !value.is_empty() {
            rows.push(SpecRow { label, value });
        }
    };

    push("Make", text.make.get(locale));
    push("Model", text.model.get(locale));
    push("Trim", text.trim.get(locale));
    if let Some(year) = specs.year {
        push("Year", year.to_string());
    }
    if let Some(mileage) = specs.mileage_km {
        push("Mileage", format!("{} km", group_thousands(mileage)));
    }
    if let Some(fuel_type) = &specs.fuel_type {
        push("Fuel Type", coded_label(&FUEL_TYPE_LABELS, locale, fuel_type));
    }
    if let Some(transmission) = &specs.transmission {
        push(
            "Transmission",
            coded_label(&TRANSMISSION_LABELS, locale, transmission),
        );
    }
    if let Some(displacement) = specs.engine_displacement_cc {
        push("Engine", format!("{displacement} cc"));
    }
    push("Exterior Color", text.color.get(locale));
    push("Interior Color", text.interior_color.get(locale));
    if let Some(price) = specs.price_krw.filter(|price| *price > 0) {
        push("Price", price_label(price, specs.currency.as_deref()));
    }
    rows
}

/// `23,900,000 KRW` style price text.
pub(crate) fn price_label(price: u64, currency: Option<&str>) -> String {
    format!("{} {}", group_thousands(price), currency.unwrap_or("KRW"))
}

/// Label for `code` in `locale`; unknown codes pass through unchanged.
fn coded_label(
    table: &HashMap<Locale, HashMap<&'static str, &'static str>>,
    locale: Locale,
    code: &str,
) -> String {
    table
        .get(&locale)
        .and_then(|labels| labels.get(code))
        .map_or_else(|| code.to_string(), |label| (*label).to_string())
}

/// Groups digits in threes with commas.
fn group_thousands(number: u64) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn specs(value: serde_json::Value) -> VehicleSpecs {
        serde_json::from_value(value).unwrap()
    }

    fn text(value: serde_json::Value) -> VehicleText {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn present_fields_only_in_fixed_order() {
        let rows = spec_rows(
            &specs(json!({"year": 2020, "fuelType": "diesel"})),
            &text(json!({})),
            Locale::En,
        );
        assert_eq!(
            rows,
            [
                SpecRow { label: "Year", value: "2020".into() },
                SpecRow { label: "Fuel Type", value: "Diesel".into() },
            ]
        );
    }

    #[test]
    fn full_vehicle_keeps_the_table_order() {
        let rows = spec_rows(
            &specs(json!({
                "year": 2021,
                "mileageKm": 48210,
                "fuelType": "hybrid",
                "transmission": "cvt",
                "engineDisplacementCc": 1598,
                "priceKRW": 23900000,
                "currency": "USD"
            })),
            &text(json!({
                "make": {"en": "Hyundai"},
                "model": {"en": "Santa Fe"},
                "trim": {"en": "Calligraphy"},
                "color": {"en": "White"},
                "interiorColor": {"en": "Black"}
            })),
            Locale::En,
        );
        let labels: Vec<_> = rows.iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            [
                "Make",
                "Model",
                "Trim",
                "Year",
                "Mileage",
                "Fuel Type",
                "Transmission",
                "Engine",
                "Exterior Color",
                "Interior Color",
                "Price",
            ]
        );
        assert_eq!(rows[4].value, "48,210 km");
        assert_eq!(rows[7].value, "1598 cc");
        assert_eq!(rows[10].value, "23,900,000 USD");
    }

    #[test]
    fn unknown_codes_pass_through_verbatim() {
        let rows = spec_rows(
            &specs(json!({"fuelType": "unknownCode", "transmission": "awd"})),
            &text(json!({})),
            Locale::En,
        );
        assert_eq!(
            rows,
            [
                SpecRow { label: "Fuel Type", value: "unknownCode".into() },
                SpecRow { label: "Transmission", value: "awd".into() },
            ]
        );
    }

    #[rstest]
    #[case(Locale::Ru, "Дизель", "Автомат")]
    #[case(Locale::Uz, "Dizel", "Avtomat")]
    #[case(Locale::Kz, "Дизель", "Автомат")]
    #[case(Locale::Ko, "디젤", "자동")]
    fn known_codes_use_the_locale_dictionary(
        #[case] locale: Locale,
        #[case] fuel: &str,
        #[case] transmission: &str,
    ) {
        let rows = spec_rows(
            &specs(json!({"fuelType": "diesel", "transmission": "automatic"})),
            &text(json!({})),
            locale,
        );
        assert_eq!(rows[0].value, fuel);
        assert_eq!(rows[1].value, transmission);
    }

    #[test]
    fn zero_price_is_omitted_and_currency_defaults_to_krw() {
        let no_rows = spec_rows(&specs(json!({"priceKRW": 0})), &text(json!({})), Locale::En);
        assert!(no_rows.is_empty());

        let rows = spec_rows(&specs(json!({"priceKRW": 31500000})), &text(json!({})), Locale::En);
        assert_eq!(rows, [SpecRow { label: "Price", value: "31,500,000 KRW".into() }]);
    }

    #[test]
    fn zero_mileage_still_renders() {
        let rows = spec_rows(&specs(json!({"mileageKm": 0})), &text(json!({})), Locale::En);
        assert_eq!(rows, [SpecRow { label: "Mileage", value: "0 km".into() }]);
    }

    #[test]
    fn empty_text_resolutions_are_omitted() {
        let rows = spec_rows(
            &specs(json!({})),
            &text(json!({"make": {"en": "Kia"}, "color": {}})),
            Locale::En,
        );
        assert_eq!(rows, [SpecRow { label: "Make", value: "Kia".into() }]);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(950, "950")]
    #[case(1000, "1,000")]
    #[case(48210, "48,210")]
    #[case(123456789, "123,456,789")]
    fn digits_group_in_threes(#[case] number: u64, #[case] expected: &str) {
        assert_eq!(group_thousands(number), expected);
    }
}
