use chrono::DateTime;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use super::description::Description;
use crate::error::Error;
use crate::{api_base, build_client, lenient, ApiResponse};

/// A vehicle inspection report.
///
/// Use the `InspectionReport::fetch` method to fetch a report by the
/// number printed on the customer's copy.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectionReport {
    /// Public report number.
    #[serde(deserialize_with = "lenient::string")]
    pub inspection_id: String,
    /// Report title.
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    /// Inspector who performed the inspection.
    #[serde(deserialize_with = "lenient::string")]
    pub inspector_name: String,
    /// Customer the report was issued to.
    #[serde(deserialize_with = "lenient::string")]
    pub customer_name: String,
    /// RFC 3339 timestamp of the inspection.
    #[serde(deserialize_with = "lenient::string_opt")]
    pub created_at: Option<String>,
    /// Report photo URLs.
    #[serde(deserialize_with = "lenient::string_vec")]
    pub images: Vec<String>,
    /// Rich-text findings; flatten with `description_text`.
    pub description: Description,
}

impl InspectionReport {
    /// Fetches an inspection report by id.
    ///
    /// ```no_run
    /// use std::error::Error;
    /// use aliasauto_catalog::InspectionReport;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn Error>> {
    ///     let report = InspectionReport::fetch("INS-2024-0042").await?;
    ///     println!("{}", report.description_text());
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch(id: &str) -> Result<Self, Error> {
        let url = Url::parse(&format!("{}/public/inspections/{id}", api_base()))?;
        tracing::debug!(%url, "fetching inspection report");

        let response = build_client()?.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(id, "inspection report not found");
            return Err(Error::NotFound { id: id.to_string() });
        }
        let body: ApiResponse<Self> = response.error_for_status()?.json().await?;
        Ok(body.data)
    }

    /// Findings flattened into plain text.
    pub fn description_text(&self) -> String {
        self.description.to_plain_text()
    }

    /// Inspection date in long form, e.g. `January 5, 2026`. `None`
    /// when the timestamp is absent or unparseable.
    pub fn inspection_date(&self) -> Option<String> {
        let created_at = self.created_at.as_deref()?;
        let date = DateTime::parse_from_rfc3339(created_at).ok()?;
        Some(date.format("%B %-d, %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn report(value: serde_json::Value) -> InspectionReport {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn inspection_date_renders_in_long_form() {
        let parsed = report(json!({"createdAt": "2026-01-05T09:30:00Z"}));
        assert_eq!(parsed.inspection_date().as_deref(), Some("January 5, 2026"));

        let parsed = report(json!({"createdAt": "2024-11-23T18:00:00+09:00"}));
        assert_eq!(parsed.inspection_date().as_deref(), Some("November 23, 2024"));
    }

    #[test]
    fn unusable_timestamps_give_no_date() {
        assert_eq!(report(json!({})).inspection_date(), None);
        assert_eq!(report(json!({"createdAt": "yesterday"})).inspection_date(), None);
        assert_eq!(report(json!({"createdAt": 1735689600})).inspection_date(), None);
    }

    #[test]
    fn report_numbers_coerce_to_strings() {
        assert_eq!(report(json!({"inspectionId": 20240042})).inspection_id, "20240042");
        assert_eq!(report(json!({"inspectionId": "INS-42"})).inspection_id, "INS-42");
        assert_eq!(report(json!({})).inspection_id, "");
    }
}
