use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use super::specs::{spec_rows, SpecRow};
use super::vehicle::VehicleData;
use crate::error::Error;
use crate::locale::Locale;
use crate::{api_base, build_client, lenient, ApiResponse};

/// A published vehicle collection.
///
/// Use the `CollectionDetails::fetch` method to fetch one collection by
/// its public listing id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionDetails {
    /// Internal numeric id.
    #[serde(deserialize_with = "lenient::u64_opt")]
    pub id: Option<u64>,
    /// Public listing id used in page URLs.
    #[serde(deserialize_with = "lenient::string")]
    pub listing_id: String,
    /// Vehicle payload.
    #[serde(deserialize_with = "lenient::or_default")]
    pub data: VehicleData,
}

impl CollectionDetails {
    /// Fetches one collection by listing id.
    ///
    /// ```no_run
    /// use std::error::Error;
    /// use aliasauto_catalog::{CollectionDetails, Locale};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn Error>> {
    ///     let details = CollectionDetails::fetch("AA-2024-0117").await?;
    ///     println!("{}", details.title(Locale::En));
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch(listing_id: &str) -> Result<Self, Error> {
        let url = Url::parse(&format!("{}/public/collections/{listing_id}", api_base()))?;
        tracing::debug!(%url, "fetching collection details");

        let response = build_client()?.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(listing_id, "collection not found");
            return Err(Error::NotFound { id: listing_id.to_string() });
        }
        let body: ApiResponse<Self> = response.error_for_status()?.json().await?;
        Ok(body.data)
    }

    /// Display title: resolved make and model.
    pub fn title(&self, locale: Locale) -> String {
        self.data.title(locale)
    }

    /// Resolved sales description, empty when none was published.
    pub fn description(&self, locale: Locale) -> String {
        self.data.text.description.get(locale)
    }

    /// Resolved additional options with empty entries dropped.
    pub fn options(&self, locale: Locale) -> Vec<String> {
        self.data.options(locale)
    }

    /// Specs table rows for the detail page.
    pub fn spec_rows(&self, locale: Locale) -> Vec<SpecRow> {
        spec_rows(&self.data.specs, &self.data.text, locale)
    }
}
