use serde::{Deserialize, Serialize};
use url::Url;

use super::collection::CollectionDetails;
use super::specs::price_label;
use super::vehicle::VehicleData;
use crate::error::Error;
use crate::locale::Locale;
use crate::{api_base, build_client, lenient, ApiResponse};

/// One collection as it appears in the paginated listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionSummary {
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

impl CollectionSummary {
    /// Fetches the full details behind this listing entry.
    pub async fn fetch_details(&self) -> Result<CollectionDetails, Error> {
        CollectionDetails::fetch(&self.listing_id).await
    }

    /// Card title: resolved make and model.
    pub fn title(&self, locale: Locale) -> String {
        self.data.title(locale)
    }

    /// Cover photo URL, if the vehicle has any photos.
    pub fn primary_image(&self) -> Option<&str> {
        self.data.images.first().map(String::as_str)
    }

    /// `31,500,000 KRW` style price tag; `None` when the price is
    /// missing or zero.
    pub fn price_label(&self) -> Option<String> {
        let specs = &self.data.specs;
        specs
            .price_krw
            .filter(|price| *price > 0)
            .map(|price| price_label(price, specs.currency.as_deref()))
    }
}

/// Listing pagination as reported by the API.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, starting at 1.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Total published collections.
    pub total: u64,
    /// Total pages at this page size.
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination { page: 1, limit: 20, total: 0, total_pages: 1 }
    }
}

/// One page of the public collection listing.
///
/// Use the `CollectionList::fetch` method to fetch a page of published
/// collections.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionList {
    /// Collections on this page.
    #[serde(deserialize_with = "lenient::or_default")]
    pub items: Vec<CollectionSummary>,
    /// Position within the full listing.
    #[serde(deserialize_with = "lenient::or_default")]
    pub pagination: Pagination,
}

impl CollectionList {
    /// Fetches one page of the published collections.
    ///
    /// ```no_run
    /// use std::error::Error;
    /// use aliasauto_catalog::CollectionList;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn Error>> {
    ///     let listing = CollectionList::fetch(1, 20).await?;
    ///     println!("{:#?}", listing);
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch(page: u32, limit: u32) -> Result<Self, Error> {
        let url = Url::parse_with_params(
            &format!("{}/public/collections", api_base()),
            &[("page", page.to_string()), ("limit", limit.to_string())],
        )?;
        tracing::debug!(%url, "fetching collection listing");

        let response = build_client()?.get(url).send().await?;
        let body: ApiResponse<Self> = response.error_for_status()?.json().await?;
        Ok(body.data)
    }
}
