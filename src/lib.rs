//! Fetch and format Alias Auto catalog data.
//!
//! `CollectionList` and `CollectionDetails` can fetch published vehicle
//! collections from the public export API, and `InspectionReport` can
//! fetch a vehicle inspection report. `LocalizedText`, `Description`
//! and `spec_rows` turn the fetched JSON into display strings for any
//! supported `Locale`.

mod collection;
mod error;
mod inspection;
mod lenient;
mod locale;

use std::time::Duration;

use header::{HeaderMap, HeaderValue};
use reqwest::header;
use serde::Deserialize;

pub use collection::{
    spec_rows, CollectionDetails, CollectionList, CollectionSummary, InspectionHistory,
    Pagination, SpecRow, VehicleData, VehicleSpecs, VehicleText,
};
pub use error::Error;
pub use inspection::{Description, InspectionReport};
pub use locale::{Locale, LocalizedText, UnknownLocale};
pub use url::Url;

/// Base URL used when `ALIASAUTO_API_URL` is not set.
const DEFAULT_API_BASE: &str = "https://api.aliasauto.kr/api/v1";

/// Every endpoint wraps its payload in a `data` envelope.
#[derive(Deserialize)]
struct ApiResponse<T> {
    data: T,
}

/// Base URL of the public API.
fn api_base() -> String {
    std::env::var("ALIASAUTO_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Builds the client used for a single API request.
fn build_client() -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .default_headers(build_headers())
        .timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}
