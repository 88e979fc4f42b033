use thiserror::Error;

/// Errors returned by the fetch operations.
///
/// Formatting never fails: malformed payload fields degrade to empty
/// strings or omitted rows instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested id has no published resource behind it.
    #[error("no resource found for id {id}")]
    NotFound {
        /// The id that was requested.
        id: String,
    },
    /// Transport failure, non-success HTTP status, or an unreadable body.
    #[error("api request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The configured base URL could not be combined into an endpoint.
    #[error("invalid api endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
