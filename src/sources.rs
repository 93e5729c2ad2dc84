//! Network data retrieval: the one-shot GitHub repository search.

use std::sync::LazyLock;

use serde_json::Value;

use crate::state::{RepoItem, UNDEFINED_LANGUAGE};
use crate::util::{opt_s, s, u64_of};

/// Boxed error result used at the fetch boundary.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Search endpoint for repositories.
const SEARCH_ENDPOINT: &str = "https://api.github.com/search/repositories";

/// Shared HTTP client for the process.
///
/// GitHub rejects requests without a User-Agent, so one is always set.
/// Connection pooling is enabled by default in `reqwest::Client`.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(format!("Repotrend/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
});

/// What: Build the search URL for repositories created after `since`.
///
/// Inputs:
/// - `since`: Lower creation-date bound, `YYYY-MM-DD`
///
/// Output:
/// - Full query URL: `q=created:>{since}`, sorted by stars descending.
///   Only the first page of results is ever requested.
pub fn search_url(since: &str) -> String {
    format!("{SEARCH_ENDPOINT}?q=created:>{since}&sort=stars&order=desc")
}

/// What: Parse a search response body into row items.
///
/// Inputs:
/// - `body`: Decoded JSON response; expected shape is an object with an
///   `items` array
///
/// Output:
/// - One [`RepoItem`] per well-formed item: `favorite` forced to `false`,
///   a null or absent `language` normalized to the `Undefined` category,
///   a null `description` normalized to empty. Items without an `id` are
///   skipped with a warning.
pub fn parse_items(body: &Value) -> Vec<RepoItem> {
    let Some(arr) = body.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut items = Vec::with_capacity(arr.len());
    for obj in arr {
        let Some(id) = u64_of(obj, "id") else {
            tracing::warn!("search item without id skipped");
            continue;
        };
        items.push(RepoItem {
            id,
            name: s(obj, "name"),
            description: s(obj, "description"),
            html_url: s(obj, "html_url"),
            stargazers_count: u64_of(obj, "stargazers_count").unwrap_or(0),
            language: opt_s(obj, "language").unwrap_or_else(|| UNDEFINED_LANGUAGE.to_string()),
            favorite: false,
        });
    }
    items
}

/// What: Fetch repositories created after `since`, newest search ranking
/// first.
///
/// Inputs:
/// - `since`: Lower creation-date bound, `YYYY-MM-DD`
///
/// Output:
/// - Parsed items on success; any failure (connection, non-2xx status,
///   unparseable body) surfaces as a single error for the caller to
///   record. Issued once per run; no retry and no timeout.
pub async fn fetch_created_since(since: &str) -> Result<Vec<RepoItem>> {
    let url = search_url(since);
    tracing::info!(%url, "fetching trending repositories");
    let resp = HTTP_CLIENT.get(&url).send().await?.error_for_status()?;
    let body: Value = resp.json().await?;
    Ok(parse_items(&body))
}
