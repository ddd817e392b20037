pub(crate) mod contests;
pub(crate) mod reference;
pub(crate) mod seasons;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{GpError, Result};

/// Fetch `url` and return the response body as text.
pub(crate) async fn get_text(request: reqwest::RequestBuilder, url: &str) -> Result<String> {
    debug!(url, "fetching");

    let response = request.send().await.map_err(|e| GpError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(GpError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| GpError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Query a store collection. `query` is the PostgREST query string, without
/// the leading `?`.
pub(crate) async fn get_rows<T: DeserializeOwned>(
    client: &reqwest::Client,
    config: &StoreConfig,
    collection: &str,
    query: &str,
) -> Result<Vec<T>> {
    let url = config.collection_url(collection, query);
    let request = client
        .get(&url)
        .header("apikey", &config.api_key)
        .header("Authorization", format!("Bearer {}", config.api_key));
    let body = get_text(request, &url).await?;
    decode(&body, &url)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str, url: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| GpError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
