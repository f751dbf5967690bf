use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use scoreboard_app::config::StoreConfig;
use scoreboard_types::errors::{ApplicationError, StoreError};

use crate::repository::RestLeaderboardRepository;

/// Builds the store client from its credentials.
///
/// Nothing is sent over the wire here: a wrong URL or key only shows up
/// when the first query fails.
pub fn connect_store(config: &StoreConfig) -> Result<RestLeaderboardRepository, ApplicationError> {
    let mut headers = HeaderMap::new();
    headers.insert("apikey", sensitive_header(&config.key)?);
    headers.insert(
        AUTHORIZATION,
        sensitive_header(&format!("Bearer {}", config.key))?,
    );

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(StoreError::from)?;

    let rows_url = format!(
        "{}/rest/v1/{}",
        config.url.trim_end_matches('/'),
        config.table
    );
    tracing::debug!("Store client ready for {}", rows_url);

    Ok(RestLeaderboardRepository::new(client, rows_url))
}

fn sensitive_header(value: &str) -> Result<HeaderValue, ApplicationError> {
    let mut header = HeaderValue::from_str(value).map_err(|e| {
        ApplicationError::Infrastructure(format!("Invalid store key: {e}"))
    })?;
    header.set_sensitive(true);
    Ok(header)
}
