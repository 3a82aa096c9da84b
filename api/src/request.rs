use crate::{
    ApiResponse, Error,
    configuration::Configuration,
    error::ResponseContent,
    query::{QueryParams, path_with_query},
};
use log::{debug, warn};
use serde_json::Value;

/// Issues `GET {base_path}{path}[?query]` with the configuration's headers.
///
/// Non-2xx answers are returned as [`Error::ResponseError`] with the raw body.
pub async fn get<P: QueryParams + ?Sized>(
    configuration: &Configuration,
    path: &str,
    params: Option<&P>,
) -> Result<ApiResponse, Error> {
    let path = path_with_query(path, params);
    debug!("GET {path}");
    let resp = configuration
        .client
        .get(format!("{}{}", configuration.base_path, path))
        .send()
        .await?;
    let status = resp.status();
    let content = resp.text().await?;
    if !status.is_success() {
        warn!("GET {path} failed with {status}");
        return Err(Error::ResponseError(ResponseContent { status, content }));
    }
    let data = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&content)?
    };
    Ok(ApiResponse { status, data })
}

/// [`get`] without a query string.
pub async fn get_path(configuration: &Configuration, path: &str) -> Result<ApiResponse, Error> {
    get::<[(&str, &str)]>(configuration, path, None).await
}
