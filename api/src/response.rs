use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status and JSON body of a successful exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T = Value> {
    pub status: StatusCode,
    pub data: T,
}

impl ApiResponse<Value> {
    /// Reads the opaque body as `T`.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, serde_json::Error> {
        Ok(ApiResponse {
            status: self.status,
            data: serde_json::from_value(self.data)?,
        })
    }
}
