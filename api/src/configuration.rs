use crate::{ALCHEMY_API_URL, Error};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

pub const API_TOKEN_HEADER: &str = "x-api-token";
pub const EMAIL_HEADER: &str = "x-email";

/// Connection settings shared by every resource api of one client.
///
/// Credentials are baked into the default headers of the owned
/// [`reqwest::Client`], so two configurations never see each other's
/// credentials.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub base_path: String,
    pub client: reqwest::Client,
    email: String,
}

impl Configuration {
    pub fn new(email: &str, api_token: &str) -> Result<Self, Error> {
        ConfigurationBuilder::new(email, api_token).build()
    }

    pub fn builder(email: &str, api_token: &str) -> ConfigurationBuilder {
        ConfigurationBuilder::new(email, api_token)
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    base_path: String,
    email: String,
    api_token: String,
    timeout: Option<Duration>,
}

impl ConfigurationBuilder {
    fn new(email: &str, api_token: &str) -> Self {
        Self {
            base_path: ALCHEMY_API_URL.to_owned(),
            email: email.to_owned(),
            api_token: api_token.to_owned(),
            timeout: None,
        }
    }

    pub fn base_path(mut self, base_path: &str) -> Self {
        self.base_path = base_path.trim_end_matches('/').to_owned();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Configuration, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_TOKEN_HEADER),
            header_value(API_TOKEN_HEADER, &self.api_token)?,
        );
        headers.insert(
            HeaderName::from_static(EMAIL_HEADER),
            header_value(EMAIL_HEADER, &self.email)?,
        );
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Configuration {
            base_path: self.base_path,
            client: builder.build()?,
            email: self.email,
        })
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, Error> {
    let mut value =
        HeaderValue::from_str(value).map_err(|source| Error::InvalidHeader { name, source })?;
    if name == API_TOKEN_HEADER {
        value.set_sensitive(true);
    }
    Ok(value)
}
