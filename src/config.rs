use crate::error::ConfigError;
use cheeze_wizards_api::{ALCHEMY_API_URL, CheezeWizardsApi, Configuration};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use log::LevelFilter;
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub const CONFIG_FILE: &str = "CheezeWizards.toml";
pub const ENV_PREFIX: &str = "CHEEZE_WIZARDS_";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub email: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: ALCHEMY_API_URL.to_owned(),
            email: None,
            api_token: None,
            timeout_secs: None,
            log_file: PathBuf::from("cheeze-wizards.log"),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Merges `path` (or [`CONFIG_FILE`]) with `CHEEZE_WIZARDS_*` variables,
    /// the environment taking precedence. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or(Path::new(CONFIG_FILE));
        Ok(Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?)
    }

    pub fn client(&self) -> Result<CheezeWizardsApi, ConfigError> {
        let email = self
            .email
            .as_deref()
            .ok_or(ConfigError::MissingCredential("email"))?;
        let api_token = self
            .api_token
            .as_deref()
            .ok_or(ConfigError::MissingCredential("api_token"))?;
        let mut builder = Configuration::builder(email, api_token).base_path(&self.base_url);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(CheezeWizardsApi::from_configuration(builder.build()?))
    }
}
