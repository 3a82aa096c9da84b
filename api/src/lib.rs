//! Client for the Cheeze Wizards Alchemy API.
//!
//! ```no_run
//! # async fn run() -> Result<(), cheeze_wizards_api::Error> {
//! use cheeze_wizards_api::{CheezeWizardsApi, DuelsParams};
//!
//! let api = CheezeWizardsApi::new("your@email.com", "your-api-token")?;
//! let wizard = api.wizard(Some(1)).await?;
//! println!("{} {}", wizard.status, wizard.data);
//!
//! let duels = api
//!     .duels(Some(&DuelsParams::new().starts_after(8262502).wizard_ids([3, 4])))
//!     .await?;
//! println!("{}", duels.data);
//! # Ok(())
//! # }
//! ```
use std::sync::Arc;

pub use configuration::{Configuration, ConfigurationBuilder};
pub use duels::{DuelsApi, DuelsParams};
pub use error::{Error, ResponseContent};
pub use query::QueryParams;
pub use reqwest::StatusCode;
pub use response::ApiResponse;
pub use wizards::{Affinity, WizardsApi, WizardsParams};

pub mod configuration;
pub mod duels;
pub mod error;
pub mod query;
pub mod request;
pub mod response;
pub mod wizards;

pub const ALCHEMY_API_URL: &str = "https://cheezewizards.alchemyapi.io";
pub const WIZARDS_BASE_PATH: &str = "/wizards/";
pub const DUELS_BASE_PATH: &str = "/duels/";

#[derive(Debug, Clone)]
pub struct CheezeWizardsApi {
    configuration: Arc<Configuration>,
    pub wizards: WizardsApi,
    pub duels: DuelsApi,
}

impl CheezeWizardsApi {
    pub fn new(email: &str, api_token: &str) -> Result<Self, Error> {
        Ok(Self::from_configuration(Configuration::new(email, api_token)?))
    }

    pub fn with_base_url(base_url: &str, email: &str, api_token: &str) -> Result<Self, Error> {
        Ok(Self::from_configuration(
            Configuration::builder(email, api_token)
                .base_path(base_url)
                .build()?,
        ))
    }

    pub fn from_configuration(configuration: Configuration) -> Self {
        let conf = Arc::new(configuration);
        Self {
            wizards: WizardsApi::new(conf.clone()),
            duels: DuelsApi::new(conf.clone()),
            configuration: conf,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Raw GET against any path of the API.
    pub async fn get<P: QueryParams + ?Sized>(
        &self,
        path: &str,
        params: Option<&P>,
    ) -> Result<ApiResponse, Error> {
        request::get(&self.configuration, path, params).await
    }

    pub async fn duel(&self, duel_id: Option<u64>) -> Result<ApiResponse, Error> {
        self.duels.get(duel_id).await
    }

    pub async fn duels(&self, params: Option<&DuelsParams>) -> Result<ApiResponse, Error> {
        self.duels.filter(params).await
    }

    pub async fn wizard(&self, wizard_id: Option<u64>) -> Result<ApiResponse, Error> {
        self.wizards.get(wizard_id).await
    }

    pub async fn wizards(&self, params: Option<&WizardsParams>) -> Result<ApiResponse, Error> {
        self.wizards.filter(params).await
    }
}
