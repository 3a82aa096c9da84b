use crate::{
    ApiResponse, Error, WIZARDS_BASE_PATH,
    configuration::Configuration,
    query::{QueryParams, push_opt},
    request::{get, get_path},
};
use derive_more::TryFrom;
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone)]
pub struct WizardsApi {
    configuration: Arc<Configuration>,
}

impl WizardsApi {
    pub(crate) fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    /// Fetches one wizard, or every wizard when no id is given.
    pub async fn get(&self, wizard_id: Option<u64>) -> Result<ApiResponse, Error> {
        let path = match wizard_id {
            Some(id) => format!("{WIZARDS_BASE_PATH}{id}"),
            None => WIZARDS_BASE_PATH.to_owned(),
        };
        get_path(&self.configuration, &path).await
    }

    /// Fetches the wizards matching `params`, or every wizard when absent.
    pub async fn filter(&self, params: Option<&WizardsParams>) -> Result<ApiResponse, Error> {
        get(&self.configuration, WIZARDS_BASE_PATH, params).await
    }
}

/// Query filters accepted by `GET /wizards/`.
///
/// Power bounds are inclusive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WizardsParams {
    pub owner: Option<String>,
    pub affinity: Option<Affinity>,
    pub min_power: Option<u128>,
    pub max_power: Option<u128>,
}

impl WizardsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn affinity(mut self, affinity: Affinity) -> Self {
        self.affinity = Some(affinity);
        self
    }

    pub fn min_power(mut self, min_power: u128) -> Self {
        self.min_power = Some(min_power);
        self
    }

    pub fn max_power(mut self, max_power: u128) -> Self {
        self.max_power = Some(max_power);
        self
    }
}

impl QueryParams for WizardsParams {
    fn query_pairs(&self) -> Vec<(&str, String)> {
        let mut pairs = vec![];
        push_opt(&mut pairs, "owner", &self.owner);
        push_opt(&mut pairs, "affinity", &self.affinity.map(|a| a as u8));
        push_opt(&mut pairs, "minPower", &self.min_power);
        push_opt(&mut pairs, "maxPower", &self.max_power);
        pairs
    }
}

/// Elemental type of a wizard.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, TryFrom,
)]
#[try_from(repr)]
#[repr(u8)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Affinity {
    #[default]
    #[strum(to_string = "not_set", serialize = "notset")]
    NotSet = 0,
    Neutral = 1,
    Fire = 2,
    Wind = 3,
    Water = 4,
}
