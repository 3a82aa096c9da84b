use crate::{
    ApiResponse, DUELS_BASE_PATH, Error,
    configuration::Configuration,
    query::{QueryParams, push_opt},
    request::{get, get_path},
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DuelsApi {
    configuration: Arc<Configuration>,
}

impl DuelsApi {
    pub(crate) fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    /// Fetches one duel, or every duel when no id is given.
    pub async fn get(&self, duel_id: Option<u64>) -> Result<ApiResponse, Error> {
        let path = match duel_id {
            Some(id) => format!("{DUELS_BASE_PATH}{id}"),
            None => DUELS_BASE_PATH.to_owned(),
        };
        get_path(&self.configuration, &path).await
    }

    /// Fetches the duels matching `params`, or every duel when absent.
    pub async fn filter(&self, params: Option<&DuelsParams>) -> Result<ApiResponse, Error> {
        get(&self.configuration, DUELS_BASE_PATH, params).await
    }
}

/// Query filters accepted by `GET /duels/`. Bounds are block numbers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DuelsParams {
    pub starts_after: Option<u64>,
    pub starts_before: Option<u64>,
    pub ends_after: Option<u64>,
    pub ends_before: Option<u64>,
    /// Duels involving any of these wizards.
    pub wizard_ids: Vec<u64>,
    /// Only completed duels when `true`.
    pub exclude_in_progress: Option<bool>,
    /// Only duels in progress when `true`.
    pub exclude_finished: Option<bool>,
}

impl DuelsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starts_after(mut self, block: u64) -> Self {
        self.starts_after = Some(block);
        self
    }

    pub fn starts_before(mut self, block: u64) -> Self {
        self.starts_before = Some(block);
        self
    }

    pub fn ends_after(mut self, block: u64) -> Self {
        self.ends_after = Some(block);
        self
    }

    pub fn ends_before(mut self, block: u64) -> Self {
        self.ends_before = Some(block);
        self
    }

    pub fn wizard_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.wizard_ids = ids.into_iter().collect();
        self
    }

    pub fn exclude_in_progress(mut self, exclude: bool) -> Self {
        self.exclude_in_progress = Some(exclude);
        self
    }

    pub fn exclude_finished(mut self, exclude: bool) -> Self {
        self.exclude_finished = Some(exclude);
        self
    }
}

impl QueryParams for DuelsParams {
    fn query_pairs(&self) -> Vec<(&str, String)> {
        let mut pairs = vec![];
        push_opt(&mut pairs, "startsAfter", &self.starts_after);
        push_opt(&mut pairs, "startsBefore", &self.starts_before);
        push_opt(&mut pairs, "endsAfter", &self.ends_after);
        push_opt(&mut pairs, "endsBefore", &self.ends_before);
        pairs.extend(self.wizard_ids.iter().map(|id| ("wizardIds", id.to_string())));
        push_opt(&mut pairs, "excludeInProgress", &self.exclude_in_progress);
        push_opt(&mut pairs, "excludeFinished", &self.exclude_finished);
        pairs
    }
}
