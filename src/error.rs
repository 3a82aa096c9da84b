use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
    #[error("missing `{0}`: set it in the configuration file or through the environment")]
    MissingCredential(&'static str),
    #[error("failed to build client: {0}")]
    Client(#[from] cheeze_wizards_api::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        ConfigError::Figment(Box::new(value))
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("already in interactive mode")]
    NestedRepl,
    #[error("request failed: {0}")]
    Api(#[from] cheeze_wizards_api::Error),
    #[error("failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}
