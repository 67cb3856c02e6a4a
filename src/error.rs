#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No user agent was passed and the default source had none either.
    #[error("parse_user_agent requires a user agent")]
    MissingUserAgent,
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] regex::Error),
    #[error(transparent)]
    FancyRegex(#[from] fancy_regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
