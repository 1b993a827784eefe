use crate::error::ConfigError;

pub const QUEUE_URL_VAR: &str = "SQS_QUEUE_URL";
pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

/// Destinations for the two outbound sends, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub queue_url: String,
    pub topic_arn: String,
}

impl NotifierConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable getter, failing on the first
    /// absent or blank value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let read = |name: &'static str| -> Result<String, ConfigError> {
            let value = lookup(name).ok_or(ConfigError::Missing(name))?;
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(name));
            }
            Ok(value)
        };
        Ok(Self {
            queue_url: read(QUEUE_URL_VAR)?,
            topic_arn: read(TOPIC_ARN_VAR)?,
        })
    }
}
