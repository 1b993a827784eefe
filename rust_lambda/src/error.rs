use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be provided")]
    Missing(&'static str),
    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("record {index} is missing {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("unable to encode upload metadata")]
    Encode(#[from] serde_json::Error),
    #[error("unable to send metadata to queue {queue}")]
    QueueSend {
        queue: String,
        #[source]
        source: BoxError,
    },
    #[error("unable to publish notification to topic {topic}")]
    TopicPublish {
        topic: String,
        #[source]
        source: BoxError,
    },
}
