use aws_config::BehaviorVersion;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sqs::Client as SqsClient;
use lambda_runtime::{run, service_fn, tracing, Error};
mod capability;
mod config;
mod error;
mod event_handler;
mod model;
mod notifier;
use config::NotifierConfig;
use event_handler::function_handler;
use notifier::Notifier;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt().json().init();
    let config = NotifierConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;
    tracing::info!(queue_url = %config.queue_url, topic_arn = %config.topic_arn, "loaded configuration");
    let shared_config = aws_config::load_defaults(BehaviorVersion::v2025_01_17()).await;
    let notifier = Notifier::new(
        config,
        SqsClient::new(&shared_config),
        SnsClient::new(&shared_config),
    );
    run(service_fn(|event| function_handler(event, &notifier))).await
}
