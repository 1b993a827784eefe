use std::future::Future;

use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sqs::Client as SqsClient;

use crate::error::BoxError;

/// Sends upload metadata to a queue. Resolves to the queue's message id.
pub trait MetadataQueue {
    fn send_metadata(
        &self,
        queue_url: &str,
        body: String,
    ) -> impl Future<Output = Result<Option<String>, BoxError>> + Send;
}

/// Publishes a text notification to a topic. Resolves to the topic's message id.
pub trait NotificationTopic {
    fn publish_notification(
        &self,
        topic_arn: &str,
        subject: &str,
        message: String,
    ) -> impl Future<Output = Result<Option<String>, BoxError>> + Send;
}

impl MetadataQueue for SqsClient {
    async fn send_metadata(&self, queue_url: &str, body: String) -> Result<Option<String>, BoxError> {
        let output = self
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await?;
        Ok(output.message_id)
    }
}

impl NotificationTopic for SnsClient {
    async fn publish_notification(
        &self,
        topic_arn: &str,
        subject: &str,
        message: String,
    ) -> Result<Option<String>, BoxError> {
        let output = self
            .publish()
            .topic_arn(topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await?;
        Ok(output.message_id)
    }
}
