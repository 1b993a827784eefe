use lambda_runtime::tracing;

use crate::capability::{MetadataQueue, NotificationTopic};
use crate::config::NotifierConfig;
use crate::error::NotifierError;
use crate::model::{InvocationResult, UploadEvent, UploadRecord, NOTIFICATION_SUBJECT};

/// Relays every upload in a batch to the metadata queue and the notification
/// topic, one record at a time in delivery order.
pub struct Notifier<Q, T> {
    config: NotifierConfig,
    queue: Q,
    topic: T,
}

impl<Q, T> Notifier<Q, T>
where
    Q: MetadataQueue,
    T: NotificationTopic,
{
    pub fn new(config: NotifierConfig, queue: Q, topic: T) -> Self {
        Self { config, queue, topic }
    }

    pub async fn handle(&self, batch: &UploadEvent) -> Result<InvocationResult, NotifierError> {
        for (index, record) in batch.records.iter().enumerate() {
            self.relay(index, record).await?;
        }
        Ok(InvocationResult::done())
    }

    async fn relay(&self, index: usize, record: &UploadRecord) -> Result<(), NotifierError> {
        let metadata = record.fields(index)?;
        tracing::info!(
            index,
            bucket = metadata.bucket,
            key = metadata.key,
            event_name = record.event_name.as_deref(),
            "relaying upload"
        );

        let message_id = self
            .queue
            .send_metadata(&self.config.queue_url, metadata.to_body()?)
            .await
            .map_err(|source| NotifierError::QueueSend {
                queue: self.config.queue_url.clone(),
                source,
            })?;
        tracing::info!(message_id = ?message_id, "sent metadata to queue");

        let message_id = self
            .topic
            .publish_notification(
                &self.config.topic_arn,
                NOTIFICATION_SUBJECT,
                metadata.notification_text(),
            )
            .await
            .map_err(|source| NotifierError::TopicPublish {
                topic: self.config.topic_arn.clone(),
                source,
            })?;
        tracing::info!(message_id = ?message_id, "published notification to topic");

        Ok(())
    }
}
