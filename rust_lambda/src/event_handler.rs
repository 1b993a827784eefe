use lambda_runtime::{tracing, Error, LambdaEvent};

use crate::capability::{MetadataQueue, NotificationTopic};
use crate::model::{InvocationResult, UploadEvent};
use crate::notifier::Notifier;

#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub(crate) async fn function_handler<Q, T>(
    event: LambdaEvent<UploadEvent>,
    notifier: &Notifier<Q, T>,
) -> Result<InvocationResult, Error>
where
    Q: MetadataQueue,
    T: NotificationTopic,
{
    let payload = event.payload;
    tracing::debug!(event = ?payload, "received upload event");
    if payload.records.is_empty() {
        tracing::warn!("No records found in S3 event");
    }
    let result = notifier.handle(&payload).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to relay upload event");
        e
    })?;
    tracing::info!(records = payload.records.len(), "relayed upload event");
    Ok(result)
}
