use serde::{Deserialize, Serialize};

use crate::error::NotifierError;

pub const NOTIFICATION_SUBJECT: &str = "File Upload Notification";

/// The S3 notification delivered to the function. Field presence inside each
/// record is checked by [`UploadRecord::fields`] rather than by serde, so a
/// malformed record is reported by position and field name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadEvent {
    #[serde(rename = "Records", alias = "records")]
    pub records: Vec<UploadRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub event_name: Option<String>,
    pub event_time: Option<String>,
    #[serde(default)]
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: S3Bucket,
    #[serde(default)]
    pub object: S3Object,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Bucket {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Object {
    pub key: Option<String>,
}

impl UploadRecord {
    /// Borrows bucket, key and timestamp, or names the first one absent.
    pub fn fields(&self, index: usize) -> Result<MetadataMessage<'_>, NotifierError> {
        let missing = |field| NotifierError::MissingField { index, field };
        Ok(MetadataMessage {
            bucket: self.s3.bucket.name.as_deref().ok_or_else(|| missing("s3.bucket.name"))?,
            key: self.s3.object.key.as_deref().ok_or_else(|| missing("s3.object.key"))?,
            timestamp: self.event_time.as_deref().ok_or_else(|| missing("eventTime"))?,
        })
    }
}

/// Body of the queue message.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MetadataMessage<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
    pub timestamp: &'a str,
}

impl MetadataMessage<'_> {
    pub fn to_body(&self) -> Result<String, NotifierError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn notification_text(&self) -> String {
        format!(
            "New file uploaded to S3 bucket '{}' with the key '{}'",
            self.bucket, self.key
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResult {
    pub fn done() -> Self {
        Self {
            status_code: 200,
            body: "\"Done\"".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_s3_notification() {
        let event: UploadEvent = serde_json::from_value(json!({
            "Records": [{
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "eventTime": "2024-01-01T00:00:00.123Z",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": { "name": "my-bucket", "arn": "arn:aws:s3:::my-bucket" },
                    "object": { "key": "reports/a+b.txt", "size": 1024 }
                }
            }]
        }))
        .unwrap();

        let record = &event.records[0];
        assert_eq!(record.event_name.as_deref(), Some("ObjectCreated:Put"));
        let message = record.fields(0).unwrap();
        assert_eq!(message.bucket, "my-bucket");
        assert_eq!(message.key, "reports/a+b.txt");
        assert_eq!(message.timestamp, "2024-01-01T00:00:00.123Z");
    }

    #[test]
    fn accepts_lowercase_records() {
        let event: UploadEvent = serde_json::from_value(json!({
            "records": [{
                "s3": { "bucket": { "name": "my-bucket" }, "object": { "key": "a.txt" } },
                "eventTime": "2024-01-01T00:00:00Z"
            }]
        }))
        .unwrap();
        assert_eq!(event.records.len(), 1);
    }

    #[test]
    fn missing_records_field_is_rejected() {
        assert!(serde_json::from_value::<UploadEvent>(json!({})).is_err());
    }

    #[test]
    fn names_missing_field() {
        let event: UploadEvent = serde_json::from_value(json!({
            "Records": [{ "s3": { "bucket": { "name": "b" }, "object": {} }, "eventTime": "t" }]
        }))
        .unwrap();
        let err = event.records[0].fields(3).unwrap_err();
        assert!(matches!(
            err,
            NotifierError::MissingField { index: 3, field: "s3.object.key" }
        ));

        let no_time = UploadRecord {
            s3: S3Entity {
                bucket: S3Bucket { name: Some("b".to_string()) },
                object: S3Object { key: Some("k".to_string()) },
            },
            ..Default::default()
        };
        assert!(matches!(
            no_time.fields(0),
            Err(NotifierError::MissingField { field: "eventTime", .. })
        ));
    }

    #[test]
    fn builds_payloads() {
        let message = MetadataMessage {
            bucket: "my-bucket",
            key: "a.txt",
            timestamp: "2024-01-01T00:00:00Z",
        };
        let body: serde_json::Value = serde_json::from_str(&message.to_body().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "bucket": "my-bucket", "key": "a.txt", "timestamp": "2024-01-01T00:00:00Z" })
        );
        assert_eq!(
            message.notification_text(),
            "New file uploaded to S3 bucket 'my-bucket' with the key 'a.txt'"
        );
    }

    #[test]
    fn result_serializes_like_a_proxy_response() {
        assert_eq!(
            serde_json::to_value(InvocationResult::done()).unwrap(),
            json!({ "statusCode": 200, "body": "\"Done\"" })
        );
    }
}
