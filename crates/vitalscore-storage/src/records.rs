//! Assessment records as JSON objects under `assessments/`.
//!
//! One object per record, keyed by [`s3_keys::assessment`]. The record id is
//! the only index; listing walks the prefix.

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use tracing::{debug, warn};
use uuid::Uuid;

use vitalscore_core::models::record::AssessmentRecord;
use vitalscore_core::s3_keys;

use crate::error::StorageError;

const CONTENT_TYPE: &str = "application/json";

/// Write a record, replacing any existing one with the same id.
pub async fn save_record(
    client: &Client,
    bucket: &str,
    record: &AssessmentRecord,
) -> Result<(), StorageError> {
    let key = s3_keys::assessment(record.id);
    let body = serde_json::to_vec_pretty(record)?;
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(&key)
        .content_type(CONTENT_TYPE)
        .body(ByteStream::from(body))
        .send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    debug!(key = %key, etag = resp.e_tag().unwrap_or(""), "record saved");
    Ok(())
}

/// Fetch one record. A missing object is `NotFound`.
pub async fn load_record(
    client: &Client,
    bucket: &str,
    id: Uuid,
) -> Result<AssessmentRecord, StorageError> {
    let key = s3_keys::assessment(id);
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(&key)
        .send()
        .await
        .map_err(|e| match e.into_service_error() {
            err if err.is_no_such_key() => StorageError::NotFound { key: key.clone() },
            err => StorageError::GetObject(err.to_string()),
        })?;

    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes();
    Ok(serde_json::from_slice(&body)?)
}

/// Whether a record is stored, without fetching it.
pub async fn record_exists(client: &Client, bucket: &str, id: Uuid) -> Result<bool, StorageError> {
    let key = s3_keys::assessment(id);
    match client.head_object().bucket(bucket).key(&key).send().await {
        Ok(_) => Ok(true),
        Err(e) => match e.into_service_error() {
            err if err.is_not_found() => Ok(false),
            err => Err(StorageError::HeadObject(err.to_string())),
        },
    }
}

/// Ids of every stored record, in key order.
pub async fn list_record_ids(client: &Client, bucket: &str) -> Result<Vec<Uuid>, StorageError> {
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(s3_keys::ASSESSMENTS_PREFIX)
        .into_paginator()
        .send();

    let mut ids = Vec::new();
    while let Some(page) = pages.next().await {
        let page = page.map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;
        ids.extend(
            page.contents()
                .iter()
                .filter_map(|object| object.key())
                .filter_map(s3_keys::assessment_id),
        );
    }
    Ok(ids)
}

/// Load every stored record, newest first.
///
/// Objects that are not records or no longer parse are skipped with a
/// warning rather than failing the whole listing.
pub async fn list_records(
    client: &Client,
    bucket: &str,
) -> Result<Vec<AssessmentRecord>, StorageError> {
    let mut records = Vec::new();
    for id in list_record_ids(client, bucket).await? {
        match load_record(client, bucket, id).await {
            Ok(record) => records.push(record),
            Err(e) => warn!(%id, error = %e, "skipping unreadable record"),
        }
    }

    sort_newest_first(&mut records);
    Ok(records)
}

/// Delete a record. Deleting a record that does not exist is `NotFound`.
pub async fn delete_record(client: &Client, bucket: &str, id: Uuid) -> Result<(), StorageError> {
    if !record_exists(client, bucket, id).await? {
        return Err(StorageError::NotFound {
            key: s3_keys::assessment(id),
        });
    }
    client
        .delete_object()
        .bucket(bucket)
        .key(s3_keys::assessment(id))
        .send()
        .await
        .map_err(|e| StorageError::DeleteObject(e.into_service_error().to_string()))?;
    debug!(%id, "record deleted");
    Ok(())
}

pub fn sort_newest_first(records: &mut [AssessmentRecord]) {
    records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use vitalscore_core::models::prediction::{AiPrediction, PredictionSource, RiskLevel};
    use vitalscore_core::models::scores::{BmiCategory, DerivedScores};

    fn record(seconds: i64) -> AssessmentRecord {
        AssessmentRecord {
            id: Uuid::new_v4(),
            answers: Default::default(),
            scores: DerivedScores {
                bmi: 20.0,
                bmi_category: BmiCategory::Normal,
                eating_habits_score: 5.0,
                physical_activity_score: 5.0,
                sedentary_score: 5.0,
                mental_health_score: 5.0,
                sleep_score: 5.0,
                family_history: Default::default(),
                risk_subscores: Default::default(),
            },
            prediction: AiPrediction {
                risk_level: RiskLevel::Low,
                risk_percentage: 20,
                confidence_score: None,
                explanation: "ok".to_string(),
                key_risk_factors: vec!["none".to_string()],
                recommendations: vec!["keep going".to_string()],
            },
            prediction_source: PredictionSource::SafeDefault,
            fallback_reason: None,
            completed_at: Timestamp::from_second(seconds).unwrap(),
        }
    }

    #[test]
    fn newest_records_come_first() {
        let mut records = vec![record(1_700_000_000), record(1_800_000_000), record(1_750_000_000)];
        sort_newest_first(&mut records);
        let seconds: Vec<i64> = records.iter().map(|r| r.completed_at.as_second()).collect();
        assert_eq!(seconds, vec![1_800_000_000, 1_750_000_000, 1_700_000_000]);
    }

    // No endpoint or credentials: every call fails before reaching S3.
    fn offline_client() -> Client {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .build();
        Client::from_conf(config)
    }

    #[tokio::test]
    async fn unreachable_store_is_not_reported_as_missing() {
        let client = offline_client();
        let id = Uuid::new_v4();
        let err = record_exists(&client, "bucket", id).await.unwrap_err();
        assert!(matches!(err, StorageError::HeadObject(_)), "{err}");
        let err = delete_record(&client, "bucket", id).await.unwrap_err();
        assert!(matches!(err, StorageError::HeadObject(_)), "{err}");
        let err = load_record(&client, "bucket", id).await.unwrap_err();
        assert!(matches!(err, StorageError::GetObject(_)), "{err}");
    }
}
