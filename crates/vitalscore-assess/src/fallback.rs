use std::time::Duration;

use tracing::warn;

use crate::classifier::{Classification, ClassificationRequest, RiskClassifier};
use crate::error::ClassifyError;

/// Runs `primary` under a timeout and hands over to `secondary` when it
/// fails, times out, or produces a rejected prediction.
#[derive(Debug, Clone)]
pub struct WithFallback<P, S> {
    primary: P,
    secondary: S,
    timeout: Duration,
}

impl<P, S> WithFallback<P, S> {
    pub fn new(primary: P, secondary: S, timeout: Duration) -> Self {
        Self {
            primary,
            secondary,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<P: RiskClassifier, S: RiskClassifier> RiskClassifier for WithFallback<P, S> {
    async fn classify(
        &self,
        request: &ClassificationRequest<'_>,
    ) -> Result<Classification, ClassifyError> {
        let failure = match tokio::time::timeout(self.timeout, self.primary.classify(request)).await
        {
            Ok(Ok(classification)) => return Ok(classification),
            Ok(Err(e)) => e,
            Err(_) => ClassifyError::Timeout(self.timeout),
        };

        warn!(error = %failure, "primary classifier failed, falling back");

        let mut classification = self.secondary.classify(request).await?;
        classification.fallback_reason = Some(failure.to_string());
        Ok(classification)
    }
}
