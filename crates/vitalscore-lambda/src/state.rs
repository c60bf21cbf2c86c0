use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use vitalscore_assess::assessor::Assessor;
use vitalscore_assess::strategy::Strategy;
use vitalscore_bedrock::converse::ConverseService;

pub type AppAssessor = Assessor<Strategy<ConverseService>>;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub assessor: Arc<AppAssessor>,
}
