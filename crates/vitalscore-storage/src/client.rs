use aws_sdk_s3::Client;

/// Load the shared AWS config from the default provider chain.
pub async fn load_config() -> aws_config::SdkConfig {
    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await
}

/// Build an S3 client from an already loaded AWS config.
pub fn build_client(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
