use std::env;
use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use vitalscore_assess::assessor::Assessor;
use vitalscore_assess::config::AssessConfig;
use vitalscore_assess::strategy::Strategy;
use vitalscore_bedrock::converse::ConverseService;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("VITALSCORE_BUCKET").unwrap_or_else(|_| "vitalscore".to_string());
    let config = AssessConfig::from_env()?;

    let aws_config = vitalscore_storage::client::load_config().await;
    let s3 = vitalscore_storage::client::build_client(&aws_config);

    let service = config.model_id.as_deref().map(|model_id| {
        ConverseService::new(&aws_config, model_id).with_settings(config.inference)
    });
    let strategy = Strategy::from_config(&config, service);

    tracing::info!(
        bucket = %bucket,
        classifier = strategy.describe(),
        model_id = config.model_id.as_deref().unwrap_or("none"),
        timeout_secs = config.model_timeout.as_secs(),
        max_tokens = config.inference.max_tokens,
        "starting vitalscore api"
    );

    let state = AppState {
        s3,
        bucket,
        assessor: Arc::new(Assessor::new(strategy)),
    };

    lambda_http::run(app(state)).await.map_err(|e| eyre::eyre!(e))
}

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/categories", get(routes::categories::list_categories))
        .route("/scores", post(routes::scores::preview_scores))
        .route(
            "/assessments",
            get(routes::assessments::list_assessments).post(routes::assessments::create_assessment),
        )
        .route(
            "/assessments/{id}",
            get(routes::assessments::get_assessment)
                .put(routes::assessments::update_assessment)
                .delete(routes::assessments::delete_assessment),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    // Routes under test never reach S3, so an offline client is enough.
    fn test_state() -> AppState {
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .build();
        AppState {
            s3: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: "vitalscore-test".to_string(),
            assessor: Arc::new(Assessor::new(Strategy::from_config(
                &AssessConfig::default(),
                None,
            ))),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_classifier() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "classifier": "heuristic"}));
    }

    #[tokio::test]
    async fn categories_are_listed_in_form_order() {
        let (status, body) = send(Request::get("/categories").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "eating_habits");
        assert_eq!(body[5]["id"], "family_history");
        assert_eq!(body[5]["scored"], false);
    }

    #[tokio::test]
    async fn scores_preview_computes_bmi() {
        let answers = json!({
            "demographics": {
                "name": "Dev",
                "age": 14,
                "gender": "male",
                "height": "170",
                "weight": 70
            }
        });
        let (status, body) = send(post_json("/scores", answers)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bmi"], 24.2);
        assert_eq!(body["bmiCategory"], "normal");
        assert_eq!(body["eatingHabitsScore"], 5.0);
    }

    #[tokio::test]
    async fn scores_preview_rejects_missing_height() {
        let answers = json!({
            "demographics": {"name": "Dev", "age": 14, "gender": "male", "weight": 70}
        });
        let (status, body) = send(post_json("/scores", answers)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing required field: height");
    }

    #[tokio::test]
    async fn assessment_input_errors_are_reported_before_storage() {
        let answers = json!({
            "demographics": {
                "name": "Dev",
                "age": 25,
                "gender": "male",
                "height": 170,
                "weight": 70
            }
        });
        let (status, body) = send(post_json("/assessments", answers)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("age 25"));
    }

    #[tokio::test]
    async fn edited_prediction_is_validated_before_storage() {
        let answers = serde_json::from_value(json!({
            "demographics": {
                "name": "Dev",
                "age": 14,
                "gender": "male",
                "height": 170,
                "weight": 70
            }
        }))
        .unwrap();
        let record = test_state().assessor.assess(answers).await.unwrap();
        let mut body = serde_json::to_value(&record).unwrap();
        body["prediction"]["recommendations"] = json!([]);
        body["prediction"]["riskPercentage"] = json!(200);

        let request = Request::put(format!("/assessments/{}", record.id))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("riskPercentage 200"), "{error}");
        assert!(error.contains("recommendations"), "{error}");
    }
}
