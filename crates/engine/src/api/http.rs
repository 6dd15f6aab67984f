//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use devpoints_domain::DomainError;
use devpoints_shared::{
    CalculationResponse, DiceCostRequest, DieTierData, MinimumTargetQuery, MinimumTargetResponse,
    ParameterCostRequest, ParameterData, SkillCostRequest, SkillData, SpecialCostRequest,
    TrainingDaysRequest, TrainingDaysResponse,
};

use crate::app::App;
use crate::use_cases::CostError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/catalog/dice", get(list_dice))
        .route("/api/catalog/skills", get(list_skills))
        .route("/api/catalog/parameters", get(list_parameters))
        .route("/api/costs/dice", post(dice_cost))
        .route("/api/costs/skill", post(skill_cost))
        .route("/api/costs/special", post(special_cost))
        .route("/api/costs/parameter", post(parameter_cost))
        .route("/api/training-days", post(training_days))
        .route("/api/specials/minimum-target", get(minimum_target))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Catalogs
// =============================================================================

async fn list_dice(State(app): State<Arc<App>>) -> Json<Vec<DieTierData>> {
    Json(app.use_cases.catalog.dice())
}

async fn list_skills(State(app): State<Arc<App>>) -> Json<Vec<SkillData>> {
    Json(app.use_cases.catalog.skills())
}

async fn list_parameters(State(app): State<Arc<App>>) -> Json<Vec<ParameterData>> {
    Json(app.use_cases.catalog.parameters())
}

// =============================================================================
// Costs
// =============================================================================

async fn dice_cost(
    State(app): State<Arc<App>>,
    payload: Result<Json<DiceCostRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let request = json_body(payload)?;
    Ok(Json(app.use_cases.costs.dice(request)))
}

async fn skill_cost(
    State(app): State<Arc<App>>,
    payload: Result<Json<SkillCostRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let request = json_body(payload)?;
    Ok(Json(app.use_cases.costs.skill(request)?))
}

async fn special_cost(
    State(app): State<Arc<App>>,
    payload: Result<Json<SpecialCostRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let request = json_body(payload)?;
    Ok(Json(app.use_cases.costs.special(request)?))
}

async fn parameter_cost(
    State(app): State<Arc<App>>,
    payload: Result<Json<ParameterCostRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let request = json_body(payload)?;
    Ok(Json(app.use_cases.costs.parameter(request)?))
}

async fn training_days(
    State(app): State<Arc<App>>,
    payload: Result<Json<TrainingDaysRequest>, JsonRejection>,
) -> Result<Json<TrainingDaysResponse>, ApiError> {
    let request = json_body(payload)?;
    Ok(Json(app.use_cases.costs.training_days(request)))
}

async fn minimum_target(
    State(app): State<Arc<App>>,
    query: Result<Query<MinimumTargetQuery>, QueryRejection>,
) -> Result<Json<MinimumTargetResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(app.use_cases.costs.minimum_target(query)))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

impl From<CostError> for ApiError {
    fn from(e: CostError) -> Self {
        match e {
            CostError::Lookup(lookup @ DomainError::NotFound { .. }) => {
                ApiError::NotFound(lookup.to_string())
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::AppConfig;

    fn app_with(config: AppConfig) -> Router {
        routes().with_state(Arc::new(App::new(&config)))
    }

    fn app() -> Router {
        app_with(AppConfig::default())
    }

    async fn read_body(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = HttpRequest::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = read_body(response).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = read_body(response).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let request = HttpRequest::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&read_body(response).await[..], b"OK");
    }

    #[tokio::test]
    async fn test_dice_cost() {
        let (status, body) = post_json(
            app(),
            "/api/costs/dice",
            json!({"startDie": "d6", "endDie": "d10"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCost"], 900);
        assert_eq!(body["formattedTotal"], "900 PS");
        assert_eq!(body["steps"][0]["cost"], 400);
        assert_eq!(body["steps"][1]["cost"], 500);
        assert_eq!(body["training"]["days"], 150);
    }

    #[tokio::test]
    async fn test_dice_cost_defaults() {
        let (status, body) = post_json(app(), "/api/costs/dice", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCost"], 900);
    }

    #[tokio::test]
    async fn test_skill_cost_with_form_strings() {
        let (status, body) = post_json(
            app(),
            "/api/costs/skill",
            json!({
                "skill": "Guerriero",
                "untrained": true,
                "currentLevel": "",
                "targetLevel": "2",
                "hasMaster": true
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCost"], 175);
        assert_eq!(body["steps"].as_array().unwrap().len(), 3);
        assert_eq!(body["training"]["referenceDie"], "d10");
        assert_eq!(body["training"]["days"], 18);
    }

    #[tokio::test]
    async fn test_skill_rule_error_is_ok_with_error_field() {
        let (status, body) = post_json(
            app(),
            "/api/costs/skill",
            json!({"skill": "alchimia", "currentLevel": 0, "targetLevel": 1}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCost"], 0);
        assert_eq!(body["steps"], json!([]));
        assert_eq!(
            body["error"],
            "cannot advance Specialized skill beyond level 0 without a master"
        );
        assert!(body.get("training").is_none());
    }

    #[tokio::test]
    async fn test_unknown_skill_is_not_found() {
        let (status, _) = post_json(app(), "/api/costs/skill", json!({"skill": "juggling"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_special_cost() {
        let (status, body) = post_json(
            app(),
            "/api/costs/special",
            json!({"ownedCount": 3, "untrained": true, "targetLevel": 2}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCost"], 500);
        assert_eq!(body["steps"][0]["cost"], 200);
        assert_eq!(body["steps"][1]["cost"], 300);
    }

    #[tokio::test]
    async fn test_parameter_cost() {
        let (status, body) = post_json(
            app(),
            "/api/costs/parameter",
            json!({"parameter": "hit_points", "baseValue": "20", "currentBonus": "0", "targetBonus": "1"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCost"], 200);
        assert_eq!(body["finalValue"]["total"], 21);

        let (status, body) = post_json(
            app(),
            "/api/costs/parameter",
            json!({"parameter": "hit_points", "baseValue": 20, "targetBonus": 21}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCost"], 0);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("bonus cannot exceed base value (20)"));
    }

    #[tokio::test]
    async fn test_span_limit() {
        let app = app_with(AppConfig {
            max_level_span: 5,
            ..AppConfig::default()
        });
        let (status, _) = post_json(
            app,
            "/api/costs/parameter",
            json!({"baseValue": 100, "currentBonus": 0, "targetBonus": 50}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rule_error_wins_over_span_limit() {
        let app = app_with(AppConfig {
            max_level_span: 5,
            ..AppConfig::default()
        });
        let (status, body) = post_json(
            app,
            "/api/costs/parameter",
            json!({"baseValue": 20, "currentBonus": 0, "targetBonus": 50}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("bonus cannot exceed base value (20)"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/api/costs/dice")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_die_is_bad_request() {
        let (status, _) = post_json(
            app(),
            "/api/costs/dice",
            json!({"startDie": "d7", "endDie": "d8"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_training_days() {
        let (status, body) = post_json(
            app(),
            "/api/training-days",
            json!({"cost": 1250, "referenceDie": "d4"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["days"], 313);
        assert_eq!(body["formattedDays"], "313 giorni");
    }

    #[tokio::test]
    async fn test_minimum_target() {
        let (status, body) = get_json(
            app(),
            "/api/specials/minimum-target?untrained=false&currentLevel=3",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["minimumTargetLevel"], 4);

        let (_, body) = get_json(app(), "/api/specials/minimum-target").await;
        assert_eq!(body["minimumTargetLevel"], 1);
    }

    #[tokio::test]
    async fn test_catalogs() {
        let (status, dice) = get_json(app(), "/api/catalog/dice").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dice[0], json!({"die": "d2", "faceValue": 2}));

        let (_, skills) = get_json(app(), "/api/catalog/skills").await;
        assert_eq!(skills.as_array().unwrap().len(), 16);

        let (_, parameters) = get_json(app(), "/api/catalog/parameters").await;
        assert_eq!(parameters[1]["id"], "mana_points");
    }
}
