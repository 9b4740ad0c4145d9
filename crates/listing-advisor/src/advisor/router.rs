use super::engine::{RecommendationEngine, SellerProfile};
use super::report::RecommendationView;
use super::taxonomy::{Condition, Involvement, Timeline};
use crate::error::AppError;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

/// Wire payload carrying the three selections as taxonomy identifiers.
///
/// Values arrive as strings and are parsed against the closed sets here, at
/// the boundary, so the engine itself only ever sees valid enum values.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub timeline: String,
    pub involvement: String,
    pub condition: String,
}

/// Router fragment exposing the recommendation endpoint. The API service
/// mounts this next to its health and metrics routes.
pub fn recommendation_router() -> Router {
    Router::new().route("/api/v1/recommendation", post(recommend_handler))
}

pub(crate) async fn recommend_handler(
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationView>, AppError> {
    let profile = SellerProfile {
        timeline: request.timeline.parse::<Timeline>()?,
        involvement: request.involvement.parse::<Involvement>()?,
        condition: request.condition.parse::<Condition>()?,
    };

    let recommendation = RecommendationEngine::new().recommend(profile);
    tracing::debug!(
        timeline = profile.timeline.label(),
        involvement = profile.involvement.label(),
        condition = profile.condition.label(),
        primary = recommendation.primary.label(),
        "recommendation served"
    );

    Ok(Json(RecommendationView::from(&recommendation)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn post_recommendation(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/recommendation")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");

        let response = recommendation_router()
            .oneshot(request)
            .await
            .expect("router responds");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let value = serde_json::from_slice(&bytes).expect("body is json");
        (status, value)
    }

    #[tokio::test]
    async fn valid_selection_returns_recommendation() {
        let (status, body) = post_recommendation(serde_json::json!({
            "timeline": "flexible",
            "involvement": "high",
            "condition": "needs_work",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["primary"]["tier"], "comprehensive");
        assert_eq!(body["alternative"]["tier"], "cosmetic");
    }

    #[tokio::test]
    async fn out_of_taxonomy_value_is_rejected() {
        let (status, body) = post_recommendation(serde_json::json!({
            "timeline": "ASAP",
            "involvement": "high",
            "condition": "needs_work",
        }))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let message = body["error"].as_str().expect("error message");
        assert!(message.contains("'ASAP' is not in the timeline taxonomy"));
    }
}
