use axum::{
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

pub fn subscription_routes() -> Router {
    Router::new()
        .route("/", get(get_all_subscriptions).post(create_subscription))
        .route(
            "/:id",
            get(get_subscription_details)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .route("/:id/cancel", put(cancel_subscription))
        .route("/user/:id", get(get_user_subscriptions))
        .route("/upcoming-renewals", get(upcoming_renewals))
}

async fn get_all_subscriptions() -> impl IntoResponse {
    Json(json!({ "tittle": "Get all subscription" }))
}

async fn get_subscription_details() -> impl IntoResponse {
    Json(json!({ "tittle": "Get subscription details" }))
}

async fn create_subscription() -> impl IntoResponse {
    Json(json!({ "tittle": "CREATE subscription" }))
}

async fn update_subscription() -> impl IntoResponse {
    Json(json!({ "tittle": "UPDATE subscription" }))
}

async fn delete_subscription() -> impl IntoResponse {
    Json(json!({ "tittle": "DELETE subscription" }))
}

async fn get_user_subscriptions() -> impl IntoResponse {
    Json(json!({ "tittle": "GET all user subscription" }))
}

async fn cancel_subscription() -> impl IntoResponse {
    Json(json!({ "tittle": "Cancel subscription" }))
}

async fn upcoming_renewals() -> impl IntoResponse {
    Json(json!({ "tittle": "GET upcoming renewals" }))
}
