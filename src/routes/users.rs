use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

pub fn user_routes() -> Router {
    Router::new()
        // The list route sits at "/users", so the full path is /api/v1/users/users.
        .route("/users", get(get_all_users))
        .route("/", post(create_user))
        .route(
            "/:id",
            get(get_user_details).put(update_user).delete(delete_user),
        )
}

async fn get_all_users() -> impl IntoResponse {
    Json(json!({ "tittle": "GET all users" }))
}

async fn get_user_details() -> impl IntoResponse {
    Json(json!({ "tittle": "GET user details" }))
}

async fn create_user() -> impl IntoResponse {
    Json(json!({ "tittle": "CREATE new users" }))
}

async fn update_user() -> impl IntoResponse {
    Json(json!({ "tittle": "UPDATE user by id" }))
}

async fn delete_user() -> impl IntoResponse {
    Json(json!({ "tittle": "Delete user by id" }))
}
