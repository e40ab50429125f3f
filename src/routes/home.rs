use axum::response::IntoResponse;

pub async fn home() -> impl IntoResponse {
    "Welcome to the EOS App"
}
