use crate::helpers::{assert_stub_label, spawn_app};

#[tokio::test]
async fn listing_subscriptions_returns_its_stub_label() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/api/v1/subscriptions/").await;

    // Assert
    assert_stub_label(response, "Get all subscription").await;
}

#[tokio::test]
async fn fetching_a_subscription_by_id_returns_its_stub_label() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/api/v1/subscriptions/42").await;

    // Assert
    assert_stub_label(response, "Get subscription details").await;
}

#[tokio::test]
async fn creating_a_subscription_returns_its_stub_label() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.post("/api/v1/subscriptions/").await;

    // Assert
    assert_stub_label(response, "CREATE subscription").await;
}

#[tokio::test]
async fn updating_a_subscription_returns_its_stub_label() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.put("/api/v1/subscriptions/42").await;

    // Assert
    assert_stub_label(response, "UPDATE subscription").await;
}

#[tokio::test]
async fn deleting_a_subscription_returns_its_stub_label() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.delete("/api/v1/subscriptions/42").await;

    // Assert
    assert_stub_label(response, "DELETE subscription").await;
}

#[tokio::test]
async fn listing_a_users_subscriptions_returns_its_stub_label() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/api/v1/subscriptions/user/42").await;

    // Assert
    assert_stub_label(response, "GET all user subscription").await;
}

#[tokio::test]
async fn cancelling_a_subscription_returns_its_stub_label() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.put("/api/v1/subscriptions/42/cancel").await;

    // Assert
    assert_stub_label(response, "Cancel subscription").await;
}

#[tokio::test]
async fn upcoming_renewals_returns_its_stub_label() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/api/v1/subscriptions/upcoming-renewals").await;

    // Assert
    assert_stub_label(response, "GET upcoming renewals").await;
}
