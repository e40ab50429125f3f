use crate::configuration::Settings;
use crate::routes::{auth_routes, health_check, home, subscription_routes, user_routes};
use crate::telemetry::request_id;
use crate::utils::handler_404;
use axum::{
    routing::{get, IntoMakeService},
    Router,
};
use hyper::{http::Request, server::conn::AddrIncoming, Body};
use std::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_request_id::RequestIdLayer;

pub async fn build(configuration: Settings) -> axum::Server<AddrIncoming, IntoMakeService<Router>> {
    let address = format!("{}:{}", configuration.host, configuration.port);
    let listener = TcpListener::bind(address).expect("Failed to bind a port");

    run(listener)
}

fn run(listener: TcpListener) -> axum::Server<AddrIncoming, IntoMakeService<Router>> {
    let router = Router::new()
        .route("/", get(home))
        .route("/health_check", get(health_check))
        .nest("/api/v1/auth", auth_routes())
        .nest("/api/v1/users", user_routes())
        .nest("/api/v1/subscriptions", subscription_routes())
        .fallback(handler_404)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| request_id(request)),
        )
        .layer(RequestIdLayer);

    axum::Server::from_tcp(listener)
        .expect("Failed to bind a port.")
        .serve(router.into_make_service())
}
