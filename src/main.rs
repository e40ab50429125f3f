use subscription_tracker::configuration::get_configuration;
use subscription_tracker::startup::build;
use subscription_tracker::telemetry::{get_subscriber, init_subscriber};
use subscription_tracker::utils::shutdown_signal;

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber("subscription-tracker".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");

    let server = build(configuration).await;
    tracing::info!("Listening on http://{}", server.local_addr());

    server
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
