use nexus_scans::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("nexus-scans".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    nexus_scans::run().await
}
