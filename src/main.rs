use rclone_rc_monitor::config::Config;
use rclone_rc_monitor::poller::Poller;
use rclone_rc_monitor::rclone_client::RcloneClient;
use rclone_rc_monitor::render::draw;
use rclone_rc_monitor::MonitorError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), MonitorError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().await;
    let client = RcloneClient::new(&config)?;
    info!(url = %client.base_url(), "Polling rclone rc daemon");

    let mut poller = Poller::new(client, config.poll_interval());
    poller
        .run(
            |dashboard| {
                if let Err(err) = draw(&mut std::io::stdout().lock(), dashboard) {
                    warn!(error = ?err, "Failed to draw dashboard");
                }
            },
            async {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    warn!(error = ?err, "Failed to listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            },
        )
        .await;

    Ok(())
}
