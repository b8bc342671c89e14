use gw_trips::api::optimization::PollPolicy;
use gw_trips::api::{directions, optimization, service};
use gw_trips::config::{Config, REQUIRED_VARIABLES};

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let client = optimization::Client::new(&config.map_api_url, &config.map_access_token)?;
    let directions = directions::Client::new(&config.map_api_url, &config.map_access_token)?;

    let workflow = optimization::OptimizationWorkflow::new(client, directions.clone())
        .with_policy(PollPolicy {
            interval: config.poll_interval,
            max_attempts: config.poll_max_attempts,
        });

    let state = service::State::new(workflow, directions);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = service::router::router(state);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
