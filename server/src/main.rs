use clap::Parser;
use tokio::net::TcpListener;
use todo_core::TodoStore;
use todo_server::{config::Config, telemetry, AppState};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::parse();
    telemetry::init(config.log_format);

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, service = %config.service_name, "listening");

    let state = AppState::new(TodoStore::new(), config.service_name);
    todo_server::run(listener, state).await?;

    Ok(())
}
