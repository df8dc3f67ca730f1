use tokio::net::TcpListener;
use todo_server::{observability, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    observability::init_tracing(config.log_format);

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "todo server listening");
    todo_server::run(listener).await?;
    Ok(())
}
