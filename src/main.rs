use anyhow::Result;
use trackscribe::commands::Cli;
use trackscribe::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trackscribe=debug")))
            .init();
    }

    Cli::menu().await
}
