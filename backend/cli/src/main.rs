mod chat;
mod http_relay;

use std::net::SocketAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use aria_config::RelayConfig;
use aria_gateway::{GatewayState, start_server};

#[derive(Parser)]
#[command(name = "aria")]
#[command(about = "Aria — companion chat runtime")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the relay gateway
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Chat with the companion in the terminal
    Chat {
        /// Gateway base URL
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = RelayConfig::from_env();
    aria_logging::init_logger("logs", &config.log_level);

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port } => {
            let config = RelayConfig {
                port: port.unwrap_or(config.port),
                ..config
            };
            let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
            start_server(addr, GatewayState::new(config)).await?;
        }
        Commands::Chat { url } => {
            chat::run_chat(&url).await?;
        }
    }
    Ok(())
}
