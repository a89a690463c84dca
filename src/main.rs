//! Crime Foresight host
//!
//! Serves the compiled dashboard bundle and prints configuration templates.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crime_foresight::config::{generate_default_config, Config, LoggingConfig};
use crime_foresight::server;

#[derive(Parser)]
#[command(name = "crime-foresight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Crime statistics dashboard host")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the compiled dashboard
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,
        /// Override the bind port
        #[arg(short, long)]
        port: Option<u16>,
        /// Override the bundle directory
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            static_dir,
        } => {
            let mut config = match config {
                Some(path) => Config::load_with_env(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => Config::load_default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = dir;
            }

            init_logging(&config.logging);
            tracing::info!("Crime Foresight v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Serving bundle from {:?}", config.server.static_dir);

            server::serve(config.server).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.default_directive().into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
