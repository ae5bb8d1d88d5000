use arabtv::{create_app, pipeline, settings::Settings, sources::Fetcher, validator};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch all feeds and write the curated playlist
    Generate {
        /// Output file (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write a JSON summary of the run
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Serve the playlist file over HTTP
    Serve,
    /// Probe every stream in the playlist and drop the dead ones
    Validate,
}

fn local_ip() -> Option<std::net::IpAddr> {
    // Connecting a UDP socket sends nothing; it only picks the outbound interface.
    let socket = std::net::UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket.local_addr().ok().map(|a| a.ip())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings = Settings::load(&args.config)?;
    info!("Configuration loaded from {}: {:?}", args.config, settings);

    match args.command {
        Command::Generate { output, report } => {
            let output = output.unwrap_or(settings.playlist.output);
            let fetcher = Fetcher::new(settings.fetch.timeout())?;
            let summary = pipeline::generate(&fetcher, &settings.sources.base_url, &output).await?;

            if let Some(path) = report {
                let json = serde_json::to_string_pretty(&summary)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                info!("Report written to {}", path.display());
            }
        }
        Command::Serve => {
            let app = create_app(settings.playlist.output.clone());

            let addr = format!("{}:{}", settings.server.host, settings.server.port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            info!("Serving {}", settings.playlist.output.display());
            info!("Local link:   http://localhost:{}/playlist.m3u", settings.server.port);
            if let Some(ip) = local_ip() {
                info!("Network link: http://{}:{}/playlist.m3u", ip, settings.server.port);
            }
            axum::serve(listener, app).await?;
        }
        Command::Validate => {
            validator::validate_file(&settings.playlist.output, &settings.validate).await?;
        }
    }

    Ok(())
}
