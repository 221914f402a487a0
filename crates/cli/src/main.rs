use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hubstats_core::AppConfig;
use hubstats_http::{AppState, create_router};
use hubstats_service::DashboardService;
use hubstats_storage::PgStore;

#[derive(Parser)]
#[command(name = "hubstats")]
#[command(about = "Usage-analytics dashboard for multi-tenant content hubs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Print the global dashboard overview as JSON.
    Overview,
    /// Print the content-type breakdown as JSON.
    ContentTypes,
    /// Print per-day creation stats as JSON.
    TimeSeries {
        #[arg(short, long, default_value = "7d")]
        period: String,
    },
}

async fn connect(config: &AppConfig) -> Result<DashboardService> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable must be set"))?;
    let store = PgStore::connect(url).await?;
    Ok(DashboardService::new(Arc::new(store)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => {
            let dashboard = Arc::new(connect(&config).await?);
            if config.admin_token.is_none() {
                tracing::warn!(
                    "HUBSTATS_ADMIN_TOKEN is not set; dashboard routes will reject every request"
                );
            }
            let state =
                Arc::new(AppState { dashboard, admin_token: config.admin_token.clone() });
            let router = create_router(state);
            let addr =
                format!("{}:{}", host.unwrap_or(config.host), port.unwrap_or(config.port));
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Overview => {
            let dashboard = connect(&config).await?;
            let overview = dashboard.overview().await?;
            println!("{}", serde_json::to_string_pretty(&overview)?);
        },
        Commands::ContentTypes => {
            let dashboard = connect(&config).await?;
            let stats = dashboard.content_types().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        },
        Commands::TimeSeries { period } => {
            let dashboard = connect(&config).await?;
            let buckets = dashboard.time_series(&period).await?;
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        },
    }

    Ok(())
}
