//! factd: daily-fact voting service
//!
//! Serves one "fact of the day" chosen deterministically from the seeded
//! fact list and records visitor reactions against it. Selection is a pure
//! function of the calendar date; votes are an append-only log aggregated
//! at read time.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use factd::api;
use factd::config::Config;
use factd::db::FactDb;
use factd::seed;

#[derive(Parser)]
#[command(name = "factd")]
#[command(about = "Daily-fact voting service")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "factd.toml")]
    config: String,

    /// Data directory
    #[arg(short, long, env = "FACTD_DATA_DIR")]
    data_dir: Option<String>,

    /// HTTP port (overrides config file)
    #[arg(short = 'p', long, env = "FACTD_HTTP_PORT")]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("factd=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    info!("Starting factd");
    info!("Config file: {}", cli.config);

    // Load or create default config
    let mut config: Config = if std::path::Path::new(&cli.config).exists() {
        let content = std::fs::read_to_string(&cli.config)?;
        toml::from_str(&content)?
    } else {
        info!("Config file not found, using defaults");
        Config::default()
    };

    // Apply CLI overrides
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = PathBuf::from(data_dir);
    }
    if let Some(port) = cli.http_port {
        config.server.http_port = port;
    }

    info!("Data dir: {}", config.storage.data_dir.display());

    // Open storage and seed on first run
    std::fs::create_dir_all(&config.storage.data_dir)?;
    let db = Arc::new(FactDb::open(&config.storage.data_dir)?);

    let seeded = db.seed_facts(&seed::seed_facts())?;
    if seeded > 0 {
        info!("First run: seeded {} facts", seeded);
    }
    let stats = db.stats()?;
    info!(
        facts = stats.fact_count,
        votes = stats.vote_count,
        "Storage ready"
    );

    // Create API router
    let app = api::create_router(db, &config.server.static_dir);

    // Bind to HTTP port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.http_port));
    info!("API listening on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
