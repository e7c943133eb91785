use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_compass::api::{self, AppState};
use product_compass::config::AppConfig;
use product_compass::dashboard::Dashboard;
use product_compass::{market, render, rice};

#[derive(Parser)]
#[command(name = "compass")]
#[command(about = "RICE prioritization and market sizing for product dashboards")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Port for HTTP API (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Dashboard seed file (JSON)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Compute a RICE score
    Score {
        /// Users impacted per period
        reach: u64,
        /// Impact multiplier (0.25-3)
        impact: f64,
        /// Confidence (%)
        confidence: f64,
        /// Effort (person-weeks)
        effort: f64,
    },
    /// Derive SAM/SOM and capture targets from a TAM
    Market {
        /// Total addressable market ($M)
        tam: i64,
        /// SAM as % of TAM
        #[arg(default_value = "50")]
        sam_percentage: f64,
        /// SOM as % of SAM
        #[arg(default_value = "30")]
        som_percentage: f64,
    },
    /// Print the dashboard
    Report {
        /// Dashboard seed file (JSON)
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Print the derived snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Initialize tracing to stderr so command output on stdout stays clean
fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_dashboard(seed: Option<&Path>) -> anyhow::Result<Dashboard> {
    match seed {
        Some(path) => Dashboard::load(path),
        None => Ok(Dashboard::seed()),
    }
}

async fn serve(port: u16, dashboard: Dashboard) -> anyhow::Result<()> {
    tracing::info!("Starting Product Compass on port {}", port);

    let app = api::create_router(AppState::new(dashboard));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    tracing::info!("Product Compass listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match AppConfig::try_load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_tracing(config.log_filter());
    if let Some(e) = config_error {
        tracing::warn!("Failed to load config, using defaults: {:#}", e);
    }
    let config = config.with_env_overrides(|key| std::env::var(key).ok());

    match cli.command {
        Some(Commands::Serve { port, seed }) => {
            let seed = seed.or(config.seed_path.clone());
            let dashboard = load_dashboard(seed.as_deref())?;
            serve(port.unwrap_or(config.port), dashboard).await?;
        }
        Some(Commands::Score {
            reach,
            impact,
            confidence,
            effort,
        }) => {
            let score = rice::compute_score(reach, impact, confidence, effort)?;
            println!("RICE Score: {}", score);
        }
        Some(Commands::Market {
            tam,
            sam_percentage,
            som_percentage,
        }) => {
            let figures = market::derive_market_sizes(tam, sam_percentage, som_percentage);
            let capture = market::project_capture(figures.som);
            print!("{}", render::render_market(&figures, &capture));
        }
        Some(Commands::Report { seed, json }) => {
            let seed = seed.or(config.seed_path.clone());
            let dashboard = load_dashboard(seed.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard.snapshot())?);
            } else {
                print!(
                    "{}",
                    render::render_report(&dashboard, &dashboard.expanded_quarters())
                );
            }
        }
        None => {
            // Default: start server
            let dashboard = load_dashboard(config.seed_path.as_deref())?;
            serve(config.port, dashboard).await?;
        }
    }

    Ok(())
}
