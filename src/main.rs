use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use personnel_manager::api::{AppState, create_router};
use personnel_manager::config::ConfigLoader;
use personnel_manager::service::EmployeeService;
use personnel_manager::store::InMemoryStore;
use personnel_manager::validation::RegistrationPolicy;

const DEFAULT_CONFIG_PATH: &str = "config/registration.yaml";

#[derive(Parser, Debug)]
#[command(name = "personnel-server", version, about = "Personnel registration HTTP server")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "PERSONNEL_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Listen address, overrides `server.bind` from the configuration
    #[arg(long, env = "PERSONNEL_BIND")]
    bind: Option<String>,
}

fn load_config(path: &Path) -> anyhow::Result<ConfigLoader> {
    // A missing default file is fine; an explicitly named one is not.
    if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
        warn!(path = %path.display(), "Config file not found, using defaults");
        return Ok(ConfigLoader::default());
    }
    ConfigLoader::load(path).with_context(|| format!("loading {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let policy = RegistrationPolicy::from_rules(config.rules())?;

    let service = EmployeeService::new(Arc::new(InMemoryStore::new()), policy);
    let router = create_router(AppState::new(service));

    let bind = cli.bind.unwrap_or_else(|| config.server().bind.clone());
    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {}", bind))?;

    info!(
        bind = %bind,
        min_hire_year = config.rules().min_hire_year,
        hire_horizon_months = config.rules().hire_horizon_months,
        name_pattern = config.rules().name_pattern.as_deref().unwrap_or("disabled"),
        "Personnel server listening"
    );
    axum::serve(listener, router).await?;
    Ok(())
}
