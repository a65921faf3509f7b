use backend::{build_rocket, routes::AppState, store::VoterStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting voter API server");

    let store = VoterStore::from_env().await?;
    let _ = build_rocket(AppState::new(store)).launch().await?;

    Ok(())
}
