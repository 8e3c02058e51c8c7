use std::sync::Arc;

use authgate_api::app::{AppConfig, build_app};
use authgate_core::{Identity, Role, Subject};
use authgate_infra::InMemoryDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    authgate_observability::init();

    let config = AppConfig::from_env();
    let directory = Arc::new(seed_dev_directory()?);
    let app = build_app(&config, directory);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Development accounts, one per role tier. Replace the directory wiring to
/// integrate a real credential store.
fn seed_dev_directory() -> anyhow::Result<InMemoryDirectory> {
    let directory = InMemoryDirectory::new();
    directory.upsert(
        Identity::new(Subject::new("user"), vec![Role::USER]),
        "password",
    )?;
    directory.upsert(
        Identity::new(Subject::new("moderator"), vec![Role::MODERATOR]),
        "password",
    )?;
    directory.upsert(
        Identity::new(Subject::new("admin"), vec![Role::ADMIN]),
        "password",
    )?;
    tracing::info!("seeded development accounts");
    Ok(directory)
}
