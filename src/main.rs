use course_catalog::api::router;
use course_catalog::catalog::CatalogState;
use course_catalog::config::AppConfig;
use course_catalog::loader;
use course_catalog::state::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_catalog=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let courses = loader::load_courses(&config.data_path)?;
    let addr = config.bind_addr;
    let state = AppState::new(CatalogState::new(courses), config);

    let app = router(state);

    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
