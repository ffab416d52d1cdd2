use products_api::{build_app, ensure_schema, AppState, PgProductStore, Settings};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("products_api=info".parse()?))
        .init();

    let settings = Settings::from_env();

    // Lazy pool: an unreachable database degrades requests at the store
    // layer instead of aborting startup.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&settings.database_url)?;

    match ensure_schema(&pool).await {
        Ok(()) => tracing::info!("Conexión exitosa a la BD"),
        Err(e) => tracing::error!(error = %e, "Hubo un error al conectar a la BD"),
    }

    let state = AppState {
        store: Arc::new(PgProductStore::new(pool)),
    };
    let app = build_app(state, &settings);

    let listener = TcpListener::bind(("0.0.0.0", settings.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
