use std::net::SocketAddr;

use board::server::{
    app::build_app, config::Config, data::session::DbSessionStore, error::Error, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;

    let session_store = DbSessionStore::new(db.clone());
    startup::spawn_session_cleanup(session_store.clone());

    let state = startup::build_state(config, db).await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = build_app(state, session_store)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
