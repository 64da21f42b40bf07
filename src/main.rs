use tower_http::trace::TraceLayer;

use voltmarket::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    startup::install_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();

    tracing::info!("Starting server on http://{}", config.listen_addr);

    let app = router::routes()
        .with_state(AppState { db })
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();
}
