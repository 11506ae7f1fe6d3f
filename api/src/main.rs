mod relay_utils;
mod text_payload;

use relay_utils::{app, RelayState, DEFAULT_BACKEND_URL};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let backend_url =
        std::env::var("BACKEND_API_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
    println!("Relaying submissions to {}", backend_url);

    let state = Arc::new(RelayState::new(backend_url));
    let app = app(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
