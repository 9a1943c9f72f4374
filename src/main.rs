// ABOUTME: Main entry point for the perfumeria webapp with session login and a cart API
// ABOUTME: Sets up the router, database storage, and background session cleanup

use axum::{
    Router,
    extract::State,
    response::{Html, Json},
    routing::{delete, get, post},
};
use axum_extra::extract::cookie::CookieJar;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

mod auth;
mod cart;
mod entities;
mod error;
mod migration;
mod session;
mod storage;
mod types;

#[cfg(test)]
mod storage_tests;

use error::Result;
use session::SessionStore;
use storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Storage>,
    pub sessions: SessionStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(login_page))
        .route("/shop.html", get(shop_page))
        .route("/cart.html", get(cart_page))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/perfumes", get(list_perfumes))
        .route("/api/cart", get(cart::get_cart).post(cart::add_to_cart))
        .route("/api/cart/:item_id", delete(cart::remove_item))
        .route("/api/checkout", post(cart::checkout))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perfumeria=debug,tower_http=info".into()),
        )
        .init();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:perfumeria.db?mode=rwc".to_string());
    let storage = Arc::new(Storage::new(&database_url).await?);

    let sessions = SessionStore::new();
    spawn_session_sweeper(sessions.clone());

    let app = router(AppState { storage, sessions });

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

fn spawn_session_sweeper(sessions: SessionStore) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(3600));
        loop {
            interval.tick().await;
            sessions.cleanup_expired_sessions(session::SESSION_MAX_AGE);
        }
    });
}

async fn login_page() -> Html<&'static str> {
    Html(include_str!("../static/login.html"))
}

async fn shop_page() -> Html<&'static str> {
    Html(include_str!("../static/shop.html"))
}

async fn cart_page() -> Html<&'static str> {
    Html(include_str!("../static/cart.html"))
}

async fn list_perfumes(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Vec<entities::perfume::Model>>> {
    session::extract_session_from_jar(&jar, &state.sessions)?;

    let perfumes = state.storage.list_perfumes().await?;
    Ok(Json(perfumes))
}
