use axum::{
    http::{HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde_json::json;
use std::time::Instant;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

mod controllers;
mod db;
mod models;
mod routes;
mod state;
mod utils;

use utils::name_cache::InMemoryNameCache;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database = match db::connection::init_db().await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let name_cache = Arc::new(InMemoryNameCache::default());

    let app_state = state::AppState::new(database, name_cache);

    let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| {
        eprintln!("CORS_ORIGIN environment variable not set");
        std::process::exit(1);
    });

    let origin = cors_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        eprintln!("Failed to parse CORS origin: {}", cors_origin);
        std::process::exit(1);
    });

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let app = Router::new()
        .route("/", get(root))
        .nest("/api/campaigns", routes::campaign_routes::campaign_routes(app_state))
        .layer(cors);

    let server_addr =
        std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let addr: SocketAddr = server_addr.parse().unwrap_or_else(|_| {
        eprintln!("Failed to parse SERVER_ADDR: {}", server_addr);
        std::process::exit(1);
    });

    println!("Server running at http://{}", addr);
    println!("CORS origin: {}", cors_origin);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn root() -> Json<serde_json::Value> {
    let seconds = START_TIME.elapsed().as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;

    let uptime_message = if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    };

    Json(json!({
        "status": "ok",
        "message": format!("QuestTime backend is running! Uptime: {}", uptime_message)
    }))
}
