//! Pokédex Server - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod infrastructure;
mod services;

use app::{App, Repositories};
use infrastructure::memory::{MemoryCreatureRepo, MemoryTrainerRepo};
use infrastructure::neo4j::{ensure_schema, Neo4jRepositories};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from the repo root when a .env file is present.
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pokédex server");

    // Load configuration
    let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    // Bind the storage backend once; services only ever see the ports.
    let repos = match backend.as_str() {
        "neo4j" => {
            let uri =
                std::env::var("NEO4J_URI").unwrap_or_else(|_| "bolt://localhost:7687".into());
            let user = std::env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".into());
            let pass = std::env::var("NEO4J_PASSWORD").unwrap_or_else(|_| "password".into());

            tracing::info!("Connecting to Neo4j at {}", uri);
            let graph = neo4rs::Graph::new(&uri, &user, &pass).await?;
            ensure_schema(&graph).await?;

            let neo4j = Neo4jRepositories::new(graph);
            Repositories {
                trainer: neo4j.trainer,
                creature: neo4j.creature,
            }
        }
        _ => {
            tracing::info!("Using in-memory storage; data will not survive a restart");
            Repositories {
                trainer: Arc::new(MemoryTrainerRepo::new()),
                creature: Arc::new(MemoryCreatureRepo::new()),
            }
        }
    };

    let app = Arc::new(App::new(repos));

    // CORS - the frontend may be served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = api::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app);

    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
