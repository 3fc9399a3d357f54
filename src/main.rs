//! Main entry point for the backend server.
//!
//! Initializes logging and the actor system, then launches the HTTP server
//! with the WebSocket endpoint browser clients play through.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;
use server::game_session::GameSessionManager;

pub mod config;
mod server;
mod game;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start the GameSessionManager actor (owns every live game session).
    let game_session_manager = GameSessionManager::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_session_manager));

    let bind_addr = config::server::bind_address();
    info!("[Server] listening on {}", bind_addr);

    // Start the HTTP server with the WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
