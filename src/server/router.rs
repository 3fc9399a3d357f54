//! HTTP and WebSocket routing configuration.
//!
//! Each game connection is handled by a dedicated WebSocket actor.

use actix_web::web;
use crate::server::game_session::session::ws_game;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_game)
    );
}
