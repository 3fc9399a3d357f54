// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the game session manager so HTTP/WebSocket handlers can reach it.

use actix::Addr;
use crate::server::game_session::server::GameSessionManager;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game session manager actor (creates and tears down sessions).
    pub game_session_manager: Addr<GameSessionManager>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(game_session_manager: Addr<GameSessionManager>) -> Self {
        AppState {
            game_session_manager,
        }
    }
}
