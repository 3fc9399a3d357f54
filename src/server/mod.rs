// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (session lifecycle, timers, player actions)
//! - Input flood protection and socket error helpers

pub mod state;
pub mod router;
pub mod game_session;
pub mod ws_error;
pub mod anti_spam;
pub mod ws_actor_utils;
