pub mod server;
pub mod session;
pub mod messages;
pub mod cycles;

pub use server::{GameSession, GameSessionManager};
