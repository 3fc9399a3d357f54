/// Main configuration module.
/// 
/// Re-exports submodules for game timing, input flood limits and server settings.
pub mod game;
pub mod anti_spam;
pub mod server;
