//! Game core.
//!
//! Pure session state and transitions; no timers and no I/O live here.

pub mod types;
pub mod error;
pub mod state;
pub mod layout;
pub mod grid;

pub use error::GameError;
pub use state::{Session, SessionSnapshot};
