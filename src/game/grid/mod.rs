//! Grid module.
//!
//! This module builds slot grids and picks spawn targets.

pub mod grid;

pub use grid::*;
