//! Terminal front end for playing against the minimax engine.
//!
//! [`Game`] keeps the session state and validates player input;
//! [`PlayConfig`] decides who plays which side and how deep the engine
//! and the hints search.

mod config;
mod game;

pub use config::*;
pub use game::*;
