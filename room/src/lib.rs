//! Server for a turn-based draw-and-guess party game.
//!
//! One player per round draws while the others guess the hidden word over a
//! websocket text protocol. A single room task owns the roster, the scores and
//! the round timer; every connection is a session that forwards frames to it.

mod consts;
mod player;
mod types;

pub mod error;
pub mod listener;
pub mod logger;
pub mod room;

pub use error::{RoomError, RoomResult};
pub use room::{Config, WordPool};
