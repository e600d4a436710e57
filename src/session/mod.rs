//! Turn protocol between one authoritative controller and two peers.
//!
//! The [`Controller`] owns the [`crate::rules::Game`] and answers
//! [`Request`]s. Each [`Peer`] drives a [`Player`] through the [`Phase`]
//! cycle, animating every shot locally before adopting the controller's
//! settled board. [`Match`] wires all three together over in-process
//! channels; the [`Server`] and [`Client`] traits are the seams a network
//! transport would plug into.
mod animation;
mod arena;
mod controller;
mod event;
mod message;
mod peer;
mod phase;
mod player;
mod protocol;

pub use animation::*;
pub use arena::*;
pub use controller::*;
pub use event::*;
pub use message::*;
pub use peer::*;
pub use phase::*;
pub use player::*;
pub use protocol::*;
