//! Core types shared across the crate: players and deterministic RNG.

pub mod player;
pub mod rng;

pub use player::Player;
pub use rng::SearchRng;
