//! Target-range simulation
//!
//! A player-controlled agent fires at wandering enemies and static targets
//! inside a fixed time limit. Shots are short line segments tested against
//! circles.

pub mod state;
pub mod tick;

pub use state::{Enemy, Phase, Player, RangeState, Shot, Target};
pub use tick::{RangeInput, tick};
