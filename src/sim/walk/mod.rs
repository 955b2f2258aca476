//! Wandering-swarm simulation
//!
//! A set of agents random-walk around a field of static rectangular walls,
//! bouncing off the screen edges, the walls, and each other.

pub mod state;
pub mod tick;

pub use state::{Agent, WalkState};
pub use tick::{WalkInput, tick};
