//! Deterministic simulation module
//!
//! All gameplay logic for both sims lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or windowing dependencies

pub mod collision;
pub mod range;
pub mod rect;
pub mod walk;

pub use collision::{
    WallHit, circle_rect_collision, circles_overlap, mirror_heading_x, mirror_heading_y, reflect,
    segment_circle_intersection,
};
pub use rect::Rect;
