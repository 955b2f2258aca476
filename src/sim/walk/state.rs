//! Swarm state and spawn logic

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::PI;

use crate::consts::*;
use crate::polar_to_cartesian;
use crate::sim::rect::Rect;

/// A wandering agent
///
/// Movement is heading + scalar speed rather than a velocity vector, so
/// collision response is a pure angle flip.
#[derive(Debug, Clone)]
pub struct Agent {
    pub id: u32,
    pub pos: Vec2,
    /// Heading in radians, normalized to [-π, π)
    pub heading: f32,
    /// Speed in px/s
    pub speed: f32,
    pub radius: f32,
    /// Ticks until the next random heading change
    pub heading_ticks: u32,
    /// Ticks until the next random speed change
    pub speed_ticks: u32,
}

impl Agent {
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        polar_to_cartesian(self.speed, self.heading)
    }
}

/// Complete swarm state (deterministic from seed)
#[derive(Debug, Clone)]
pub struct WalkState {
    pub seed: u64,
    pub rng: Pcg32,
    pub time_ticks: u64,
    pub paused: bool,
    pub agents: Vec<Agent>,
    pub walls: Vec<Rect>,
    next_id: u32,
}

impl WalkState {
    /// Create a swarm with `agent_count` agents scattered on free ground
    pub fn new(seed: u64, agent_count: usize) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            paused: false,
            agents: Vec::with_capacity(agent_count),
            walls: default_walls(),
            next_id: 1,
        };

        for _ in 0..agent_count {
            state.spawn_agent();
        }

        state
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one agent on a position clear of walls and other agents
    ///
    /// Rejection sampling with a bounded attempt count; over-crowded settings
    /// get the last sampled position instead of an infinite loop.
    fn spawn_agent(&mut self) {
        let radius = AGENT_RADIUS;
        let mut pos = Vec2::ZERO;

        let mut placed = false;
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            pos = Vec2::new(
                self.rng.random_range(radius..SCREEN_WIDTH as f32 - radius),
                self.rng.random_range(radius..SCREEN_HEIGHT as f32 - radius),
            );
            if self.position_is_free(pos, radius) {
                placed = true;
                break;
            }
        }
        if !placed {
            log::warn!("no free spawn position found after {MAX_SPAWN_ATTEMPTS} attempts");
        }

        let id = self.next_entity_id();
        let heading = self.rng.random_range(-PI..PI);
        let speed = self.rng.random_range(AGENT_MIN_SPEED..AGENT_MAX_SPEED);
        let heading_ticks = self.rng.random_range(HEADING_RETIME_MIN..=HEADING_RETIME_MAX);
        let speed_ticks = self.rng.random_range(SPEED_RETIME_MIN..=SPEED_RETIME_MAX);

        self.agents.push(Agent {
            id,
            pos,
            heading,
            speed,
            radius,
            heading_ticks,
            speed_ticks,
        });
    }

    /// True when `pos` overlaps no wall and sits a diameter clear of every agent
    fn position_is_free(&self, pos: Vec2, radius: f32) -> bool {
        if self.walls.iter().any(|w| w.overlaps_circle(pos, radius)) {
            return false;
        }
        self.agents
            .iter()
            .all(|a| pos.distance_squared(a.pos) >= (radius + a.radius).powi(2))
    }

    /// Re-roll every agent's heading
    pub fn scatter(&mut self) {
        let rng = &mut self.rng;
        for agent in &mut self.agents {
            agent.heading = rng.random_range(-PI..PI);
        }
    }
}

/// The static wall layout
fn default_walls() -> Vec<Rect> {
    vec![
        Rect::new(100.0, 100.0, 200.0, 20.0),
        Rect::new(400.0, 300.0, 20.0, 200.0),
        Rect::new(600.0, 150.0, 150.0, 20.0),
    ]
}
