//! Fixed timestep update for the swarm

use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

use super::state::{Agent, WalkState};
use crate::consts::*;
use crate::normalize_angle;
use crate::sim::collision::{
    circle_rect_collision, circles_overlap, mirror_heading_x, mirror_heading_y,
};

/// Input commands for a single tick (all one-shot)
#[derive(Debug, Clone, Default)]
pub struct WalkInput {
    /// Toggle pause
    pub pause: bool,
    /// Re-roll every agent's heading
    pub scatter: bool,
}

/// Advance the swarm by one fixed timestep
pub fn tick(state: &mut WalkState, input: &WalkInput, dt: f32) {
    if input.pause {
        state.paused = !state.paused;
    }
    if state.paused {
        return;
    }
    if input.scatter {
        state.scatter();
    }

    state.time_ticks += 1;

    integrate_and_wander(state, dt);
    resolve_wall_collisions(state);
    resolve_agent_collisions(&mut state.agents);
}

/// Kinematic step: move along the heading, reflect off screen edges, and
/// count down the random-walk retimers.
fn integrate_and_wander(state: &mut WalkState, dt: f32) {
    let width = SCREEN_WIDTH as f32;
    let height = SCREEN_HEIGHT as f32;

    for agent in state.agents.iter_mut() {
        agent.pos += agent.velocity() * dt;

        if agent.pos.x - agent.radius < 0.0 || agent.pos.x + agent.radius > width {
            agent.heading = mirror_heading_x(agent.heading);
            agent.pos.x = agent.pos.x.clamp(agent.radius, width - agent.radius);
        }
        if agent.pos.y - agent.radius < 0.0 || agent.pos.y + agent.radius > height {
            agent.heading = mirror_heading_y(agent.heading);
            agent.pos.y = agent.pos.y.clamp(agent.radius, height - agent.radius);
        }

        agent.heading_ticks = agent.heading_ticks.saturating_sub(1);
        if agent.heading_ticks == 0 {
            agent.heading = state.rng.random_range(-PI..PI);
            agent.heading_ticks = state
                .rng
                .random_range(HEADING_RETIME_MIN..=HEADING_RETIME_MAX);
        }

        agent.speed_ticks = agent.speed_ticks.saturating_sub(1);
        if agent.speed_ticks == 0 {
            agent.speed = state.rng.random_range(AGENT_MIN_SPEED..AGENT_MAX_SPEED);
            agent.speed_ticks = state.rng.random_range(SPEED_RETIME_MIN..=SPEED_RETIME_MAX);
        }
    }
}

/// Bounce agents off the static walls: push out along the hit normal, then
/// mirror the heading across the dominant axis of that normal.
fn resolve_wall_collisions(state: &mut WalkState) {
    for agent in state.agents.iter_mut() {
        for wall in state.walls.iter() {
            if let Some(hit) = circle_rect_collision(agent.pos, agent.radius, wall) {
                agent.pos += hit.normal * hit.penetration;
                if hit.normal.x.abs() >= hit.normal.y.abs() {
                    agent.heading = mirror_heading_x(agent.heading);
                } else {
                    agent.heading = mirror_heading_y(agent.heading);
                }
            }
        }
    }
}

/// Separate overlapping pairs and send both agents directly apart
fn resolve_agent_collisions(agents: &mut [Agent]) {
    for i in 0..agents.len() {
        for j in i + 1..agents.len() {
            let (head, tail) = agents.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if !circles_overlap(a.pos, a.radius, b.pos, b.radius) {
                continue;
            }

            let away = a.pos - b.pos;
            let dir = if away.length_squared() > 1e-6 {
                away.normalize()
            } else {
                Vec2::X
            };

            let apart = dir.y.atan2(dir.x);
            a.heading = normalize_angle(apart);
            b.heading = normalize_angle(apart + PI);

            let overlap = a.radius + b.radius - away.length();
            a.pos += dir * (overlap / 2.0);
            b.pos -= dir * (overlap / 2.0);
        }
    }
}
