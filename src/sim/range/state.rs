//! Range game state

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::PI;

use crate::consts::*;
use crate::polar_to_cartesian;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Clock is running, everything moves
    Running,
    /// Frozen mid-round
    Paused,
    /// Time limit reached
    Over,
}

/// The player-controlled agent
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Aim direction in radians
    pub aim: f32,
    pub radius: f32,
    /// Trigger latch; a held trigger fires exactly once
    pub fire_latched: bool,
}

impl Player {
    /// Where shots leave the barrel
    #[inline]
    pub fn muzzle(&self) -> Vec2 {
        self.pos + polar_to_cartesian(self.radius, self.aim)
    }
}

/// A shot in flight: a short segment moving along its own axis
#[derive(Debug, Clone)]
pub struct Shot {
    pub id: u32,
    pub tail: Vec2,
    pub head: Vec2,
    pub vel: Vec2,
}

/// A straight-line wanderer the player scores by hitting
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub radius: f32,
}

impl Enemy {
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        polar_to_cartesian(self.speed, self.heading)
    }
}

/// A stationary target
#[derive(Debug, Clone)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

/// Complete range state (deterministic from seed)
#[derive(Debug, Clone)]
pub struct RangeState {
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: Phase,
    pub time_ticks: u64,
    /// Ticks remaining before the round ends
    pub ticks_left: u32,
    /// Full round length in ticks, for display fractions
    pub round_ticks: u32,
    pub score: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub targets: Vec<Target>,
    pub shots: Vec<Shot>,
    next_id: u32,
}

impl RangeState {
    /// Create a round with the given entity counts and time limit
    pub fn new(seed: u64, enemy_count: usize, target_count: usize, time_limit_secs: f32) -> Self {
        let round_ticks = (time_limit_secs / SIM_DT).round() as u32;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Running,
            time_ticks: 0,
            ticks_left: round_ticks,
            round_ticks,
            score: 0,
            player: Player {
                pos: Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 - 50.0),
                aim: 0.0,
                radius: PLAYER_RADIUS,
                fire_latched: false,
            },
            enemies: Vec::with_capacity(enemy_count),
            targets: Vec::with_capacity(target_count),
            shots: Vec::new(),
            next_id: 1,
        };

        for _ in 0..enemy_count {
            state.spawn_enemy();
        }
        for _ in 0..target_count {
            state.spawn_target();
        }

        state
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Random point in the spawn band (clear of the player's start area)
    fn spawn_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng
                .random_range(SPAWN_MARGIN..SCREEN_WIDTH as f32 - SPAWN_MARGIN),
            self.rng
                .random_range(SPAWN_MARGIN..SCREEN_HEIGHT as f32 - SPAWN_BOTTOM_MARGIN),
        )
    }

    fn spawn_enemy(&mut self) {
        let pos = self.spawn_point();
        let heading = self.rng.random_range(-PI..PI);
        let speed = self.rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos,
            heading,
            speed,
            radius: ENEMY_RADIUS,
        });
    }

    fn spawn_target(&mut self) {
        let pos = self.spawn_point();
        let id = self.next_entity_id();
        self.targets.push(Target {
            id,
            pos,
            radius: TARGET_RADIUS,
        });
    }

    /// Fire one shot from the muzzle along the current aim
    pub fn spawn_shot(&mut self) {
        let muzzle = self.player.muzzle();
        let id = self.next_entity_id();
        self.shots.push(Shot {
            id,
            tail: muzzle,
            head: muzzle + polar_to_cartesian(SHOT_LENGTH, self.player.aim),
            vel: polar_to_cartesian(SHOT_SPEED, self.player.aim),
        });
    }

    /// Seconds left on the clock
    pub fn remaining_secs(&self) -> f32 {
        self.ticks_left as f32 * SIM_DT
    }

    /// Remaining fraction of the round, 1.0 at start down to 0.0
    pub fn time_fraction(&self) -> f32 {
        if self.round_ticks == 0 {
            return 0.0;
        }
        self.ticks_left as f32 / self.round_ticks as f32
    }
}
