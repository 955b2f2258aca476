//! Fixed timestep update for the range

use crate::consts::*;
use crate::normalize_angle;
use crate::sim::collision::{mirror_heading_x, mirror_heading_y, segment_circle_intersection};

use super::state::{Phase, RangeState};

/// Input state for a single tick
///
/// Movement and trigger fields are held state sampled from the keyboard;
/// `pause` is one-shot.
#[derive(Debug, Clone, Default)]
pub struct RangeInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Trigger held; the latch in `Player` makes it edge-triggered
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the round by one fixed timestep
pub fn tick(state: &mut RangeState, input: &RangeInput, dt: f32) {
    if input.pause {
        match state.phase {
            Phase::Running => {
                state.phase = Phase::Paused;
                return;
            }
            Phase::Paused => state.phase = Phase::Running,
            Phase::Over => {}
        }
    }

    if state.phase != Phase::Running {
        return;
    }

    state.time_ticks += 1;
    state.ticks_left = state.ticks_left.saturating_sub(1);
    if state.ticks_left == 0 {
        state.phase = Phase::Over;
        return;
    }

    move_player(state, input, dt);
    handle_trigger(state, input);
    advance_enemies(state, dt);
    advance_shots(state, dt);
    resolve_hits(state);
}

/// Axis movement (each axis independent), screen clamp, and aim rotation
fn move_player(state: &mut RangeState, input: &RangeInput, dt: f32) {
    let player = &mut state.player;

    if input.up {
        player.pos.y -= PLAYER_SPEED * dt;
    }
    if input.down {
        player.pos.y += PLAYER_SPEED * dt;
    }
    if input.left {
        player.pos.x -= PLAYER_SPEED * dt;
    }
    if input.right {
        player.pos.x += PLAYER_SPEED * dt;
    }

    player.pos.x = player
        .pos
        .x
        .clamp(player.radius, SCREEN_WIDTH as f32 - player.radius);
    player.pos.y = player
        .pos
        .y
        .clamp(player.radius, SCREEN_HEIGHT as f32 - player.radius);

    if input.turn_left {
        player.aim = normalize_angle(player.aim - TURN_RATE * dt);
    }
    if input.turn_right {
        player.aim = normalize_angle(player.aim + TURN_RATE * dt);
    }
}

/// Latched firing: one shot per trigger press
fn handle_trigger(state: &mut RangeState, input: &RangeInput) {
    if input.fire && !state.player.fire_latched {
        state.spawn_shot();
        state.player.fire_latched = true;
    }
    if !input.fire {
        state.player.fire_latched = false;
    }
}

/// Enemies travel in straight lines and reflect off the screen edges
fn advance_enemies(state: &mut RangeState, dt: f32) {
    let width = SCREEN_WIDTH as f32;
    let height = SCREEN_HEIGHT as f32;

    for enemy in &mut state.enemies {
        enemy.pos += enemy.velocity() * dt;

        if enemy.pos.x - enemy.radius < 0.0 || enemy.pos.x + enemy.radius > width {
            enemy.heading = mirror_heading_x(enemy.heading);
            enemy.pos.x = enemy.pos.x.clamp(enemy.radius, width - enemy.radius);
        }
        if enemy.pos.y - enemy.radius < 0.0 || enemy.pos.y + enemy.radius > height {
            enemy.heading = mirror_heading_y(enemy.heading);
            enemy.pos.y = enemy.pos.y.clamp(enemy.radius, height - enemy.radius);
        }
    }
}

/// Move shots along their axis, culling once the head leaves the screen
fn advance_shots(state: &mut RangeState, dt: f32) {
    let width = SCREEN_WIDTH as f32;
    let height = SCREEN_HEIGHT as f32;

    for shot in &mut state.shots {
        let step = shot.vel * dt;
        shot.tail += step;
        shot.head += step;
    }

    state.shots.retain(|s| {
        s.head.x >= 0.0 && s.head.x <= width && s.head.y >= 0.0 && s.head.y <= height
    });
}

/// Segment-vs-circle hit resolution
///
/// Enemies are checked before targets; a shot is spent on its first victim.
fn resolve_hits(state: &mut RangeState) {
    let mut i = 0;
    while i < state.shots.len() {
        let (tail, head) = (state.shots[i].tail, state.shots[i].head);

        if let Some(idx) = state
            .enemies
            .iter()
            .position(|e| segment_circle_intersection(tail, head, e.pos, e.radius).is_some())
        {
            state.enemies.remove(idx);
            state.shots.remove(i);
            state.score += 1;
            continue;
        }

        if let Some(idx) = state
            .targets
            .iter()
            .position(|t| segment_circle_intersection(tail, head, t.pos, t.radius).is_some())
        {
            state.targets.remove(idx);
            state.shots.remove(i);
            state.score += 1;
            continue;
        }

        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::range::state::{Enemy, Shot, Target};
    use glam::Vec2;

    fn empty_range() -> RangeState {
        RangeState::new(1, 0, 0, 60.0)
    }

    fn held(f: impl Fn(&mut RangeInput)) -> RangeInput {
        let mut input = RangeInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let mut state = empty_range();
        let input = held(|i| i.left = true);
        // Long enough to reach the wall
        for _ in 0..2000 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.player.pos.x, state.player.radius);

        let input = held(|i| i.down = true);
        for _ in 0..2000 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(
            state.player.pos.y,
            SCREEN_HEIGHT as f32 - state.player.radius
        );
    }

    #[test]
    fn test_diagonal_moves_both_axes() {
        let mut state = empty_range();
        let start = state.player.pos;
        let input = held(|i| {
            i.up = true;
            i.left = true;
        });
        tick(&mut state, &input, SIM_DT);
        assert!(state.player.pos.x < start.x);
        assert!(state.player.pos.y < start.y);
    }

    #[test]
    fn test_aim_turns() {
        let mut state = empty_range();
        let input = held(|i| i.turn_right = true);
        tick(&mut state, &input, SIM_DT);
        assert!((state.player.aim - TURN_RATE * SIM_DT).abs() < 1e-5);

        let input = held(|i| i.turn_left = true);
        tick(&mut state, &input, SIM_DT);
        tick(&mut state, &input, SIM_DT);
        assert!((state.player.aim + TURN_RATE * SIM_DT).abs() < 1e-5);
    }

    #[test]
    fn test_held_trigger_fires_once() {
        let mut state = empty_range();
        let firing = held(|i| i.fire = true);
        for _ in 0..10 {
            tick(&mut state, &firing, SIM_DT);
        }
        assert_eq!(state.shots.len(), 1);

        // Release, then press again
        tick(&mut state, &RangeInput::default(), SIM_DT);
        tick(&mut state, &firing, SIM_DT);
        assert_eq!(state.shots.len(), 2);
    }

    #[test]
    fn test_shots_advance_and_cull() {
        let mut state = empty_range();
        state.player.aim = 0.0;
        state.spawn_shot();
        let head_before = state.shots[0].head;

        tick(&mut state, &RangeInput::default(), SIM_DT);
        assert!((state.shots[0].head.x - (head_before.x + SHOT_SPEED * SIM_DT)).abs() < 1e-3);

        // Ride it off the right edge
        for _ in 0..200 {
            tick(&mut state, &RangeInput::default(), SIM_DT);
        }
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_shot_kills_enemy_and_scores() {
        let mut state = empty_range();
        state.enemies.push(Enemy {
            id: 100,
            pos: Vec2::new(300.0, 200.0),
            heading: 0.0,
            speed: 0.0,
            radius: ENEMY_RADIUS,
        });
        state.shots.push(Shot {
            id: 101,
            tail: Vec2::new(290.0, 200.0),
            head: Vec2::new(300.0, 200.0),
            vel: Vec2::ZERO,
        });

        tick(&mut state, &RangeInput::default(), SIM_DT);
        assert!(state.enemies.is_empty());
        assert!(state.shots.is_empty());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_shot_spent_on_enemy_before_target() {
        let mut state = empty_range();
        let pos = Vec2::new(300.0, 200.0);
        state.enemies.push(Enemy {
            id: 100,
            pos,
            heading: 0.0,
            speed: 0.0,
            radius: ENEMY_RADIUS,
        });
        state.targets.push(Target {
            id: 101,
            pos,
            radius: TARGET_RADIUS,
        });
        state.shots.push(Shot {
            id: 102,
            tail: pos - Vec2::new(10.0, 0.0),
            head: pos,
            vel: Vec2::ZERO,
        });

        tick(&mut state, &RangeInput::default(), SIM_DT);
        assert!(state.enemies.is_empty());
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_shot_hits_static_target() {
        let mut state = empty_range();
        state.targets.push(Target {
            id: 100,
            pos: Vec2::new(300.0, 200.0),
            radius: TARGET_RADIUS,
        });
        state.shots.push(Shot {
            id: 101,
            tail: Vec2::new(290.0, 200.0),
            head: Vec2::new(300.0, 200.0),
            vel: Vec2::ZERO,
        });

        tick(&mut state, &RangeInput::default(), SIM_DT);
        assert!(state.targets.is_empty());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_timer_expiry_ends_round() {
        let mut state = empty_range();
        state.ticks_left = 1;
        tick(&mut state, &RangeInput::default(), SIM_DT);
        assert_eq!(state.phase, Phase::Over);

        // Further ticks are no-ops
        let ticks = state.time_ticks;
        tick(&mut state, &RangeInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_pause_toggles_and_freezes() {
        let mut state = empty_range();
        tick(&mut state, &held(|i| i.pause = true), SIM_DT);
        assert_eq!(state.phase, Phase::Paused);

        let ticks_left = state.ticks_left;
        for _ in 0..10 {
            tick(&mut state, &RangeInput::default(), SIM_DT);
        }
        assert_eq!(state.ticks_left, ticks_left);

        tick(&mut state, &held(|i| i.pause = true), SIM_DT);
        assert_eq!(state.phase, Phase::Running);
        tick(&mut state, &RangeInput::default(), SIM_DT);
        assert!(state.ticks_left < ticks_left);
    }

    #[test]
    fn test_enemies_reflect_at_edges() {
        let mut state = empty_range();
        state.enemies.push(Enemy {
            id: 100,
            pos: Vec2::new(SCREEN_WIDTH as f32 - ENEMY_RADIUS - 0.5, 300.0),
            heading: 0.0,
            speed: 120.0,
            radius: ENEMY_RADIUS,
        });
        tick(&mut state, &RangeInput::default(), SIM_DT);
        let enemy = &state.enemies[0];
        assert!(enemy.heading.cos() < 0.0);
        assert!(enemy.pos.x + enemy.radius <= SCREEN_WIDTH as f32);
    }
}
