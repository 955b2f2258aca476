//! Target range
//!
//! Move with WASD, turn the aim with the arrow keys, fire with Space. Hitting
//! a wandering enemy or a static target scores a point; the round ends when
//! the clock runs out. `P` pauses, `Esc` quits early.

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::Instant;

use swarm_range::consts::*;
use swarm_range::raster::{self, Frame};
use swarm_range::sim::Rect;
use swarm_range::sim::range::{Phase, RangeInput, RangeState, tick};
use swarm_range::{Settings, clock_seed, polar_to_cartesian};

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!(
        "range starting: {} enemies, {} targets, {:.0}s limit, seed {seed}",
        settings.enemy_count,
        settings.target_count,
        settings.time_limit_secs
    );

    let mut state = RangeState::new(
        seed,
        settings.enemy_count,
        settings.target_count,
        settings.time_limit_secs,
    );
    let mut frame = Frame::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    let mut window = Window::new(
        "Target Range",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        WindowOptions::default(),
    )
    .expect("failed to create window");
    window.set_target_fps(TARGET_FPS);

    let mut input = RangeInput::default();
    let mut accumulator = 0.0f32;
    let mut last = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;

        input.up = window.is_key_down(Key::W);
        input.down = window.is_key_down(Key::S);
        input.left = window.is_key_down(Key::A);
        input.right = window.is_key_down(Key::D);
        input.turn_left = window.is_key_down(Key::Left);
        input.turn_right = window.is_key_down(Key::Right);
        input.fire = window.is_key_down(Key::Space);
        if window.is_key_pressed(Key::P, KeyRepeat::No) {
            input.pause = true;
        }

        accumulator += dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, SIM_DT);
            // Clear one-shot inputs after processing
            input.pause = false;
            accumulator -= SIM_DT;
            substeps += 1;
        }

        if state.phase == Phase::Over {
            break;
        }

        draw(&mut frame, &state);
        window
            .update_with_buffer(frame.buffer(), SCREEN_WIDTH, SCREEN_HEIGHT)
            .expect("failed to present frame");
    }

    log::info!("final score: {}", state.score);
}

fn draw(frame: &mut Frame, state: &RangeState) {
    frame.clear(raster::BLACK);

    for target in &state.targets {
        frame.fill_circle(target.pos, target.radius, raster::YELLOW);
    }
    for enemy in &state.enemies {
        frame.fill_circle(enemy.pos, enemy.radius, raster::RED);
    }
    for shot in &state.shots {
        frame.line(shot.tail, shot.head, raster::WHITE);
    }

    let player = &state.player;
    frame.fill_circle(player.pos, player.radius, raster::BLUE);
    let gun_tip = player.pos + polar_to_cartesian(player.radius + GUN_LENGTH, player.aim);
    frame.line(player.pos, gun_tip, raster::WHITE);

    // Remaining-time bar across the top
    let bar_width = SCREEN_WIDTH as f32 * state.time_fraction();
    frame.fill_rect(&Rect::new(0.0, 0.0, bar_width, 4.0), raster::GRAY);
}
