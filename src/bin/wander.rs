//! Wandering swarm visualizer
//!
//! A set of agents random-walks around three static walls. Keys: `P` pause,
//! `R` scatter (re-roll every heading), `Esc` quit.

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::Instant;

use swarm_range::consts::*;
use swarm_range::raster::{self, Frame};
use swarm_range::sim::walk::{WalkInput, WalkState, tick};
use swarm_range::{Settings, clock_seed, polar_to_cartesian};

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!(
        "wander starting: {} agents, seed {seed}",
        settings.agent_count
    );

    let mut state = WalkState::new(seed, settings.agent_count);
    let mut frame = Frame::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    let mut window = Window::new(
        "Wandering Swarm",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        WindowOptions::default(),
    )
    .expect("failed to create window");
    window.set_target_fps(TARGET_FPS);

    let mut input = WalkInput::default();
    let mut accumulator = 0.0f32;
    let mut last = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;

        if window.is_key_pressed(Key::P, KeyRepeat::No) {
            input.pause = true;
        }
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            input.scatter = true;
        }

        accumulator += dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, SIM_DT);
            // Clear one-shot inputs after processing
            input.pause = false;
            input.scatter = false;
            accumulator -= SIM_DT;
            substeps += 1;
        }

        draw(&mut frame, &state, &settings);
        window
            .update_with_buffer(frame.buffer(), SCREEN_WIDTH, SCREEN_HEIGHT)
            .expect("failed to present frame");
    }
}

fn draw(frame: &mut Frame, state: &WalkState, settings: &Settings) {
    frame.clear(raster::WHITE);

    for wall in &state.walls {
        frame.fill_rect(wall, raster::BLACK);
    }

    for agent in &state.agents {
        frame.fill_circle(agent.pos, agent.radius, raster::RED);
        if settings.show_headings {
            let tip = agent.pos + polar_to_cartesian(agent.radius * 2.0, agent.heading);
            frame.line(agent.pos, tip, raster::BLACK);
        }
    }
}
