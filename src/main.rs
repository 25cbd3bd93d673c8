use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod constants;
mod controller;
mod renderable;
mod scene;
mod state;
mod timer;

use crate::constants::*;
use crate::controller::AnimationController;
use crate::scene::{Bindings, Scene};

#[derive(Parser)]
#[command(name = "marquee", about = "A circle looping along a horizontal track")]
struct Cli {
    /// Milliseconds between animation ticks
    #[arg(long, default_value_t = TICK_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    /// Start the animation immediately instead of waiting for the start control
    #[arg(long)]
    autostart: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Marquee")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Build the Scene and Bind the Controls ---
    let mut scene = Scene::build();
    let bindings = Bindings::resolve(&scene)?;

    let mut controller = AnimationController::with_interval(Duration::from_millis(cli.interval_ms));
    if cli.autostart {
        controller.start();
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());
        let mouse = rl.get_mouse_position();

        // 1. Dispatch clicks to the bound controls
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if scene.buttons[bindings.start_button].contains(mouse) {
                controller.start();
            } else if scene.buttons[bindings.stop_button].contains(mouse) {
                controller.stop();
            }
        }

        // 2. Advance the animation by however much time the frame took
        controller.update(dt, &mut scene.circles[bindings.circle]);

        // 3. Draw
        let state = controller.state();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        scene.draw(&mut d, mouse);
        d.draw_text(&format!("State: {:?}", state), 10, 10, 20, Color::WHITE);
    }

    Ok(())
}
