//! Headless Walk Demo
//!
//! Run with: `cargo run --bin walk-demo`
//!
//! Drives the walk controller over a scripted world with no window or
//! renderer attached: a flat floor with a tall wall band across the path.
//! The script walks forward until the wall blocks it, jumps, clears the wall
//! while still holding forward, lands on the far side and keeps walking.
//! Avatar state is printed once per simulated second.
//!
//! Set `RUST_LOG=warn` to see resolver diagnostics, should any fire.

use glam::Vec3;
use voxel_walker_engine::world::ColumnField;
use voxel_walker_engine::{InputState, WalkController};

/// Simulated frame time in milliseconds.
const FRAME_MS: f32 = 16.0;
const FRAMES_PER_SECOND: u32 = 60;

/// Flat floor at 0 with a 50-high wall band from z = -200 to z = -20.
fn build_world() -> ColumnField {
    let mut field = ColumnField::new(0.0);
    for x in -20..20 {
        for z in -200..-20 {
            field.set(x, z, 50.0);
        }
    }
    field
}

fn main() {
    env_logger::init();

    let field = build_world();
    let mut controller = WalkController::new();
    controller.set_position(Vec3::new(0.0, 2.0, 0.0));
    controller.enable();

    println!("[WalkDemo] spawn at {:?}", controller.position());

    let mut input = InputState::new();
    input.set_forward(true);

    for frame in 0..(20 * FRAMES_PER_SECOND) {
        // Jump a few seconds in, once the wall has stopped us
        if frame == 3 * FRAMES_PER_SECOND {
            input.set_jump(true);
        }
        if frame == 3 * FRAMES_PER_SECOND + 5 {
            input.set_jump(false);
        }

        controller.update(FRAME_MS, &input, &field);
        input.end_frame();

        if frame % FRAMES_PER_SECOND == 0 {
            let position = controller.position();
            println!(
                "[WalkDemo] t={:>2}s position=({:>8.2}, {:>6.2}, {:>8.2}) grounded={}",
                frame / FRAMES_PER_SECOND,
                position.x,
                position.y,
                position.z,
                controller.is_grounded()
            );
        }
    }

    println!("[WalkDemo] finished at {:?}", controller.position());
}
