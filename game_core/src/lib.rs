pub mod components;
pub mod config;
pub mod controls;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controls::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents, serve)
    ingest_inputs(world, input_queue);

    // 2. AI opponent picks its direction
    drive_ai(world, config);

    // 3. Move paddles and ball, bounce off walls, flag boundary crossings
    move_paddles(world, map);
    move_ball(world, map, events);
    check_boundaries(world, map, events);

    // 4. Check collisions (ball vs paddles)
    check_collisions(world, events);

    // 5. Award points and reset the ball
    apply_scoring(world, map, score, events, rng, config);

    time.advance();
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_x(side),
        y,
        config.paddle_width,
        config.paddle_height,
        config.paddle_speed,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity, resting until served
pub fn create_ball(world: &mut World, config: &Config, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, config.ball_radius, config.ball_speed),))
}
