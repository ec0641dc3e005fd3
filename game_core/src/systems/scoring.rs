use crate::{Ball, Config, Events, GameMap, GameRng, Score};
use hecs::World;
use tracing::debug;

/// Flag a point when an armed ball leaves through the left or right edge.
///
/// The latch is disarmed on the first crossing so a ball lingering out of
/// bounds is only counted once.
pub fn check_boundaries(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.armed {
            continue;
        }
        if ball.pos.x <= 0.0 {
            ball.armed = false;
            events.right_scored = true;
        } else if ball.pos.x >= map.width {
            ball.armed = false;
            events.left_scored = true;
        }
    }
}

/// Award flagged points and put the ball back on the centre spot
pub fn apply_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &Events,
    rng: &mut GameRng,
    config: &Config,
) {
    if !events.scored() {
        return;
    }
    if events.left_scored {
        score.increment_left();
    }
    if events.right_scored {
        score.increment_right();
    }
    debug!(left = score.left, right = score.right, "point scored");

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(map.ball_spawn(), config.serve_mode, rng);
    }
}
