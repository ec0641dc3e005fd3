use crate::{Aabb, Ball, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with paddles.
///
/// A hit forces the ball's horizontal factor away from the paddle; the
/// incoming angle is ignored and the ball is not pushed out of the paddle.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle rects without holding borrows
    let paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect()))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();
        for &(side, rect) in &paddles {
            if !bounds.overlaps(&rect) {
                continue;
            }
            match side {
                Side::Left => ball.hit_left(),
                Side::Right => ball.hit_right(),
            }
            events.ball_hit_paddle = true;
        }
    }
}
