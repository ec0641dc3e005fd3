use crate::{Ball, Events, GameMap, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, map: &GameMap) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * paddle.speed;

            // Clamp to arena bounds
            paddle.y = map.clamp_y(paddle.y, paddle.height);
        }
    }
}

/// Move ball by one frame and bounce it off the top and bottom walls
pub fn move_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.at_rest {
            ball.pos += ball.velocity();
        }

        if ball.pos.y <= 0.0 || ball.pos.y >= map.height {
            ball.dir.y = -ball.dir.y;
            ball.pos.y = ball.pos.y.clamp(0.0, map.height);
            events.ball_hit_wall = true;
        }
    }
}
