use hecs::World;
use tracing::debug;

use crate::{Ball, InputQueue, Paddle, PaddleIntent};

/// Apply queued commands to paddle intents and serve the ball
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for &(side, dir) in &queue.inputs {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side {
                intent.dir = dir;
            }
        }
    }

    if queue.serve {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if ball.at_rest {
                debug!("ball served");
            }
            ball.at_rest = false;
        }
    }

    queue.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Side};

    #[test]
    fn test_inputs_set_matching_intent_only() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, &config, Side::Left, 390.0);
        let right = create_paddle(&mut world, &config, Side::Right, 390.0);

        let mut queue = InputQueue::new();
        queue.push_input(Side::Right, -1);
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 0);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, -1);
        assert!(queue.inputs.is_empty(), "Queue drained");
    }

    #[test]
    fn test_serve_releases_ball() {
        let mut world = World::new();
        let config = Config::new();
        let ball = create_ball(&mut world, &config, glam::Vec2::new(640.0, 480.0));
        assert!(world.get::<&Ball>(ball).unwrap().at_rest);

        let mut queue = InputQueue::new();
        queue.request_serve();
        ingest_inputs(&mut world, &mut queue);

        assert!(!world.get::<&Ball>(ball).unwrap().at_rest);
    }
}
