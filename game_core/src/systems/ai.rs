use hecs::World;

use crate::{Ball, Config, Opponent, Paddle, PaddleIntent, Side};

/// Steer the right paddle toward the ball's current height.
///
/// No trajectory prediction: the paddle centre simply chases `ball.y`,
/// holding still while the gap is inside the dead zone.
pub fn drive_ai(world: &mut World, config: &Config) {
    if config.opponent != Opponent::SimpleChaseAi {
        return;
    }

    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side != Side::Right {
            continue;
        }
        intent.dir = chase_direction(paddle.center_y(), ball_y, config.ai_dead_zone);
    }
}

fn chase_direction(paddle_center: f32, target: f32, dead_zone: f32) -> i8 {
    let diff = target - paddle_center;
    if diff > dead_zone {
        1
    } else if diff < -dead_zone {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn right_intent(world: &World) -> i8 {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (p, _))| p.side == Side::Right)
            .map(|(_e, (_, i))| i.dir)
            .unwrap()
    }

    #[test]
    fn test_ai_chases_ball_down_and_up() {
        let mut world = World::new();
        let config = Config::vs_ai();
        create_paddle(&mut world, &config, Side::Right, 390.0); // centre 480
        let ball = create_ball(&mut world, &config, Vec2::new(640.0, 800.0));

        drive_ai(&mut world, &config);
        assert_eq!(right_intent(&world), 1, "Ball below: move down");

        world.get::<&mut Ball>(ball).unwrap().pos.y = 100.0;
        drive_ai(&mut world, &config);
        assert_eq!(right_intent(&world), -1, "Ball above: move up");
    }

    #[test]
    fn test_ai_holds_inside_dead_zone() {
        let mut world = World::new();
        let config = Config::vs_ai();
        create_paddle(&mut world, &config, Side::Right, 390.0);
        create_ball(
            &mut world,
            &config,
            Vec2::new(640.0, 480.0 + config.ai_dead_zone - 1.0),
        );

        drive_ai(&mut world, &config);
        assert_eq!(right_intent(&world), 0);
    }

    #[test]
    fn test_ai_leaves_left_paddle_and_human_mode_alone() {
        let mut world = World::new();
        let config = Config::two_player();
        create_paddle(&mut world, &config, Side::Right, 390.0);
        create_ball(&mut world, &config, Vec2::new(640.0, 900.0));

        drive_ai(&mut world, &config);
        assert_eq!(right_intent(&world), 0, "Human opponent is not driven");

        let mut world = World::new();
        let config = Config::vs_ai();
        let left = create_paddle(&mut world, &config, Side::Left, 390.0);
        create_ball(&mut world, &config, Vec2::new(640.0, 900.0));
        drive_ai(&mut world, &config);
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 0);
    }
}
