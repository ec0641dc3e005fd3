//! Game context
//!
//! A [`Session`] owns everything one game needs: the ECS world, score, RNG,
//! held-key state and configuration. Platform layers feed it input events,
//! call [`Session::tick`] once per frame and draw from [`Session::snapshot`].

use glam::Vec2;
use hecs::{Entity, World};
use tracing::info;

use crate::{
    create_ball, create_paddle, step, Aabb, Ball, Config, Controls, Events, GameMap, GameRng,
    InputEvent, InputQueue, Paddle, Score, Side, Time,
};

/// Render-ready view of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub ball_at_rest: bool,
    pub center_line: Aabb,
    pub score: Score,
    /// False for the minimal variant: nothing but the background is drawn
    pub court_visible: bool,
}

pub struct Session {
    world: World,
    time: Time,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    input_queue: InputQueue,
    rng: GameRng,
    controls: Controls,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let map = GameMap::from_config(&config);
        let mut world = World::new();

        let left_y = map.paddle_spawn(Side::Left, &config).y;
        let right_y = map.paddle_spawn(Side::Right, &config).y;
        let left = create_paddle(&mut world, &config, Side::Left, left_y);
        let right = create_paddle(&mut world, &config, Side::Right, right_y);
        let ball = create_ball(&mut world, &config, map.ball_spawn());

        info!(
            opponent = ?config.opponent,
            serve = ?config.serve_mode,
            audio = config.audio,
            minimal = config.minimal,
            "session started"
        );

        Self {
            world,
            time: Time::new(),
            rng: GameRng::new(config.seed),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            controls: Controls::new(),
            left,
            right,
            ball,
        }
    }

    /// Feed one keyboard or window event; unknown keys are ignored
    pub fn handle_input(&mut self, event: InputEvent) {
        self.controls.handle(event, self.config.opponent);
    }

    /// Advance exactly one frame
    pub fn tick(&mut self) -> &Events {
        self.controls
            .drain_into(&mut self.input_queue, self.config.opponent);
        if self.config.minimal {
            self.input_queue.clear();
            self.time.advance();
            return &self.events;
        }
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input_queue,
            &mut self.rng,
        );
        &self.events
    }

    pub fn is_running(&self) -> bool {
        !self.controls.quit_requested()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn frame(&self) -> u64 {
        self.time.frame
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        // Paddles are spawned in `new` and never despawned
        *self
            .world
            .get::<&Paddle>(entity)
            .expect("paddle entity alive for the whole session")
    }

    pub fn ball(&self) -> Ball {
        *self
            .world
            .get::<&Ball>(self.ball)
            .expect("ball entity alive for the whole session")
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        Snapshot {
            left_paddle: self.paddle(Side::Left).rect(),
            right_paddle: self.paddle(Side::Right).rect(),
            ball_pos: ball.pos,
            ball_radius: ball.radius,
            ball_at_rest: ball.at_rest,
            center_line: self.map.center_line(),
            score: self.score,
            court_visible: !self.config.minimal,
        }
    }

    /// Direct world access for tests and tooling
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
