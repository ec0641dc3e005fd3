use glam::Vec2;

use crate::{Aabb, GameRng, ServeMode};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // left edge
    pub y: f32, // top edge (clamped to arena)
    pub width: f32,
    pub height: f32,
    pub speed: f32, // pixels per frame
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            speed,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Direction factors (x_fac, y_fac), each component is +1 or -1
    pub dir: Vec2,
    /// Motion suspended until the next serve
    pub at_rest: bool,
    /// First-crossing latch: only an armed ball can score
    pub armed: bool,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            radius,
            speed,
            dir: Vec2::new(1.0, -1.0),
            at_rest: true,
            armed: true,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Bounding box of the ball's circle
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Send the ball to the right, whatever its incoming angle
    pub fn hit_left(&mut self) {
        self.dir.x = self.dir.x.abs();
    }

    /// Send the ball to the left, whatever its incoming angle
    pub fn hit_right(&mut self) {
        self.dir.x = -self.dir.x.abs();
    }

    /// Re-centre the ball, pick its next direction and hold it for a serve
    pub fn reset(&mut self, center: Vec2, mode: ServeMode, rng: &mut GameRng) {
        self.pos = center;
        match mode {
            ServeMode::Alternate => self.dir.x = -self.dir.x,
            ServeMode::Random => {
                use rand::Rng;
                let x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
                let y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
                self.dir = Vec2::new(x, y);
            }
        }
        self.armed = true;
        self.at_rest = true;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
