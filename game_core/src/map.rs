use glam::Vec2;

use crate::{Config, Params, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Arena dimensions and spawn points
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
        }
    }

    /// Clamp a top edge so an object of `extent` stays inside the arena
    pub fn clamp_y(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, (self.height - extent).max(0.0))
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner of a paddle at kick-off
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        Vec2::new(
            config.paddle_x(side),
            self.height / 2.0 - config.paddle_height / 2.0,
        )
    }

    pub fn center_line(&self) -> Aabb {
        let half = Params::CENTER_LINE_WIDTH / 2.0;
        Aabb::new(
            Vec2::new(self.width / 2.0 - half, 0.0),
            Vec2::new(self.width / 2.0 + half, self.height),
        )
    }

    pub fn score_anchor(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => Vec2::new(Params::SCORE_INSET_X, Params::SCORE_Y),
            Side::Right => Vec2::new(self.width - Params::SCORE_INSET_X, Params::SCORE_Y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let inside = Aabb::new(Vec2::new(9.0, 9.0), Vec2::new(20.0, 20.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_spawns() {
        let map = GameMap::new();
        let config = Config::new();
        assert_eq!(map.ball_spawn(), Vec2::new(640.0, 480.0));
        assert_eq!(map.paddle_spawn(Side::Left, &config), Vec2::new(20.0, 390.0));
        assert_eq!(
            map.paddle_spawn(Side::Right, &config),
            Vec2::new(1230.0, 390.0)
        );
    }

    #[test]
    fn test_center_line_spans_height() {
        let line = GameMap::new().center_line();
        assert_eq!(line.size(), Vec2::new(6.0, 960.0));
        assert_eq!(line.center().x, 640.0);
    }

    #[test]
    fn test_clamp_y() {
        let map = GameMap::new();
        assert_eq!(map.clamp_y(-1.0, 180.0), 0.0);
        assert_eq!(map.clamp_y(900.0, 180.0), 780.0);
        assert_eq!(map.clamp_y(100.0, 180.0), 100.0);
    }
}
