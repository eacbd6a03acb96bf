use glam::DVec2;

use crate::components::{PlayerId, Wall, WallSide};
use crate::render::Color;
use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn from_center_size(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.x < other.max.x
            && self.max.x > other.min.x
    }
}

/// Playing field: a rectangle bordered by four walls
///
/// Screen coordinates: origin top-left, y grows downwards.
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub paddle_inset: f64,
}

impl GameMap {
    pub fn new(width: f64, height: f64, wall_thickness: f64, paddle_inset: f64) -> Self {
        Self {
            width,
            height,
            wall_thickness,
            paddle_inset,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.field_width,
            config.field_height,
            config.wall_thickness,
            config.paddle_inset,
        )
    }

    /// The four border walls, each a strip along one edge of the field
    pub fn walls(&self) -> [Wall; 4] {
        let t = self.wall_thickness;
        let (w, h) = (self.width, self.height);
        [
            Wall::new(
                WallSide::Top,
                DVec2::new(w / 2.0, t / 2.0),
                DVec2::new(w, t),
                Color::White,
            ),
            Wall::new(
                WallSide::Bottom,
                DVec2::new(w / 2.0, h - t / 2.0),
                DVec2::new(w, t),
                Color::White,
            ),
            Wall::new(
                WallSide::Left,
                DVec2::new(t / 2.0, h / 2.0),
                DVec2::new(t, h),
                Color::Gray,
            ),
            Wall::new(
                WallSide::Right,
                DVec2::new(w - t / 2.0, h / 2.0),
                DVec2::new(t, h),
                Color::Gray,
            ),
        ]
    }

    /// Center of the field, where the ball is served from
    pub fn ball_spawn(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Starting center of a player's paddle
    pub fn paddle_spawn(&self, player: PlayerId) -> DVec2 {
        let x = match player {
            PlayerId::One => self.paddle_inset,
            PlayerId::Two => self.width - self.paddle_inset,
        };
        DVec2::new(x, self.height / 2.0)
    }

    /// Clamp a center Y so an object of the given half height stays between the top and bottom walls
    pub fn clamp_y(&self, y: f64, half_height: f64) -> f64 {
        let min = self.wall_thickness + half_height;
        let max = self.height - self.wall_thickness - half_height;
        if min > max {
            return self.height / 2.0;
        }
        y.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> GameMap {
        GameMap::new(800.0, 600.0, 20.0, 40.0)
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center_size(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
        let b = Aabb::from_center_size(DVec2::new(8.0, 0.0), DVec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::from_center_size(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
        let b = Aabb::from_center_size(DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b), "Shared edge is not an overlap");
    }

    #[test]
    fn test_walls_border_the_field() {
        let map = map();
        let walls = map.walls();

        let top = walls.iter().find(|w| w.side == WallSide::Top).unwrap();
        assert_eq!(top.cy() + top.height() / 2.0, 20.0, "Top wall inner edge");

        let bottom = walls.iter().find(|w| w.side == WallSide::Bottom).unwrap();
        assert_eq!(bottom.cy() - bottom.height() / 2.0, 580.0, "Bottom wall inner edge");

        let left = walls.iter().find(|w| w.side == WallSide::Left).unwrap();
        assert_eq!(left.cx() + left.width() / 2.0, 20.0, "Left wall inner edge");

        let right = walls.iter().find(|w| w.side == WallSide::Right).unwrap();
        assert_eq!(right.cx() - right.width() / 2.0, 780.0, "Right wall inner edge");
    }

    #[test]
    fn test_paddle_spawn_positions() {
        let map = map();
        assert_eq!(map.paddle_spawn(PlayerId::One), DVec2::new(40.0, 300.0));
        assert_eq!(map.paddle_spawn(PlayerId::Two), DVec2::new(760.0, 300.0));
        assert_eq!(map.ball_spawn(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_clamp_y() {
        let map = map();
        assert_eq!(map.clamp_y(0.0, 50.0), 70.0);
        assert_eq!(map.clamp_y(1000.0, 50.0), 530.0);
        assert_eq!(map.clamp_y(300.0, 50.0), 300.0);
    }
}
