use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::error::LabelError;
use crate::map::Aabb;
use crate::render::{Color, GameLib};

/// Per-axis travel direction; never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Negative => -1.0,
            Sign::Positive => 1.0,
        }
    }
}

/// Which border of the field a wall occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::Top,
        WallSide::Bottom,
        WallSide::Left,
        WallSide::Right,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WallSide::Top => "Top",
            WallSide::Bottom => "Bottom",
            WallSide::Left => "Left",
            WallSide::Right => "Right",
        }
    }
}

impl fmt::Display for WallSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WallSide {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WallSide::ALL
            .into_iter()
            .find(|side| side.label() == s)
            .ok_or_else(|| LabelError::UnknownWall(s.to_string()))
    }
}

/// One of the two players; Player 1 defends the left side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn label(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlayerId {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Player 1" => Ok(PlayerId::One),
            "Player 2" => Ok(PlayerId::Two),
            _ => Err(LabelError::UnknownPlayer(s.to_string())),
        }
    }
}

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall(WallSide),
    Paddle(PlayerId),
}

/// Anything the ball can bounce off
pub trait Collider {
    fn bounds(&self) -> Aabb;
    fn contact(&self) -> Collision;
}

/// Wall component - one border of the field
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub side: WallSide,
    pub center: DVec2,
    pub size: DVec2,
    pub color: Color,
}

impl Wall {
    pub fn new(side: WallSide, center: DVec2, size: DVec2, color: Color) -> Self {
        Self {
            side,
            center,
            size,
            color,
        }
    }

    pub fn cx(&self) -> f64 {
        self.center.x
    }

    pub fn cy(&self) -> f64 {
        self.center.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn id(&self) -> WallSide {
        self.side
    }

    pub fn draw(&self, lib: &mut impl GameLib) {
        lib.set_color(self.color);
        lib.fill_rect(self.cx(), self.cy(), self.width(), self.height());
    }
}

impl Collider for Wall {
    fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }

    fn contact(&self) -> Collision {
        Collision::Wall(self.side)
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player: PlayerId,
    pub center: DVec2,
    pub size: DVec2,
    pub color: Color,
}

impl Paddle {
    pub fn new(player: PlayerId, center: DVec2, size: DVec2, color: Color) -> Self {
        Self {
            player,
            center,
            size,
            color,
        }
    }

    pub fn cx(&self) -> f64 {
        self.center.x
    }

    pub fn cy(&self) -> f64 {
        self.center.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn id(&self) -> PlayerId {
        self.player
    }

    pub fn draw(&self, lib: &mut impl GameLib) {
        lib.set_color(self.color);
        lib.fill_rect(self.cx(), self.cy(), self.width(), self.height());
    }
}

impl Collider for Paddle {
    fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }

    fn contact(&self) -> Collision {
        Collision::Paddle(self.player)
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
