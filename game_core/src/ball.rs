use glam::DVec2;
use rand::Rng;

use crate::components::{Collider, Collision, PlayerId, Sign, WallSide};
use crate::map::Aabb;
use crate::render::{Color, GameLib};
use crate::GameRng;

/// Ball component - the pong ball
///
/// Moves at a constant `speed` along both axes at once; only the per-axis
/// signs change when it bounces.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pos: DVec2,
    size: DVec2,
    color: Color,
    speed: f64,
    sx: Sign,
    sy: Sign,
}

impl Ball {
    /// New ball centered at `pos`, heading right and down
    pub fn new(pos: DVec2, size: DVec2, color: Color, speed: f64) -> Self {
        debug_assert!(speed >= 0.0, "ball speed must be non-negative");
        debug_assert!(size.x > 0.0 && size.y > 0.0, "ball size must be positive");
        Self {
            pos,
            size,
            color,
            speed,
            sx: Sign::Positive,
            sy: Sign::Positive,
        }
    }

    /// Advance position by `speed * delta` along each axis's current sign
    pub fn update(&mut self, delta: f64) {
        let step = self.speed * delta;
        self.pos.x += step * self.sx.as_f64();
        self.pos.y += step * self.sy.as_f64();
    }

    /// Serve from `pos` with a random sign on each axis
    pub fn reset(&mut self, pos: DVec2, rng: &mut GameRng) {
        self.pos = pos;
        self.sx = if rng.0.gen_bool(0.5) {
            Sign::Positive
        } else {
            Sign::Negative
        };
        self.sy = if rng.0.gen_bool(0.5) {
            Sign::Positive
        } else {
            Sign::Negative
        };
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }

    /// Overlap test only; no state changes
    pub fn detect(&self, other: &impl Collider) -> Option<Collision> {
        if self.bounds().overlaps(&other.bounds()) {
            Some(other.contact())
        } else {
            None
        }
    }

    /// Detect and respond in one call. Returns whether the ball overlaps `other`.
    pub fn check_collision(&mut self, other: &impl Collider) -> bool {
        match self.detect(other) {
            Some(collision) => {
                self.apply(collision);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, collision: Collision) {
        match collision {
            Collision::Wall(side) => self.on_wall_collision(side),
            Collision::Paddle(player) => self.on_player_collision(player),
        }
    }

    /// Send the ball away from the wall it hit
    pub fn on_wall_collision(&mut self, side: WallSide) {
        match side {
            WallSide::Bottom => self.sy = Sign::Negative,
            WallSide::Top => self.sy = Sign::Positive,
            WallSide::Right => self.sx = Sign::Negative,
            WallSide::Left => self.sx = Sign::Positive,
        }
    }

    /// Send the ball towards the other player
    pub fn on_player_collision(&mut self, player: PlayerId) {
        self.sx = match player {
            PlayerId::One => Sign::Positive,
            PlayerId::Two => Sign::Negative,
        };
    }

    /// Whether the ball is still moving into the surface it touched
    pub fn is_approaching(&self, collision: Collision) -> bool {
        match collision {
            Collision::Wall(WallSide::Top) => self.sy == Sign::Negative,
            Collision::Wall(WallSide::Bottom) => self.sy == Sign::Positive,
            Collision::Wall(WallSide::Left) | Collision::Paddle(PlayerId::One) => {
                self.sx == Sign::Negative
            }
            Collision::Wall(WallSide::Right) | Collision::Paddle(PlayerId::Two) => {
                self.sx == Sign::Positive
            }
        }
    }

    pub fn draw(&self, lib: &mut impl GameLib) {
        lib.set_color(self.color);
        lib.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }

    pub fn cx(&self) -> f64 {
        self.pos.x
    }

    pub fn cy(&self) -> f64 {
        self.pos.y
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Current (x, y) direction signs
    pub fn direction(&self) -> (Sign, Sign) {
        (self.sx, self.sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Paddle, Wall};
    use crate::render::{CommandBuffer, DrawCommand};

    fn ball() -> Ball {
        Ball::new(
            DVec2::new(100.0, 100.0),
            DVec2::new(10.0, 10.0),
            Color::Yellow,
            0.5,
        )
    }

    fn top_wall() -> Wall {
        Wall::new(
            WallSide::Top,
            DVec2::new(400.0, 0.0),
            DVec2::new(800.0, 20.0),
            Color::White,
        )
    }

    #[test]
    fn test_new_ball_heads_right_and_down() {
        let ball = ball();
        assert_eq!(ball.direction(), (Sign::Positive, Sign::Positive));
        assert_eq!(ball.cx(), 100.0);
        assert_eq!(ball.cy(), 100.0);
        assert_eq!(ball.width(), 10.0);
        assert_eq!(ball.height(), 10.0);
        assert_eq!(ball.speed(), 0.5);
    }

    #[test]
    fn test_update_moves_each_axis_by_speed_times_delta() {
        let mut ball = ball();
        ball.update(10.0);
        assert_eq!(ball.pos(), DVec2::new(105.0, 105.0));

        ball.on_wall_collision(WallSide::Right);
        ball.update(4.0);
        assert_eq!(ball.pos(), DVec2::new(103.0, 107.0), "X reverses, Y keeps going");
    }

    #[test]
    fn test_update_zero_delta_is_noop() {
        let mut ball = ball();
        ball.update(0.0);
        assert_eq!(ball.pos(), DVec2::new(100.0, 100.0));
    }

    #[test]
    fn test_wall_handlers_set_signs() {
        let mut ball = ball();
        ball.on_wall_collision(WallSide::Top);
        ball.on_wall_collision(WallSide::Bottom);
        assert_eq!(ball.direction().1, Sign::Negative, "Last call wins");

        ball.on_wall_collision(WallSide::Right);
        assert_eq!(ball.direction().0, Sign::Negative);
        ball.on_wall_collision(WallSide::Left);
        assert_eq!(ball.direction().0, Sign::Positive);
        ball.on_wall_collision(WallSide::Top);
        assert_eq!(ball.direction().1, Sign::Positive);
    }

    #[test]
    fn test_player_handlers_send_ball_to_opponent() {
        let mut ball = ball();
        ball.on_player_collision(PlayerId::Two);
        assert_eq!(ball.direction().0, Sign::Negative);
        ball.on_player_collision(PlayerId::One);
        assert_eq!(ball.direction().0, Sign::Positive);
        assert_eq!(ball.direction().1, Sign::Positive, "Y is untouched");
    }

    #[test]
    fn test_ball_reaches_top_wall_boundary() {
        let mut ball = ball();
        let wall = top_wall(); // Usable boundary at y = 10
        ball.on_wall_collision(WallSide::Bottom); // Head up

        ball.update(170.0);
        assert_eq!(ball.cy(), 15.0);
        assert!(!ball.check_collision(&wall), "Touching the boundary is not a hit");
        assert_eq!(ball.direction().1, Sign::Negative);

        ball.update(1.0);
        assert!(ball.check_collision(&wall), "Crossing the boundary is a hit");
        assert_eq!(ball.direction().1, Sign::Positive, "Bounced down");
    }

    #[test]
    fn test_detect_has_no_side_effects() {
        let mut ball = ball();
        ball.on_wall_collision(WallSide::Bottom);
        ball.update(180.0);
        let before = ball.direction();

        assert_eq!(
            ball.detect(&top_wall()),
            Some(Collision::Wall(WallSide::Top))
        );
        assert_eq!(ball.direction(), before);
    }

    #[test]
    fn test_paddle_collision() {
        let paddle = Paddle::new(
            PlayerId::Two,
            DVec2::new(110.0, 100.0),
            DVec2::new(10.0, 50.0),
            Color::White,
        );
        let mut ball = ball();
        assert!(!ball.check_collision(&paddle), "Edges touch at x = 105");

        ball.update(1.0);
        assert!(ball.check_collision(&paddle));
        assert_eq!(ball.direction().0, Sign::Negative);
    }

    #[test]
    fn test_is_approaching() {
        let mut ball = ball(); // Heading right and down
        assert!(ball.is_approaching(Collision::Wall(WallSide::Right)));
        assert!(ball.is_approaching(Collision::Wall(WallSide::Bottom)));
        assert!(ball.is_approaching(Collision::Paddle(PlayerId::Two)));
        assert!(!ball.is_approaching(Collision::Wall(WallSide::Left)));
        assert!(!ball.is_approaching(Collision::Paddle(PlayerId::One)));

        ball.apply(Collision::Wall(WallSide::Right));
        assert!(!ball.is_approaching(Collision::Wall(WallSide::Right)));
    }

    #[test]
    fn test_reset_recenters_ball() {
        let mut ball = ball();
        let mut rng = GameRng::new(7);
        ball.update(50.0);
        ball.reset(DVec2::new(400.0, 300.0), &mut rng);
        assert_eq!(ball.pos(), DVec2::new(400.0, 300.0));
        assert_eq!(ball.speed(), 0.5, "Speed is kept");
    }

    #[test]
    fn test_draw_uses_ball_color() {
        let ball = Ball::new(
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 4.0),
            Color::Red,
            0.1,
        );
        let mut buffer = CommandBuffer::new();
        ball.draw(&mut buffer);
        assert_eq!(
            buffer.commands,
            vec![
                DrawCommand::SetColor(Color::Red),
                DrawCommand::FillRect {
                    cx: 1.0,
                    cy: 2.0,
                    width: 3.0,
                    height: 4.0
                },
            ]
        );
    }
}
