use crate::render::GameLib;
use crate::{Ball, Paddle, Scoreboard, Wall};
use hecs::World;

/// Draw one frame: walls, paddles, ball, then the scores on top
pub fn draw_frame(world: &World, scoreboard: &Scoreboard, lib: &mut impl GameLib) {
    for (_entity, wall) in world.query::<&Wall>().iter() {
        wall.draw(lib);
    }
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        paddle.draw(lib);
    }
    for (_entity, ball) in world.query::<&Ball>().iter() {
        ball.draw(lib);
    }
    scoreboard.draw(lib);
}
