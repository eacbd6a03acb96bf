use crate::{Ball, Config, GameMap, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.center.y += intent.dir as f64 * config.paddle_speed * time.dt;

            // Keep between the top and bottom walls
            paddle.center.y = map.clamp_y(paddle.center.y, paddle.height() / 2.0);
        }
    }
}

/// Move ball along its current direction
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(time.dt);
    }
}
