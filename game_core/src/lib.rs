pub mod ball;
pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod score;
pub mod systems;

pub use ball::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use score::*;

use glam::DVec2;
use hecs::World;
use log::warn;
use systems::*;

/// Run the deterministic Pong game simulation for one frame
///
/// `time.dt` is the elapsed frame time in milliseconds. Events from the
/// previous frame are cleared first.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    scoreboard: &mut Scoreboard,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    if !time.dt.is_finite() {
        warn!("non-finite frame delta {} treated as 0", time.dt);
        time.dt = 0.0;
    }

    // Clamp dt to prevent large jumps
    if time.dt > config.max_dt {
        warn!("frame delta {:.1}ms clamped to {:.1}ms", time.dt, config.max_dt);
    }
    let clamped_dt = time.dt.clamp(0.0, config.max_dt);

    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input_queue);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(config.fixed_dt);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 2. Move paddles based on intents
        move_paddles(world, &step_time, map, config);

        // 3. Move ball
        move_ball(world, &step_time);

        // 4. Check collisions (ball vs walls, paddles)
        let mark = events.events.len();
        check_collisions(world, events);

        // 5. Check scoring (ball reached a side wall)
        check_scoring(world, map, config, scoreboard, events, mark, rng);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    player: PlayerId,
) -> hecs::Entity {
    let paddle = Paddle::new(
        player,
        map.paddle_spawn(player),
        DVec2::new(config.paddle_width, config.paddle_height),
        Color::White,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity at the center of the field
pub fn create_ball(world: &mut World, map: &GameMap, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(
        map.ball_spawn(),
        DVec2::splat(config.ball_size),
        config.ball_color,
        config.ball_speed,
    ),))
}

/// Helper to create the four border walls
pub fn spawn_walls(world: &mut World, map: &GameMap) -> Vec<hecs::Entity> {
    map.walls()
        .into_iter()
        .map(|wall| world.spawn((wall,)))
        .collect()
}

/// A fresh world with walls, both paddles and the ball
pub fn new_match(config: &Config) -> (World, GameMap) {
    let map = GameMap::from_config(config);
    let mut world = World::new();
    spawn_walls(&mut world, &map);
    create_paddle(&mut world, &map, config, PlayerId::One);
    create_paddle(&mut world, &map, config, PlayerId::Two);
    create_ball(&mut world, &map, config);
    (world, map)
}
