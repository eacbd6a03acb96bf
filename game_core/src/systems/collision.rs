use crate::{Ball, Collider, Collision, Events, GameEvent, Paddle, Wall};
use hecs::World;
use log::debug;

/// Check ball collisions with walls and paddles
///
/// Contacts the ball is already moving away from are ignored, so a ball that
/// is still inside a wall after bouncing does not bounce again.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // First, collect wall and paddle data without holding borrows
    let walls: Vec<Wall> = world.query::<&Wall>().iter().map(|(_e, w)| *w).collect();
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for wall in &walls {
            resolve(ball, wall, events);
        }
        for paddle in &paddles {
            resolve(ball, paddle, events);
        }
    }
}

fn resolve(ball: &mut Ball, other: &impl Collider, events: &mut Events) {
    let Some(collision) = ball.detect(other) else {
        return;
    };
    if !ball.is_approaching(collision) {
        return;
    }

    ball.apply(collision);
    debug!(
        "ball hit {:?} at ({:.1}, {:.1})",
        collision,
        ball.cx(),
        ball.cy()
    );
    events.push(match collision {
        Collision::Wall(side) => GameEvent::WallHit(side),
        Collision::Paddle(player) => GameEvent::PaddleHit(player),
    });
}
