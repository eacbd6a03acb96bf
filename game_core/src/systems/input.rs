use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::InputQueue;

/// Apply queued inputs to paddle intents; the last input per player wins
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for (player, dir) in queue.pop_inputs() {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.player == player {
                intent.dir = dir;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PlayerId;
    use crate::{create_paddle, Config, GameMap};

    #[test]
    fn test_inputs_reach_matching_paddle() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let one = create_paddle(&mut world, &map, &config, PlayerId::One);
        let two = create_paddle(&mut world, &map, &config, PlayerId::Two);

        let mut queue = InputQueue::new();
        queue.push_input(PlayerId::One, 1);
        queue.push_input(PlayerId::Two, -1);
        queue.push_input(PlayerId::Two, 0);
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(one).unwrap().dir, 1);
        assert_eq!(world.get::<&PaddleIntent>(two).unwrap().dir, 0, "Last input wins");
        assert!(queue.inputs.is_empty(), "Queue is drained");
    }
}
