use crate::components::{PlayerId, WallSide};

/// Time resource for tracking simulation time (milliseconds)
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f64,  // Delta time for this step
    pub now: f64, // Total elapsed time
}

impl Time {
    pub fn new(dt: f64, now: f64) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 16.0, now: 0.0 }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit(WallSide),
    PaddleHit(PlayerId),
    Scored(PlayerId),
    Won(PlayerId),
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub events: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }

    pub fn scored(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Scored(player) => Some(*player),
            _ => None,
        })
    }
}

/// Input queue filled by the host between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(PlayerId, i8)>, // (player, direction)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player: PlayerId, dir: i8) {
        self.inputs.push((player, dir.signum()));
    }

    pub fn pop_inputs(&mut self) -> Vec<(PlayerId, i8)> {
        std::mem::take(&mut self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.push(GameEvent::WallHit(WallSide::Top));
        events.push(GameEvent::Scored(PlayerId::One));

        assert!(events.contains(GameEvent::WallHit(WallSide::Top)));
        assert_eq!(events.scored().collect::<Vec<_>>(), vec![PlayerId::One]);

        events.clear();
        assert!(events.events.is_empty());
    }

    #[test]
    fn test_input_queue_push_input() {
        let mut queue = InputQueue::new();
        queue.push_input(PlayerId::One, -1);
        queue.push_input(PlayerId::Two, 5);

        assert_eq!(queue.inputs.len(), 2);
        assert_eq!(queue.inputs[0], (PlayerId::One, -1));
        assert_eq!(queue.inputs[1], (PlayerId::Two, 1), "Direction is normalized");
    }

    #[test]
    fn test_input_queue_pop_drains() {
        let mut queue = InputQueue::new();
        queue.push_input(PlayerId::One, 1);

        let inputs = queue.pop_inputs();
        assert_eq!(inputs, vec![(PlayerId::One, 1)]);
        assert!(queue.inputs.is_empty());
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<u32> = (0..4).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }
}
