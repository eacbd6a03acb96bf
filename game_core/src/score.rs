use crate::components::PlayerId;
use crate::params::Params;
use crate::render::{Align, Color, GameLib};

/// Points scored by one player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    player: PlayerId,
    score: u32,
}

impl Score {
    pub fn new(player: PlayerId) -> Self {
        Self { player, score: 0 }
    }

    pub fn inc(&mut self) {
        self.score += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Player 1 on the left in green, Player 2 on the right in blue
    pub fn draw(&self, lib: &mut impl GameLib) {
        let (color, tag, align) = match self.player {
            PlayerId::One => (Color::Green, "P1", Align::Left),
            PlayerId::Two => (Color::Blue, "P2", Align::Right),
        };
        lib.set_color(color);
        lib.draw_text(
            &format!("{} {}: {}", Params::SCORE_LABEL, tag, self.score),
            Params::SCORE_TEXT_Y,
            align,
        );
    }
}

/// Both players' scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub one: Score,
    pub two: Score,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            one: Score::new(PlayerId::One),
            two: Score::new(PlayerId::Two),
        }
    }

    pub fn get(&self, player: PlayerId) -> &Score {
        match player {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }

    pub fn increment(&mut self, player: PlayerId) {
        match player {
            PlayerId::One => self.one.inc(),
            PlayerId::Two => self.two.inc(),
        }
    }

    /// First player to reach `win_score`, if there is a target at all
    pub fn winner(&self, win_score: Option<u32>) -> Option<PlayerId> {
        let target = win_score?;
        if self.one.score() >= target {
            Some(PlayerId::One)
        } else if self.two.score() >= target {
            Some(PlayerId::Two)
        } else {
            None
        }
    }

    pub fn draw(&self, lib: &mut impl GameLib) {
        self.one.draw(lib);
        self.two.draw(lib);
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CommandBuffer;

    #[test]
    fn test_new_score_starts_at_zero() {
        let score = Score::new(PlayerId::Two);
        assert_eq!(score.score(), 0);
        assert_eq!(score.player(), PlayerId::Two);
    }

    #[test]
    fn test_inc_counts_up() {
        let mut score = Score::new(PlayerId::One);
        for _ in 0..7 {
            score.inc();
        }
        assert_eq!(score.score(), 7);
    }

    #[test]
    fn test_draw_player_one_left_in_green() {
        let mut score = Score::new(PlayerId::One);
        score.inc();
        score.inc();
        score.inc();

        let mut buffer = CommandBuffer::new();
        score.draw(&mut buffer);
        assert_eq!(
            buffer.texts(),
            vec![(Some(Color::Green), "Placar P1: 3", Align::Left)]
        );
    }

    #[test]
    fn test_draw_player_two_right_in_blue() {
        let mut score = Score::new(PlayerId::Two);
        score.inc();

        let mut buffer = CommandBuffer::new();
        score.draw(&mut buffer);
        assert_eq!(
            buffer.texts(),
            vec![(Some(Color::Blue), "Placar P2: 1", Align::Right)]
        );
    }

    #[test]
    fn test_scoreboard_increment() {
        let mut board = Scoreboard::new();
        board.increment(PlayerId::One);
        board.increment(PlayerId::One);
        board.increment(PlayerId::Two);
        assert_eq!(board.get(PlayerId::One).score(), 2);
        assert_eq!(board.get(PlayerId::Two).score(), 1);
    }

    #[test]
    fn test_scoreboard_winner() {
        let mut board = Scoreboard::new();
        for _ in 0..4 {
            board.increment(PlayerId::Two);
        }
        assert_eq!(board.winner(None), None, "No target, no winner");
        assert_eq!(board.winner(Some(5)), None, "No winner below threshold");
        board.increment(PlayerId::Two);
        assert_eq!(board.winner(Some(5)), Some(PlayerId::Two));
    }
}
