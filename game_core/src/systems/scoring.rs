use crate::{Ball, Config, Events, GameEvent, GameMap, GameRng, PlayerId, Scoreboard, WallSide};
use hecs::World;
use log::info;

/// Award points for wall hits recorded since `since`
///
/// Reaching the left wall means Player 1 missed, so Player 2 scores, and
/// the other way round.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    scoreboard: &mut Scoreboard,
    events: &mut Events,
    since: usize,
    rng: &mut GameRng,
) {
    let scorers: Vec<PlayerId> = events.events[since..]
        .iter()
        .filter_map(|event| match event {
            GameEvent::WallHit(WallSide::Left) => Some(PlayerId::Two),
            GameEvent::WallHit(WallSide::Right) => Some(PlayerId::One),
            _ => None,
        })
        .collect();

    for player in scorers {
        scoreboard.increment(player);
        events.push(GameEvent::Scored(player));
        info!(
            "{} scores ({} - {})",
            player,
            scoreboard.one.score(),
            scoreboard.two.score()
        );

        if config.win_score == Some(scoreboard.get(player).score()) {
            info!("{} wins", player);
            events.push(GameEvent::Won(player));
        }

        if config.reset_ball_on_point {
            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                ball.reset(map.ball_spawn(), rng);
                info!("serving from ({:.1}, {:.1})", ball.cx(), ball.cy());
            }
        }
    }
}
