use crate::{Ball, Config, DirectionSource, Events, GameMap, Score, Side};
use hecs::World;
use log::info;

/// Check if ball left the surface (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    directions: &mut impl DirectionSource,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Side whose edge the ball went past
        let conceded = if ball.pos.x - config.ball_radius < 0.0 {
            Side::Player
        } else if ball.pos.x + config.ball_radius > map.width {
            Side::Ai
        } else {
            continue;
        };

        let scorer = conceded.opponent();
        score.award(scorer);
        events.scored = Some(scorer);
        info!(
            "{:?} scored, player {} - ai {}",
            scorer, score.player, score.ai
        );

        ball.reset(map.center(), config.serve_speed(), directions);
    }
}
