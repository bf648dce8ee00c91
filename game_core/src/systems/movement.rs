use crate::{Ball, Config, GameMap, Paddle, Side};
use hecs::World;

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Step the AI paddle toward the ball's current Y.
///
/// Dead-band controller: the paddle holds while its center is within
/// `ai_dead_band` of the ball, otherwise it moves a fixed `ai_step`.
pub fn move_ai_paddle(world: &mut World, map: &GameMap, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return; // Nothing to follow
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }

        let center = config.paddle_center_y(paddle.y);
        if center < ball_y - config.ai_dead_band {
            paddle.y += config.ai_step;
        } else if center > ball_y + config.ai_dead_band {
            paddle.y -= config.ai_step;
        }

        paddle.y = config.clamp_paddle_y(paddle.y, map);
    }
}
