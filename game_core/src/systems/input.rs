use crate::{Config, GameMap, Paddle, Side};
use hecs::World;

/// Center the player paddle on the pointer's Y, clamped to the surface
pub fn apply_pointer(world: &mut World, map: &GameMap, config: &Config, pointer_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0, map);
        }
    }
}
