use crate::{Aabb, Ball, Config, Events, GameMap, Paddle, Side};
use glam::Vec2;
use hecs::World;
use log::trace;

/// Bounce the ball off the top and bottom walls.
///
/// The vertical velocity is negated at most once per call and the ball is
/// not pushed back inside, so it may sit past a wall for one tick.
pub fn check_walls(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let radius = config.ball_radius;
        if ball.pos.y - radius < 0.0 || ball.pos.y + radius > map.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            trace!("ball bounced off wall at y={}", ball.pos.y);
        }
    }
}

/// Check ball collisions with paddles, player first then AI.
///
/// A hit reflects the horizontal velocity and replaces the vertical velocity
/// with the ball's offset from the paddle center scaled by `spin_factor`.
pub fn check_paddles(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows (deterministic: sort by side)
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    let size = Vec2::new(config.paddle_width, config.paddle_height);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            let paddle_box =
                Aabb::from_top_left_size(Vec2::new(config.paddle_x(side, map), paddle_y), size);
            let ball_box = Aabb::around_circle(ball.pos, config.ball_radius);

            if ball_box.overlaps(&paddle_box) {
                ball.vel.x = -ball.vel.x;
                ball.vel.y = (ball.pos.y - config.paddle_center_y(paddle_y)) * config.spin_factor;
                events.ball_hit_paddle = Some(side);
                trace!("ball hit {:?} paddle, new velocity {}", side, ball.vel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup_world() -> (World, Config, GameMap, Events) {
        (World::new(), Config::new(), GameMap::new(), Events::new())
    }

    fn ball_of(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let ball_pos = Vec2::new(400.0, config.ball_radius - 2.0); // Past top wall
        create_ball(&mut world, ball_pos, Vec2::new(5.0, -4.0));

        check_walls(&mut world, &map, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel, Vec2::new(5.0, 4.0), "Only Y velocity is reversed");
        assert_eq!(ball.pos, ball_pos, "Position is not corrected");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 595.0), Vec2::new(-5.0, 4.0));

        check_walls(&mut world, &map, &config, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(-5.0, -4.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_touching_wall_does_not_bounce() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, config.ball_radius), Vec2::new(5.0, -4.0));

        check_walls(&mut world, &map, &config, &mut events);

        assert_eq!(ball_of(&world).vel.y, -4.0, "Edge exactly on the wall is inside");
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 250.0); // Spans x 10..20, y 250..350
        create_ball(&mut world, Vec2::new(28.0, 320.0), Vec2::new(-5.0, 4.0));

        check_paddles(&mut world, &map, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.x, 5.0, "Horizontal velocity should reverse");
        assert_eq!(ball.vel.y, (320.0 - 300.0) * 0.25, "Spin replaces vertical speed");
        assert_eq!(events.ball_hit_paddle, Some(Side::Player));
    }

    #[test]
    fn test_ball_collides_with_ai_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Ai, 100.0); // Spans x 780..790, y 100..200
        create_ball(&mut world, Vec2::new(775.0, 120.0), Vec2::new(5.0, -4.0));

        check_paddles(&mut world, &map, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(ball.vel.y, -7.5, "Hit above center deflects upward");
        assert_eq!(events.ball_hit_paddle, Some(Side::Ai));
    }

    #[test]
    fn test_center_hit_flattens_trajectory() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 250.0);
        create_ball(&mut world, Vec2::new(25.0, 300.0), Vec2::new(-5.0, -4.0));

        check_paddles(&mut world, &map, &config, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_paddle_hit_reflects_regardless_of_direction() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 250.0);
        // Already moving away from the paddle
        create_ball(&mut world, Vec2::new(25.0, 300.0), Vec2::new(5.0, 0.0));

        check_paddles(&mut world, &map, &config, &mut events);

        assert_eq!(ball_of(&world).vel.x, -5.0);
    }

    #[test]
    fn test_no_collision_when_ball_misses_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 250.0);
        create_paddle(&mut world, Side::Ai, 250.0);
        create_ball(&mut world, Vec2::new(25.0, 100.0), Vec2::new(-5.0, 4.0));

        check_paddles(&mut world, &map, &config, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(-5.0, 4.0));
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_ball_grazing_paddle_edge_does_not_collide() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Ai, 250.0);
        // Ball box right edge exactly at paddle left edge (780)
        create_ball(&mut world, Vec2::new(770.0, 300.0), Vec2::new(5.0, 0.0));

        check_paddles(&mut world, &map, &config, &mut events);

        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 250.0);

        check_walls(&mut world, &map, &config, &mut events);
        check_paddles(&mut world, &map, &config, &mut events);

        assert_eq!(events, Events::new());
    }
}
