pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

pub use glam::Vec2;

use hecs::World;
use log::debug;
use systems::*;

/// Advance the Pong simulation by one tick
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    directions: &mut impl DirectionSource,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Bounce off top/bottom walls
    check_walls(world, map, config, events);

    // 3. Check paddle collisions (player, then AI)
    check_paddles(world, map, config, events);

    // 4. Check scoring (ball exited left/right)
    check_scoring(world, map, config, score, events, directions);

    // 5. AI follows the ball
    move_ai_paddle(world, map, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Plain copy of the game state at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub player_paddle_y: f32,
    pub ai_paddle_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub player_score: u32,
    pub ai_score: u32,
    pub tick: u64,
}

/// A complete local game: world plus the resources `step` needs.
///
/// The game never schedules itself; the host calls [`Game::tick`] once per
/// frame (or from a fixed-rate timer) and [`Game::render`] to draw.
pub struct Game<D: DirectionSource = GameRng> {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub directions: D,
    tick: u64,
    player: hecs::Entity,
    ai: hecs::Entity,
    ball: hecs::Entity,
}

impl Game<GameRng> {
    /// Default 800x600 game with a seeded serve direction source
    pub fn new(seed: u64) -> Self {
        Self::with_parts(GameMap::new(), Config::new(), GameRng::new(seed))
    }
}

impl<D: DirectionSource> Game<D> {
    pub fn with_parts(map: GameMap, config: Config, mut directions: D) -> Self {
        let mut world = World::new();

        // Create paddles, centered
        let paddle_y = map.paddle_spawn_y(config.paddle_height);
        let player = create_paddle(&mut world, Side::Player, paddle_y);
        let ai = create_paddle(&mut world, Side::Ai, paddle_y);

        // Create ball with a random serve
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(map.center(), config.serve_speed(), &mut directions);
        debug!("initial serve velocity {}", ball.vel);
        let ball = world.spawn((ball,));

        Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            directions,
            tick: 0,
            player,
            ai,
            ball,
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) -> &Events {
        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.directions,
        );
        self.tick += 1;
        &self.events
    }

    /// Pointer moved to `pointer_y` (surface coordinates)
    pub fn set_pointer_y(&mut self, pointer_y: f32) {
        apply_pointer(&mut self.world, &self.map, &self.config, pointer_y);
    }

    /// Serve again from the center without touching the score
    pub fn reset_ball(&mut self) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(
                self.map.center(),
                self.config.serve_speed(),
                &mut self.directions,
            );
            debug!("ball reset, serve velocity {}", ball.vel);
        }
    }

    /// Move the ball directly (test harnesses, replays)
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle directly, clamped to the surface
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        let y = self.config.clamp_paddle_y(y, &self.map);
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.y = y;
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        render::render(&self.world, &self.map, &self.config, &self.score, surface);
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let paddle_y = |entity| {
            self.world
                .get::<&Paddle>(entity)
                .map(|p| p.y)
                .unwrap_or_default()
        };
        let ball = self
            .world
            .get::<&Ball>(self.ball)
            .map(|b| *b)
            .unwrap_or_else(|_| Ball::new(self.map.center(), Vec2::ZERO));

        GameSnapshot {
            player_paddle_y: paddle_y(self.player),
            ai_paddle_y: paddle_y(self.ai),
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            ball_speed_x: ball.vel.x,
            ball_speed_y: ball.vel.y,
            player_score: self.score.player,
            ai_score: self.score.ai,
            tick: self.tick,
        }
    }
}
