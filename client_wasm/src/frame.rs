//! One animation frame: run the due ticks, then draw

use game_core::{DirectionSource, Game, Surface};

use crate::clock::FrameClock;

/// Advance `game` by however many ticks `clock` owes at `now_ms` and render
/// the result once. Returns the number of ticks run.
pub fn run_frame<D: DirectionSource>(
    game: &mut Game<D>,
    clock: &mut FrameClock,
    now_ms: f64,
    surface: &mut impl Surface,
) -> u32 {
    let ticks = clock.advance(now_ms);
    for _ in 0..ticks {
        game.tick();
    }
    game.render(surface);
    ticks
}
