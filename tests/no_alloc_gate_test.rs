//! Allocation gate for the game core.
//!
//! The snake buffer is sized for the whole board up front, so after
//! construction a game must run ticks, turns, eats, and resets without
//! touching the allocator.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tui_snake::core::{GameState, TickOutcome};
use tui_snake::types::{Direction, GameAction, GameStatus, BOARD_SIZE};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicU64 = AtomicU64::new(0);

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::SeqCst) {
            ALLOC_COUNT.fetch_add(1, Ordering::SeqCst);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: CountingAlloc = CountingAlloc;

fn with_alloc_counting<T>(f: impl FnOnce() -> T) -> (T, u64) {
    ALLOC_COUNT.store(0, Ordering::SeqCst);
    COUNT_ENABLED.store(true, Ordering::SeqCst);
    let result = f();
    COUNT_ENABLED.store(false, Ordering::SeqCst);
    (result, ALLOC_COUNT.load(Ordering::SeqCst))
}

#[test]
fn test_steady_play_does_not_allocate() {
    let mut game = GameState::new(7);
    game.apply_action(GameAction::StartPause);
    // One tick moves the head to (11, 10); from there the snake can circle
    // a 2x2 block forever without meeting the food at (15, 10).
    game.tick();

    let ((), allocs) = with_alloc_counting(|| {
        for _ in 0..200 {
            game.apply_action(GameAction::Turn(Direction::Up));
            game.tick();
            game.apply_action(GameAction::Turn(Direction::Left));
            game.tick();
            game.apply_action(GameAction::Turn(Direction::Down));
            game.tick();
            game.apply_action(GameAction::Turn(Direction::Right));
            game.tick();
        }
    });

    assert_eq!(allocs, 0);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_eating_and_reset_do_not_allocate() {
    let mut game = GameState::new(1);
    game.apply_action(GameAction::StartPause);

    let (ate, allocs) = with_alloc_counting(|| {
        let mut ate = false;
        for _ in 0..5 {
            if game.tick() == TickOutcome::Ate {
                ate = true;
            }
        }
        game.apply_action(GameAction::Reset);
        ate
    });

    assert!(ate);
    assert_eq!(allocs, 0);
    assert_eq!(game.status(), GameStatus::Waiting);
}

#[test]
fn test_game_over_path_does_not_allocate() {
    let mut game = GameState::new(3);
    game.apply_action(GameAction::StartPause);
    game.apply_action(GameAction::Turn(Direction::Up));

    let (collided, allocs) = with_alloc_counting(|| {
        let mut collided = false;
        // Enough ticks to hit the wall plus a few frozen ones after.
        for _ in 0..BOARD_SIZE as usize + 2 {
            if game.tick() == TickOutcome::Collided {
                collided = true;
            }
        }
        collided
    });

    assert!(collided);
    assert_eq!(allocs, 0);
    assert_eq!(game.status(), GameStatus::GameOver);
}
