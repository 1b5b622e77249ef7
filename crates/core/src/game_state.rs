//! Game state module - the snake state machine and tick engine
//!
//! Owns the complete game state and every legal transition on it. Commands
//! (start/pause/reset/turn) are guarded by the current status and silently
//! ignored when they do not apply; the tick is the only thing that moves the
//! snake. No I/O, no wall-clock time, no panics: rendering reads the state
//! through accessors and the runner drives ticks through [`crate::TickClock`].

use std::collections::VecDeque;

use crate::rng::GameRng;
use crate::scoring::speed_for_score;
use crate::types::*;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened; the game was not in the playing state.
    Skipped,
    /// The snake advanced one cell.
    Moved,
    /// The snake advanced onto food and grew by one cell.
    Ate,
    /// The snake hit a wall or its own body; the game is over.
    Collided,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Body cells, head at the front. Never empty; capacity covers the whole
    /// board so growth never reallocates.
    snake: VecDeque<Position>,
    food: Position,
    /// Latest commanded heading. Turn guards compare against this value, not
    /// against the direction the snake last actually moved.
    direction: Direction,
    status: GameStatus,
    score: u32,
    /// Current tick interval; always `speed_for_score(score)`.
    speed_ms: u32,
    rng: GameRng,
}

impl GameState {
    /// Create a new game in the waiting state with the given RNG seed.
    ///
    /// The seed only influences where food respawns after the first meal;
    /// the initial layout is fixed.
    pub fn new(seed: u32) -> Self {
        let mut snake = VecDeque::with_capacity(BOARD_CELLS);
        snake.extend(INITIAL_SNAKE);

        Self {
            snake,
            food: INITIAL_FOOD,
            direction: INITIAL_DIRECTION,
            status: GameStatus::Waiting,
            score: 0,
            speed_ms: INITIAL_SPEED_MS,
            rng: GameRng::new(seed),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current tick interval in milliseconds.
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Position {
        self.food
    }

    /// Body cells, head first.
    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    /// Begin play. Only accepted from the waiting state; a finished game must
    /// be reset first.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Waiting {
            return false;
        }
        self.status = GameStatus::Playing;
        true
    }

    /// Toggle between playing and paused. No effect while waiting or after
    /// game over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                true
            }
            GameStatus::Waiting | GameStatus::GameOver => false,
        }
    }

    /// Return to the exact initial state, from any status.
    ///
    /// The RNG sequence carries across games; with the fixed initial food
    /// cell this leaves the observable reset state identical every time.
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.extend(INITIAL_SNAKE);
        self.food = INITIAL_FOOD;
        self.direction = INITIAL_DIRECTION;
        self.status = GameStatus::Waiting;
        self.score = 0;
        self.speed_ms = INITIAL_SPEED_MS;
    }

    /// Request a new heading.
    ///
    /// Accepted only while playing and only if `direction` is not the 180°
    /// opposite of the latest commanded heading. Two quick perpendicular
    /// turns within one tick can therefore reverse the snake into its own
    /// neck; that is the intended rule, not a bug.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Apply a player command. Returns whether it was accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => self.change_direction(direction),
            GameAction::StartPause => match self.status {
                GameStatus::Waiting => self.start(),
                GameStatus::Playing | GameStatus::Paused => self.toggle_pause(),
                GameStatus::GameOver => false,
            },
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Advance the game by one step.
    ///
    /// Collision is decided against the pre-move body with the head cell
    /// excluded and the tail cell included: stepping into the cell the tail
    /// is about to vacate still ends the game. On collision the state is
    /// frozen except for the status; on a meal the head is kept, the score
    /// and speed update, and food respawns on a free cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Skipped;
        }
        let Some(&head) = self.snake.front() else {
            return TickOutcome::Skipped;
        };

        let new_head = head.stepped(self.direction);

        let hit_wall = !new_head.in_bounds();
        let hit_self = self.snake.iter().skip(1).any(|&cell| cell == new_head);
        if hit_wall || hit_self {
            self.status = GameStatus::GameOver;
            return TickOutcome::Collided;
        }

        self.snake.push_front(new_head);

        if new_head == self.food {
            self.score += FOOD_SCORE;
            self.speed_ms = speed_for_score(self.score);
            if !self.spawn_food() {
                // Snake fills the board; nowhere left to put food.
                self.status = GameStatus::GameOver;
            }
            TickOutcome::Ate
        } else {
            self.snake.pop_back();
            TickOutcome::Moved
        }
    }

    /// Place food on a random free cell. Returns false when the board is
    /// completely occupied.
    fn spawn_food(&mut self) -> bool {
        if self.snake.len() >= BOARD_CELLS {
            return false;
        }
        // Rejection sampling; terminates because at least one cell is free.
        loop {
            let candidate = Position::new(
                self.rng.next_range(BOARD_SIZE as u32) as i8,
                self.rng.next_range(BOARD_SIZE as u32) as i8,
            );
            if !self.snake.contains(&candidate) {
                self.food = candidate;
                return true;
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
