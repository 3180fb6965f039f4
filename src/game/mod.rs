mod direction;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, GridError};
use self::snake::Snake;
use rand::Rng;
use ratatui::layout::Position;

/// One session of the game: the grid, the snake on it, the food, and where
/// the snake is headed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    /// `None` only once the snake fills the whole interior
    food: Option<Position>,
    /// The direction the snake will move in on the next tick
    direction: Option<Direction>,
    /// The direction the snake moved in on the most recent tick, or the first
    /// direction chosen if it has not moved yet
    heading: Option<Direction>,
    phase: Phase,
    /// Where the head ran into a wall or the body, if it did
    collision: Option<Position>,
    /// How many times the snake has moved
    ticks: u32,
}

impl GameState<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid) -> Self {
        GameState::new_with_rng(grid, rand::rng())
    }
}

impl<R: Rng> GameState<R> {
    pub(crate) fn new_with_rng(grid: Grid, rng: R) -> GameState<R> {
        let mut game = GameState {
            rng,
            grid,
            snake: Snake::new(grid.center()),
            food: None,
            direction: None,
            heading: None,
            phase: Phase::AwaitingFirstDirection,
            collision: None,
            ticks: 0,
        };
        game.place_food();
        game
    }

    /// Advance the snake by one tile in the current direction.
    ///
    /// Does nothing and returns [`TickResult::Continue`] unless the session
    /// is running.
    pub(crate) fn tick(&mut self) -> TickResult {
        let (Phase::Running, Some(direction)) = (self.phase, self.direction) else {
            return TickResult::Continue;
        };
        self.heading = Some(direction);
        let head = self.snake.head();
        let Some(pos) = direction.step(head).filter(|&p| self.grid.contains(p)) else {
            return self.crash(head, TickResult::HitWall);
        };
        let growing = self.food == Some(pos);
        if self.grid.is_wall(pos) {
            return self.crash(pos, TickResult::HitWall);
        }
        if self.snake.bites(pos, growing) {
            return self.crash(pos, TickResult::HitSelf);
        }
        self.snake.advance(pos, growing);
        self.ticks = self.ticks.saturating_add(1);
        if growing {
            log::debug!("Ate food at {pos:?}; snake is now {} long", self.snake.len());
            self.place_food();
            TickResult::AteFood
        } else {
            TickResult::Continue
        }
    }

    /// Put the food on a random interior tile not covered by the snake.  If
    /// the snake covers the whole interior, there is no food.
    pub(crate) fn place_food(&mut self) {
        if self.snake.len() >= self.grid.interior_area() {
            self.food = None;
            return;
        }
        self.food = loop {
            let pos = self.grid.random_interior(&mut self.rng);
            if self.grid.is_interior(pos) && !self.snake.contains(pos) {
                break Some(pos);
            }
        };
    }
}

impl<R> GameState<R> {
    /// Request that the snake move in `direction`.  The first request of a
    /// session starts it.  Requests to turn straight back the way the snake
    /// last moved are ignored.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        match self.phase {
            Phase::AwaitingFirstDirection => {
                log::info!("Session started heading {direction:?}");
                self.direction = Some(direction);
                self.heading = Some(direction);
                self.phase = Phase::Running;
            }
            Phase::Running => {
                if self.heading != Some(direction.reverse()) {
                    self.direction = Some(direction);
                }
            }
            Phase::Ended => (),
        }
    }

    /// End the session at the player's request
    pub(crate) fn end(&mut self) {
        if self.phase != Phase::Ended {
            log::info!("Session ended on request at length {}", self.snake.len());
            self.phase = Phase::Ended;
        }
    }

    /// Did the session end because the snake hit something?
    pub(crate) fn is_collision(&self) -> bool {
        self.collision.is_some()
    }

    pub(crate) fn collision(&self) -> Option<Position> {
        self.collision
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Position> {
        self.food
    }

    pub(crate) fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Number of ticks the snake has survived this session
    pub(crate) fn ticks(&self) -> u32 {
        self.ticks
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    fn crash(&mut self, pos: Position, result: TickResult) -> TickResult {
        log::info!(
            "Session ended with {result:?} at {pos:?} at length {}",
            self.snake.len()
        );
        self.collision = Some(pos);
        self.phase = Phase::Ended;
        result
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// The snake is placed but stays put until the player picks a direction
    AwaitingFirstDirection,
    Running,
    /// The snake crashed or the player quit/restarted.  A new session needs a
    /// new `GameState`.
    Ended,
}

/// What happened on a call to [`GameState::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickResult {
    Continue,
    AteFood,
    HitWall,
    HitSelf,
}
