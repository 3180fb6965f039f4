use crate::command::Command;
use crate::consts;
use crate::game::{Direction, GameState, Grid, GridError, Phase};
use crate::surface::Surface;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};
use thiserror::Error;

/// The game loop: one session at a time, restarted on request or after a
/// crash until the player quits
#[derive(Clone, Debug)]
pub(crate) struct App {
    game: GameState,
    tick_period: Duration,
    /// Turns entered while running that have not been applied yet; one is
    /// taken per tick
    turns: VecDeque<Direction>,
    /// Set when the terminal is resized; the next loop iteration clears and
    /// repaints the whole screen
    redraw: bool,
}

impl App {
    pub(crate) fn new<S: Surface>(surface: &S, tick_period: Duration) -> Result<App, AppError> {
        Ok(App {
            game: GameState::new(Grid::new(surface.grid_size()?)?),
            tick_period,
            turns: VecDeque::new(),
            redraw: false,
        })
    }

    pub(crate) fn run<S: Surface>(&mut self, surface: &mut S) -> Result<(), AppError> {
        loop {
            if std::mem::take(&mut self.redraw) {
                surface.force_redraw()?;
            }
            surface.paint(&self.game)?;
            let flow = if self.game.phase() == Phase::Running {
                self.run_tick(surface)?
            } else {
                match surface.poll_event(None)? {
                    Some(event) => self.handle_event(event, &*surface)?,
                    None => Flow::Continue,
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Handle input until the tick period has passed, then advance the game.
    /// Returns early without advancing if the session stops running.
    fn run_tick<S: Surface>(&mut self, surface: &mut S) -> Result<Flow, AppError> {
        let deadline = Instant::now() + self.tick_period;
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() {
                break;
            }
            let Some(event) = surface.poll_event(Some(wait))? else {
                break;
            };
            if self.handle_event(event, &*surface)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
            if self.game.phase() != Phase::Running {
                return Ok(Flow::Continue);
            }
        }
        if let Some(d) = self.turns.pop_front() {
            self.game.set_direction(d);
        }
        let result = self.game.tick();
        log::trace!("{result:?}, heading {:?}", self.game.direction());
        if self.game.is_collision() {
            log::info!(
                "Snake survived {} ticks and reached length {}",
                self.game.ticks(),
                self.game.snake().len()
            );
        }
        Ok(Flow::Continue)
    }

    fn handle_event<S: Surface>(&mut self, event: Event, surface: &S) -> Result<Flow, AppError> {
        if let Event::Resize(width, height) = event {
            log::debug!("Terminal resized to {width}x{height}");
            self.redraw = true;
        } else if let Some(cmd) = event.as_key_event().and_then(Command::from_key_event) {
            return self.handle_command(cmd, surface);
        }
        Ok(Flow::Continue)
    }

    fn handle_command<S: Surface>(
        &mut self,
        cmd: Command,
        surface: &S,
    ) -> Result<Flow, AppError> {
        match (self.game.phase(), cmd) {
            (_, Command::Quit) => {
                log::info!("Quit requested");
                self.game.end();
                return Ok(Flow::Quit);
            }
            (_, Command::Restart) => {
                log::info!("Restart requested");
                self.game.end();
                self.new_session(surface)?;
            }
            (Phase::Ended, cmd) => {
                if let Some(d) = cmd.direction() {
                    self.new_session(surface)?;
                    self.game.set_direction(d);
                }
            }
            (Phase::AwaitingFirstDirection, cmd) => {
                if let Some(d) = cmd.direction() {
                    self.game.set_direction(d);
                }
            }
            (Phase::Running, cmd) => {
                if let Some(d) = cmd.direction() {
                    if self.turns.len() < consts::MAX_QUEUED_TURNS {
                        self.turns.push_back(d);
                    } else {
                        log::debug!("Dropping turn {d:?}; too many turns pending");
                    }
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Replace the current session with a fresh one sized to the terminal.
    /// If the terminal has become too small for a grid, the old grid size is
    /// kept.
    fn new_session<S: Surface>(&mut self, surface: &S) -> Result<(), AppError> {
        let grid = match Grid::new(surface.grid_size()?) {
            Ok(grid) => grid,
            Err(e) => {
                let grid = self.game.grid();
                log::warn!("{e}; keeping {}x{} grid", grid.width(), grid.height());
                grid
            }
        };
        log::info!(
            "Starting new session on {}x{} grid",
            grid.width(),
            grid.height()
        );
        self.turns.clear();
        self.game = GameState::new(grid);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}
