//! The terminal the game is drawn on and read from
use crate::consts;
use crate::game::{GameState, Grid};
use crossterm::event::{poll, read, Event};
use enum_map::{Enum, EnumMap};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::Style,
    widgets::Widget,
    Terminal,
};
use std::io;
use std::time::Duration;
use thiserror::Error;

/// What the game loop needs from a display
pub(crate) trait Surface {
    /// Return the number of whole tiles that fit on the display
    fn grid_size(&self) -> io::Result<Size>;

    /// Draw the current state of a session
    fn paint<R>(&mut self, game: &GameState<R>) -> io::Result<()>;

    /// Clear the display so that the next `paint()` redraws everything
    fn force_redraw(&mut self) -> io::Result<()>;

    /// Wait up to `timeout` for an input event; `None` waits forever.
    /// Returns `None` on timeout.
    fn poll_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<Event>>;
}

/// A [`Surface`] on a real terminal
#[derive(Debug)]
pub(crate) struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    palette: Palette,
}

impl<B: Backend> TerminalSurface<B> {
    pub(crate) fn new(terminal: Terminal<B>, palette: Palette) -> Self {
        TerminalSurface { terminal, palette }
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn grid_size(&self) -> io::Result<Size> {
        Ok(Grid::tiles_in(self.terminal.size()?))
    }

    fn paint<R>(&mut self, game: &GameState<R>) -> io::Result<()> {
        self.terminal.draw(|frame| {
            frame.render_widget(Board::new(game, &self.palette), frame.area());
        })?;
        Ok(())
    }

    fn force_redraw(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn poll_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<Event>> {
        match timeout {
            Some(t) if !poll(t)? => Ok(None),
            _ => read().map(Some),
        }
    }
}

/// The kinds of tile that can be painted
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Tile {
    Empty,
    Wall,
    SnakeBody,
    Food,
    /// The tile where the snake crashed
    Collision,
}

impl Tile {
    fn symbol(self) -> char {
        match self {
            Tile::Collision => consts::COLLISION_SYMBOL,
            _ => consts::TILE_SYMBOL,
        }
    }
}

/// The style used to paint each kind of tile
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Palette(EnumMap<Tile, Style>);

impl Palette {
    pub(crate) fn get(&self, tile: Tile) -> Style {
        self.0[tile]
    }

    pub(crate) fn set(&mut self, tile: Tile, style: Style) {
        self.0[tile] = style;
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette(EnumMap::from_fn(|tile| match tile {
            Tile::Empty => consts::EMPTY_STYLE,
            Tile::Wall => consts::WALL_STYLE,
            Tile::SnakeBody => consts::SNAKE_STYLE,
            Tile::Food => consts::FOOD_STYLE,
            Tile::Collision => consts::COLLISION_STYLE,
        }))
    }
}

/// Widget that paints a session's grid tile by tile, starting at the top-left
/// of the area it's given
#[derive(Debug)]
pub(crate) struct Board<'a, R> {
    game: &'a GameState<R>,
    palette: &'a Palette,
}

impl<'a, R> Board<'a, R> {
    pub(crate) fn new(game: &'a GameState<R>, palette: &'a Palette) -> Self {
        Board { game, palette }
    }
}

impl<R> Widget for Board<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = self.game.grid();
        let mut canvas = Canvas {
            area,
            buf,
            palette: self.palette,
        };
        for pos in grid.positions() {
            let tile = if grid.is_wall(pos) {
                Tile::Wall
            } else {
                Tile::Empty
            };
            canvas.paint_tile(pos, tile);
        }
        if let Some(pos) = self.game.food() {
            canvas.paint_tile(pos, Tile::Food);
        }
        for pos in self.game.snake().segments() {
            canvas.paint_tile(pos, Tile::SnakeBody);
        }
        // Last, so that it covers whatever the snake ran into
        if let Some(pos) = self.game.collision() {
            canvas.paint_tile(pos, Tile::Collision);
        }
    }
}

#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    palette: &'a Palette,
}

impl Canvas<'_> {
    /// Paint the tile at grid position `pos`.  Any part of the tile that falls
    /// outside the canvas area is skipped.
    fn paint_tile(&mut self, pos: Position, tile: Tile) {
        let style = Style::reset().patch(self.palette.get(tile));
        let symbol = tile.symbol();
        for dy in 0..consts::TILE_HEIGHT {
            for dx in 0..consts::TILE_WIDTH {
                let Some(x) = pos
                    .x
                    .checked_mul(consts::TILE_WIDTH)
                    .and_then(|x| x.checked_add(dx))
                    .and_then(|x| x.checked_add(self.area.x))
                else {
                    continue;
                };
                let Some(y) = pos
                    .y
                    .checked_mul(consts::TILE_HEIGHT)
                    .and_then(|y| y.checked_add(dy))
                    .and_then(|y| y.checked_add(self.area.y))
                else {
                    continue;
                };
                if !self.area.contains(Position { x, y }) {
                    continue;
                }
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.set_char(symbol);
                    cell.set_style(style);
                }
            }
        }
    }
}

/// Check that the terminal can show colors.  `term` is the value of the
/// `TERM` environment variable, and `colors` is the number of colors the
/// terminal reports.
pub(crate) fn check_colors(term: Option<&str>, colors: u16) -> Result<(), SurfaceError> {
    if term.is_some_and(|t| t == "dumb") {
        return Err(SurfaceError::Dumb);
    }
    if colors < consts::MIN_COLORS {
        return Err(SurfaceError::TooFewColors(colors));
    }
    Ok(())
}

/// [`check_colors()`] for the terminal the process is running in
pub(crate) fn check_terminal_colors() -> Result<(), SurfaceError> {
    let term = std::env::var("TERM").ok();
    check_colors(
        term.as_deref(),
        crossterm::style::available_color_count(),
    )
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SurfaceError {
    #[error("terminal does not support color")]
    Dumb,
    #[error(
        "terminal supports only {0} colors; at least {min} are needed",
        min = consts::MIN_COLORS
    )]
    TooFewColors(u16),
}
