//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Longest tick period accepted from the configuration file
pub(crate) const MAX_TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Most turns that may wait for upcoming ticks; further turns are dropped
pub(crate) const MAX_QUEUED_TURNS: usize = 3;

/// Width of a tile in terminal columns.  Terminal cells are roughly twice as
/// tall as they are wide, so two columns make a tile look square.
pub(crate) const TILE_WIDTH: u16 = 2;

/// Height of a tile in terminal rows
pub(crate) const TILE_HEIGHT: u16 = 1;

/// Glyph used to fill most tiles; their color comes from the background
pub(crate) const TILE_SYMBOL: char = ' ';

/// Glyph for the tile where the snake crashed
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Fewest colors a terminal needs to support for the game to be playable
pub(crate) const MIN_COLORS: u16 = 8;

/// Default style for wall tiles
pub(crate) const WALL_STYLE: Style = Style::new().bg(Color::White);

/// Default style for the snake's segments
pub(crate) const SNAKE_STYLE: Style = Style::new().bg(Color::Green);

/// Default style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().bg(Color::Red);

/// Default style for empty interior tiles
pub(crate) const EMPTY_STYLE: Style = Style::new();

/// Default style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);
