use crate::consts;
use rand::Rng;
use ratatui::layout::{Position, Positions, Rect, Size};
use thiserror::Error;

/// The playing field for one session, measured in tiles.  The outermost ring
/// of tiles is wall; everything inside it is the interior.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Smallest allowed width & height: a wall on each side of a single
    /// interior tile
    pub(crate) const MIN_SIDE: u16 = 3;

    pub(crate) fn new(size: Size) -> Result<Grid, GridError> {
        if size.width < Self::MIN_SIDE || size.height < Self::MIN_SIDE {
            return Err(GridError::TooSmall {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Grid {
            width: size.width,
            height: size.height,
        })
    }

    /// Convert a terminal area measured in character cells into the number of
    /// whole tiles that fit in it.
    pub(crate) fn tiles_in(area: Size) -> Size {
        Size {
            width: area.width / consts::TILE_WIDTH,
            height: area.height / consts::TILE_HEIGHT,
        }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Where a new snake starts
    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Is `pos` on the border ring?  Positions outside the grid are not walls.
    pub(crate) fn is_wall(self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1)
    }

    pub(crate) fn is_interior(self, pos: Position) -> bool {
        self.contains(pos) && !self.is_wall(pos)
    }

    /// Number of interior tiles
    pub(crate) fn interior_area(self) -> usize {
        usize::from(self.width - 2) * usize::from(self.height - 2)
    }

    /// Pick an interior position uniformly at random
    pub(crate) fn random_interior<R: Rng>(self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(1..self.width - 1),
            rng.random_range(1..self.height - 1),
        )
    }

    /// Iterate over every tile of the grid, walls included, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error(
        "terminal too small: need room for at least {min}x{min} tiles, have {width}x{height}",
        min = Grid::MIN_SIDE
    )]
    TooSmall { width: u16, height: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    fn grid(width: u16, height: u16) -> Grid {
        Grid::new(Size::new(width, height)).unwrap()
    }

    #[rstest]
    #[case(Size::new(2, 10))]
    #[case(Size::new(10, 2))]
    #[case(Size::new(0, 0))]
    fn too_small(#[case] size: Size) {
        assert_eq!(
            Grid::new(size),
            Err(GridError::TooSmall {
                width: size.width,
                height: size.height
            })
        );
    }

    #[test]
    fn tiles_in_terminal() {
        assert_eq!(Grid::tiles_in(Size::new(80, 24)), Size::new(40, 24));
        assert_eq!(Grid::tiles_in(Size::new(81, 24)), Size::new(40, 24));
    }

    #[test]
    fn center() {
        assert_eq!(grid(10, 10).center(), Position::new(5, 5));
        assert_eq!(grid(40, 23).center(), Position::new(20, 11));
    }

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(0, 5), true)]
    #[case(Position::new(9, 5), true)]
    #[case(Position::new(5, 0), true)]
    #[case(Position::new(5, 9), true)]
    #[case(Position::new(1, 1), false)]
    #[case(Position::new(8, 8), false)]
    #[case(Position::new(10, 5), false)]
    fn test_is_wall(#[case] pos: Position, #[case] wall: bool) {
        assert_eq!(grid(10, 10).is_wall(pos), wall);
    }

    #[test]
    fn interior_area() {
        assert_eq!(grid(10, 10).interior_area(), 64);
        assert_eq!(grid(3, 3).interior_area(), 1);
        let g = grid(7, 5);
        assert_eq!(
            g.positions().filter(|&p| g.is_interior(p)).count(),
            g.interior_area()
        );
    }

    #[test]
    fn random_interior_stays_inside() {
        let g = grid(6, 4);
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..500 {
            let pos = g.random_interior(&mut rng);
            assert!(g.is_interior(pos), "{pos:?} is not interior");
        }
    }

    #[test]
    fn random_interior_single_cell() {
        let g = grid(3, 3);
        let mut rng = ChaCha12Rng::seed_from_u64(42);
        assert_eq!(g.random_interior(&mut rng), Position::new(1, 1));
    }
}
