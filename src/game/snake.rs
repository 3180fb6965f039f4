use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's body.
///
/// All positions are in tile coordinates on the grid the snake lives in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The positions of all of the cells in the snake, head first and tail
    /// last.  Never empty.
    pub(super) segments: VecDeque<Position>,
}

impl Snake {
    /// Create a new snake consisting of only a head at `head`
    pub(crate) fn new(head: Position) -> Snake {
        Snake {
            segments: VecDeque::from([head]),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.segments[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over the snake's segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Would the head moving to `pos` run into the snake's own body?  When
    /// not `growing`, the tail cell is about to be vacated and so is not
    /// counted.
    pub(crate) fn bites(&self, pos: Position, growing: bool) -> bool {
        let occupied = if growing {
            self.segments.len()
        } else {
            self.segments.len() - 1
        };
        self.segments.range(..occupied).any(|&p| p == pos)
    }

    /// Push a new head at `pos`.  Unless `grow` is true, the tail segment is
    /// dropped so that the length stays the same.
    pub(crate) fn advance(&mut self, pos: Position, grow: bool) {
        self.segments.push_front(pos);
        if !grow {
            let _ = self.segments.pop_back();
        }
    }
}
