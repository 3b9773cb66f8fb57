use std::fmt;

use super::wall::WallId;

/// Handle to a cell in a [`Grid`](super::Grid).
///
/// Wraps the row-major flattened index of the cell, so a handle is only
/// meaningful for the grid that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// The row-major index of the cell inside its grid.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One entry of a cell's adjacency list.
///
/// The wall flag itself lives in the grid's wall arena; both endpoints of an
/// adjacency point at the same [`WallId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub neighbour: CellId,
    pub wall: WallId,
}

/// A single cell of the maze lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    /// (row, col)
    coord: (u16, u16),
    /// Ordered left, right, up, down. Fixed once the grid is built.
    links: Vec<Link>,
}

impl Cell {
    pub(crate) fn new(id: CellId, coord: (u16, u16)) -> Self {
        Cell {
            id,
            coord,
            links: Vec::with_capacity(4),
        }
    }

    pub(crate) fn push_link(&mut self, link: Link) {
        debug_assert!(self.links.len() < 4, "A cell has at most four neighbours.");
        self.links.push(link);
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    /// The (row, col) coordinate of this cell.
    pub fn coord(&self) -> (u16, u16) {
        self.coord
    }

    pub fn row(&self) -> u16 {
        self.coord.0
    }

    pub fn col(&self) -> u16 {
        self.coord.1
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Finds the link leading to `neighbour`, if the two cells are adjacent.
    pub fn link_to(&self, neighbour: CellId) -> Option<&Link> {
        self.links.iter().find(|link| link.neighbour == neighbour)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell[{}, {}]", self.coord.0, self.coord.1)
    }
}
