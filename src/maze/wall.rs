use super::cell::CellId;

/// Handle to a wall record in a [`Grid`](super::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(pub(crate) usize);

/// Orientation of a wall line.
/// - `Vertical`: separates a cell from its right neighbour
/// - `Horizontal`: separates a cell from the neighbour below it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Shared edge state between two adjacent cells.
///
/// `cells.0` is always the top or left cell of the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    cells: (CellId, CellId),
    orientation: Orientation,
    present: bool,
}

impl Wall {
    pub(crate) fn new(first: CellId, second: CellId, orientation: Orientation) -> Self {
        Wall {
            cells: (first, second),
            orientation,
            present: true,
        }
    }

    pub fn cells(&self) -> (CellId, CellId) {
        self.cells
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the passage between the two cells is still blocked.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Opens the passage. Returns `false` if it was already open.
    pub(crate) fn remove(&mut self) -> bool {
        std::mem::replace(&mut self.present, false)
    }

    /// The other endpoint of this wall, if `cell` is one of them.
    pub fn other(&self, cell: CellId) -> Option<CellId> {
        match self.cells {
            (a, b) if a == cell => Some(b),
            (a, b) if b == cell => Some(a),
            _ => None,
        }
    }
}

/// What separates two cells, as seen by [`Grid::wall_between`](super::Grid::wall_between).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallState {
    /// The cells do not share an edge.
    NotAdjacent,
    /// The cells share an edge that is still blocked.
    Walled,
    /// The cells share an edge that has been carved open.
    Open,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_wall_once() {
        let mut wall = Wall::new(CellId(0), CellId(1), Orientation::Vertical);
        assert!(wall.is_present());
        assert!(wall.remove());
        // Removing the same wall again is a no-op
        assert!(!wall.remove());
        assert!(!wall.is_present());
    }

    #[test]
    fn test_other_endpoint() {
        let wall = Wall::new(CellId(3), CellId(7), Orientation::Horizontal);
        assert_eq!(wall.other(CellId(3)), Some(CellId(7)));
        assert_eq!(wall.other(CellId(7)), Some(CellId(3)));
        assert_eq!(wall.other(CellId(4)), None);
    }
}
