pub mod cell;
pub mod wall;

pub use cell::{Cell, CellId, Link};
pub use wall::{Orientation, Wall, WallId, WallState};

use crate::error::{MazeError, Result};

/// A fixed-size lattice of cells with a wall record on every adjacency.
///
/// Cells and walls live in two flat arenas. Adjacency is fixed at
/// construction; only wall flags change afterwards, and only through the
/// carver.
pub struct Grid {
    cells: Box<[Cell]>,
    walls: Box<[Wall]>,
    rows: u16,
    cols: u16,
    generated: bool,
}

impl Grid {
    /// Builds a fully walled `rows` x `cols` grid.
    ///
    /// Every pair of horizontally or vertically adjacent cells gets exactly
    /// one wall, initially present.
    pub fn new(rows: u16, cols: u16) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }

        let (r, c) = (rows as usize, cols as usize);
        // Vertical walls come first in the arena, one per horizontally adjacent pair,
        // followed by horizontal walls, one per vertically adjacent pair.
        let vertical_count = r * (c - 1);
        let horizontal_count = (r - 1) * c;

        let mut walls = Vec::with_capacity(vertical_count + horizontal_count);
        (0..r).for_each(|row| {
            (0..c - 1).for_each(|col| {
                walls.push(Wall::new(
                    CellId(row * c + col),
                    CellId(row * c + col + 1),
                    Orientation::Vertical,
                ));
            })
        });
        (0..r - 1).for_each(|row| {
            (0..c).for_each(|col| {
                walls.push(Wall::new(
                    CellId(row * c + col),
                    CellId((row + 1) * c + col),
                    Orientation::Horizontal,
                ));
            })
        });

        let vertical_wall = |row: usize, col: usize| WallId(row * (c - 1) + col);
        let horizontal_wall = |row: usize, col: usize| WallId(vertical_count + row * c + col);

        let mut cells = Vec::with_capacity(r * c);
        for row in 0..rows {
            for col in 0..cols {
                let (ri, ci) = (row as usize, col as usize);
                let mut cell = Cell::new(CellId(ri * c + ci), (row, col));
                for (nr, nc) in neighbour_coords((row, col), rows, cols) {
                    let (nri, nci) = (nr as usize, nc as usize);
                    let wall = if nri == ri {
                        vertical_wall(ri, ci.min(nci))
                    } else {
                        horizontal_wall(ri.min(nri), ci)
                    };
                    cell.push_link(Link {
                        neighbour: CellId(nri * c + nci),
                        wall,
                    });
                }
                cells.push(cell);
            }
        }

        tracing::debug!(
            "[grid] Built {}x{} grid with {} cells and {} walls",
            rows,
            cols,
            cells.len(),
            walls.len()
        );

        Ok(Grid {
            cells: cells.into_boxed_slice(),
            walls: walls.into_boxed_slice(),
            rows,
            cols,
            generated: false,
        })
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Whether the carver has already run over this grid.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Checks if the given (row, col) coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    fn ravel_index(&self, row: u16, col: u16) -> usize {
        // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
        row as usize * self.cols as usize + col as usize
    }

    /// Returns the cell at (`row`, `col`).
    pub fn cell_at(&self, row: u16, col: u16) -> Result<&Cell> {
        if !self.is_in_bounds((row, col)) {
            return Err(MazeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.cells[self.ravel_index(row, col)])
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// Reverse lookup from a cell handle to its (row, col) coordinate.
    pub fn location(&self, id: CellId) -> Option<(u16, u16)> {
        self.cell(id).map(Cell::coord)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Geometric neighbours of `id` in left, right, up, down order.
    ///
    /// Wall state is ignored. A handle that does not belong to this grid has
    /// no neighbours.
    pub fn neighbours_of(&self, id: CellId) -> impl Iterator<Item = &Cell> {
        self.cells
            .get(id.0)
            .into_iter()
            .flat_map(|cell| cell.links())
            .map(move |link| &self.cells[link.neighbour.0])
    }

    /// Reports whether `a` and `b` are adjacent, and if so whether the wall
    /// between them still stands.
    pub fn wall_between(&self, a: CellId, b: CellId) -> WallState {
        match self.cell(a).and_then(|cell| cell.link_to(b)) {
            None => WallState::NotAdjacent,
            Some(link) if self.walls[link.wall.0].is_present() => WallState::Walled,
            Some(_) => WallState::Open,
        }
    }

    /// Pairs of adjacent cells with no wall between them.
    pub fn open_passages(&self) -> impl Iterator<Item = (CellId, CellId)> {
        self.walls
            .iter()
            .filter(|wall| !wall.is_present())
            .map(Wall::cells)
    }

    /// Removes the wall between two adjacent cells.
    /// Returns `true` if a wall was removed, `false` if the cells are not
    /// adjacent or the passage was already open.
    pub(crate) fn remove_wall_between(&mut self, a: CellId, b: CellId) -> bool {
        let Some(wall) = self.cell(a).and_then(|cell| cell.link_to(b)).map(|l| l.wall) else {
            return false;
        };
        self.walls[wall.0].remove()
    }

    pub(crate) fn mark_generated(&mut self) {
        self.generated = true;
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    /// # Panics
    /// If the (row, col) coordinate is out of bounds. Use [`Grid::cell_at`] for a checked lookup.
    fn index(&self, index: (u16, u16)) -> &Self::Output {
        if !self.is_in_bounds(index) {
            panic!("The given coordinate is out of bounds");
        }
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}

/// In-bounds neighbour coordinates of a (row, col) cell, in left, right, up, down order.
fn neighbour_coords(coord: (u16, u16), rows: u16, cols: u16) -> impl Iterator<Item = (u16, u16)> {
    let (row, col) = coord;
    [
        // NOTE: This way of handling underflow/overflow is overflow-safe.
        // When row or col is 0, wrap the decrement to u16::MAX,
        // and automatically filter it out in the bounds check.
        // When row + 1 or col + 1 exceeds u16::MAX, saturate to u16::MAX, which is
        // never a valid index since the largest dimension is u16::MAX.
        (row, col.wrapping_sub(1)),
        (row, col.saturating_add(1)),
        (row.wrapping_sub(1), col),
        (row.saturating_add(1), col),
    ]
    .into_iter()
    .filter(move |&(r, c)| r < rows && c < cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords<'a>(cells: impl Iterator<Item = &'a Cell>) -> Vec<(u16, u16)> {
        cells.map(Cell::coord).collect()
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5).err(),
            Some(MazeError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0).err(),
            Some(MazeError::InvalidDimension { rows: 5, cols: 0 })
        );
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn test_dimensions_and_counts() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.cell_count(), 12);
        // 3 rows * 3 vertical walls + 2 rows of 4 horizontal walls
        assert_eq!(grid.wall_count(), 17);
        assert!(grid.walls().iter().all(Wall::is_present));
        assert!(!grid.is_generated());
    }

    #[test]
    fn test_single_cell_has_no_walls() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(grid.wall_count(), 0);
        let cell = grid.cell_at(0, 0).unwrap();
        assert_eq!(grid.neighbours_of(cell.id()).count(), 0);
    }

    #[test]
    fn test_cell_at() {
        let grid = Grid::new(3, 5).unwrap();
        let cell = grid.cell_at(2, 4).unwrap();
        assert_eq!(cell.coord(), (2, 4));
        assert_eq!(grid.location(cell.id()), Some((2, 4)));
        assert_eq!(&grid[(2, 4)], cell);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(
            grid.cell_at(3, 0).err(),
            Some(MazeError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 5
            })
        );
        assert!(grid.cell_at(0, 5).is_err());
        assert!(!grid.is_in_bounds((3, 5)));
        assert!(grid.is_in_bounds((2, 4)));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 2).unwrap();
        let _ = &grid[(2, 0)];
    }

    #[test]
    fn test_neighbour_order() {
        let grid = Grid::new(3, 3).unwrap();
        let centre = grid.cell_at(1, 1).unwrap().id();
        assert_eq!(
            coords(grid.neighbours_of(centre)),
            vec![(1, 0), (1, 2), (0, 1), (2, 1)]
        );

        let corner = grid.cell_at(0, 0).unwrap().id();
        assert_eq!(coords(grid.neighbours_of(corner)), vec![(0, 1), (1, 0)]);

        let edge = grid.cell_at(2, 1).unwrap().id();
        assert_eq!(
            coords(grid.neighbours_of(edge)),
            vec![(2, 0), (2, 2), (1, 1)]
        );
    }

    #[test]
    fn test_neighbours_in_bounds_and_stable() {
        for (rows, cols) in [(1, 1), (1, 6), (6, 1), (4, 7), (9, 9)] {
            let grid = Grid::new(rows, cols).unwrap();
            for cell in grid.cells() {
                let first = coords(grid.neighbours_of(cell.id()));
                assert!(first.len() <= 4);
                for &(r, c) in &first {
                    assert!(grid.is_in_bounds((r, c)));
                    assert_eq!(r.abs_diff(cell.row()) + c.abs_diff(cell.col()), 1);
                }
                assert_eq!(first, coords(grid.neighbours_of(cell.id())));
            }
        }
    }

    #[test]
    fn test_adjacency_is_symmetric_with_shared_wall() {
        let grid = Grid::new(4, 5).unwrap();
        for cell in grid.cells() {
            for link in cell.links() {
                let back = grid.cell(link.neighbour).unwrap().link_to(cell.id()).unwrap();
                assert_eq!(back.wall, link.wall);
                let wall = &grid.walls()[link.wall.0];
                assert_eq!(wall.other(cell.id()), Some(link.neighbour));
            }
        }
    }

    #[test]
    fn test_wall_orientation() {
        let grid = Grid::new(2, 2).unwrap();
        let a = grid.cell_at(0, 0).unwrap();
        let right = grid.cell_at(0, 1).unwrap();
        let below = grid.cell_at(1, 0).unwrap();
        let to_right = a.link_to(right.id()).unwrap().wall;
        let to_below = a.link_to(below.id()).unwrap().wall;
        assert_eq!(grid.walls()[to_right.0].orientation(), Orientation::Vertical);
        assert_eq!(grid.walls()[to_below.0].orientation(), Orientation::Horizontal);
    }

    #[test]
    fn test_wall_between_states() {
        let mut grid = Grid::new(3, 3).unwrap();
        let a = grid.cell_at(0, 0).unwrap().id();
        let b = grid.cell_at(0, 1).unwrap().id();
        let diagonal = grid.cell_at(1, 1).unwrap().id();

        assert_eq!(grid.wall_between(a, b), WallState::Walled);
        assert_eq!(grid.wall_between(a, diagonal), WallState::NotAdjacent);
        assert_eq!(grid.wall_between(a, a), WallState::NotAdjacent);

        assert!(grid.remove_wall_between(a, b));
        assert_eq!(grid.wall_between(a, b), WallState::Open);
        assert_eq!(grid.wall_between(b, a), WallState::Open);
        // Trying to remove the same wall again should return false
        assert!(!grid.remove_wall_between(b, a));
        assert!(!grid.remove_wall_between(a, diagonal));
        assert_eq!(grid.open_passages().collect::<Vec<_>>(), vec![(a, b)]);
    }

    #[test]
    fn test_non_adjacent_pairs() {
        for (rows, cols) in [(1, 3), (3, 1), (3, 4), (5, 5)] {
            let grid = Grid::new(rows, cols).unwrap();
            for a in grid.cells() {
                for b in grid.cells() {
                    let distance = a.row().abs_diff(b.row()) + a.col().abs_diff(b.col());
                    let state = grid.wall_between(a.id(), b.id());
                    if distance == 1 {
                        assert_eq!(state, WallState::Walled);
                    } else {
                        assert_eq!(state, WallState::NotAdjacent);
                    }
                }
            }
        }
    }

    #[test]
    fn test_foreign_handle() {
        let big = Grid::new(4, 4).unwrap();
        let small = Grid::new(2, 2).unwrap();
        let foreign = big.cell_at(3, 3).unwrap().id();
        assert!(small.cell(foreign).is_none());
        assert_eq!(small.neighbours_of(foreign).count(), 0);
        assert_eq!(
            small.wall_between(foreign, CellId(0)),
            WallState::NotAdjacent
        );
    }
}
