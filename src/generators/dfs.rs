use rand::Rng;

use crate::{
    error::{MazeError, Result},
    maze::{CellId, Grid},
};

/// Counters collected over one carving pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CarveReport {
    /// Number of walls opened. Always `cells - 1` for a finished maze.
    pub walls_removed: usize,
    /// Number of times the carver popped the backtrack stack.
    pub backtracks: usize,
    /// Deepest the backtrack stack got.
    pub max_stack_depth: usize,
}

/// Cells not yet reached by the traversal.
struct Unvisited {
    flags: Box<[bool]>,
    remaining: usize,
}

impl Unvisited {
    fn all(count: usize) -> Self {
        Unvisited {
            flags: vec![true; count].into_boxed_slice(),
            remaining: count,
        }
    }

    fn contains(&self, cell: CellId) -> bool {
        self.flags.get(cell.index()).copied().unwrap_or(false)
    }

    fn remove(&mut self, cell: CellId) {
        if let Some(flag) = self.flags.get_mut(cell.index())
            && std::mem::replace(flag, false)
        {
            self.remaining -= 1;
        }
    }

    fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    fn len(&self) -> usize {
        self.remaining
    }
}

/// Randomized depth-first carver with an explicit backtrack stack.
///
/// Holds the grid exclusively for the whole pass. Starts at cell (0, 0).
pub struct Carver<'g, R: Rng> {
    grid: &'g mut Grid,
    rng: R,
    cursor: CellId,
    unvisited: Unvisited,
    stack: Vec<CellId>,
}

impl<'g, R: Rng> Carver<'g, R> {
    /// Prepares a carving pass over a fully walled grid.
    pub fn new(grid: &'g mut Grid, rng: R) -> Result<Self> {
        if grid.is_generated() {
            return Err(MazeError::AlreadyGenerated);
        }
        let unvisited = Unvisited::all(grid.cell_count());
        Ok(Carver {
            grid,
            rng,
            cursor: CellId(0),
            unvisited,
            stack: Vec::new(),
        })
    }

    /// Unvisited geometric neighbours of `cell`, in the grid's canonical order.
    /// Wall state plays no part here.
    fn unvisited_neighbours(&self, cell: CellId) -> Vec<CellId> {
        self.grid
            .neighbours_of(cell)
            .map(|n| n.id())
            .filter(|&n| self.unvisited.contains(n))
            .collect()
    }

    fn coord(&self, cell: CellId) -> (u16, u16) {
        self.grid.location(cell).unwrap_or((u16::MAX, u16::MAX))
    }

    /// Carves the maze and marks the grid as generated.
    ///
    /// If this fails, the grid is left partially carved and not marked.
    pub fn run(mut self) -> Result<CarveReport> {
        let mut report = CarveReport::default();

        while !self.unvisited.is_empty() {
            self.unvisited.remove(self.cursor);

            let neighbours = self.unvisited_neighbours(self.cursor);
            if !neighbours.is_empty() {
                let next = neighbours[self.rng.random_range(0..neighbours.len())];
                let removed = self.grid.remove_wall_between(self.cursor, next);
                debug_assert!(removed, "Carving must only open walled passages.");
                report.walls_removed += 1;
                tracing::trace!(
                    "[carver] Carved {:?} -> {:?}",
                    self.coord(self.cursor),
                    self.coord(next)
                );
                // Put the cell back so we can look at its other neighbours later
                self.stack.push(self.cursor);
                report.max_stack_depth = report.max_stack_depth.max(self.stack.len());
                self.cursor = next;
            } else if let Some(previous) = self.stack.pop() {
                // Already visited, so it is not marked again
                report.backtracks += 1;
                tracing::trace!("[carver] Backtracking to {:?}", self.coord(previous));
                self.cursor = previous;
            } else if !self.unvisited.is_empty() {
                let cursor = self.coord(self.cursor);
                tracing::error!(
                    "[carver] Stalled at {:?} with {} unvisited cells left",
                    cursor,
                    self.unvisited.len()
                );
                return Err(MazeError::InvariantViolation {
                    cursor,
                    unvisited: self.unvisited.len(),
                });
            }
        }

        self.grid.mark_generated();
        tracing::debug!(
            "[carver] Done: {} walls removed, {} backtracks, max stack depth {}",
            report.walls_removed,
            report.backtracks,
            report.max_stack_depth
        );
        Ok(report)
    }
}
