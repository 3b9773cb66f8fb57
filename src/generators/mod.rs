use rand::{Rng, SeedableRng, rngs::StdRng};

mod dfs;

pub use dfs::{CarveReport, Carver};

use crate::{error::Result, maze::Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

impl Grid {
    /// Carves this grid into a perfect maze.
    ///
    /// Without a seed the carver draws from OS entropy. A grid can only be
    /// generated once; a second call fails with
    /// [`MazeError::AlreadyGenerated`](crate::MazeError::AlreadyGenerated)
    /// and leaves the walls untouched.
    pub fn generate(&mut self, seed: Option<u64>) -> Result<CarveReport> {
        self.generate_with(get_rng(seed))
    }

    /// Like [`Grid::generate`], drawing neighbour choices from `rng`.
    pub fn generate_with<R: Rng>(&mut self, rng: R) -> Result<CarveReport> {
        let (rows, cols) = self.dimensions();
        let report = Carver::new(self, rng)?.run()?;
        tracing::info!(
            "[carver] Generated {}x{} maze ({} passages opened)",
            rows,
            cols,
            report.walls_removed
        );
        Ok(report)
    }
}
