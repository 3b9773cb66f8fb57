pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod report;

pub use error::{MazeError, Result};
pub use generators::{CarveReport, Carver};
pub use maze::{Cell, CellId, Grid, Orientation, Wall, WallState};
