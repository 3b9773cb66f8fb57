use std::{
    process::ExitCode,
    time::{Duration, Instant},
};

use mazecarve::{Grid, config::Config, logging::init_logging};

const DEFAULT_ITERATIONS: usize = 10;

/// Mean time per maze. Zero iterations count as one.
fn per_maze(total: Duration, iterations: usize) -> Duration {
    total.div_f64(iterations.max(1) as f64)
}

fn main() -> ExitCode {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERATIONS);

    let config = Config::default()
        .with_env(|k| std::env::var(k).ok())
        .unwrap_or_default();
    let _guard = match init_logging(&config.log_dir, "profile.log", config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };

    let (rows, cols) = (u8::MAX as u16, u8::MAX as u16);
    let started = Instant::now();
    for iteration in 0..num_iters {
        let iter_start = Instant::now();
        let mut grid = match Grid::new(rows, cols) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        };
        match grid.generate(None) {
            Ok(report) => tracing::info!(
                "[profile] Iteration {}: {:?} in {:?}",
                iteration,
                report,
                iter_start.elapsed()
            ),
            Err(e) => {
                tracing::error!("[profile] Iteration {} failed: {}", iteration, e);
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let total = started.elapsed();
    println!(
        "Generated {num_iters} mazes of {rows}x{cols} in {total:?} ({:?} per maze)",
        per_maze(total, num_iters)
    );
    ExitCode::SUCCESS
}
