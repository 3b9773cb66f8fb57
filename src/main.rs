use std::{io::Write, process::ExitCode};

use mazecarve::{Grid, config::Config, logging::init_logging, report::write_report};

fn main() -> ExitCode {
    let mut args = std::env::args();
    args.next(); // Skip executable name

    let config = Config::from_args(args).and_then(|c| c.with_env(|k| std::env::var(k).ok()));
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: mazecarve [rows] [cols] [--seed N] [--plain]");
            return ExitCode::FAILURE;
        }
    };

    // The report does not depend on the log file, so carry on without one
    let _guard = match init_logging(&config.log_dir, Config::LOG_FILE, config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };
    tracing::info!("Starting with {:?}", config);

    let mut grid = match Grid::new(config.rows, config.cols) {
        Ok(grid) => grid,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = grid.generate(config.seed) {
        tracing::error!("{e}");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_report(&grid, &mut stdout, config.styled).and_then(|_| stdout.flush()) {
        tracing::error!("Failed to write report: {e}");
        eprintln!("Failed to write report: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
