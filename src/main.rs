//! Cookie Trails command-line calculator

use std::{
    borrow::Cow,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use tracing::{error, info};

use cookie_trails::{
    catalog::{Catalog, TableError},
    config::{Command, Config, counts_from_pairs},
    observability::init_logging,
    report::{ReportError, write_counts_table},
};

/// Cookie Trails entry point
pub fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            _ = err.print();

            return ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1));
        }
    };

    if let Err(err) = init_logging(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for logging errors"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    // Tables are validated once, before any calculation runs.
    let catalog = match load_catalog(config.tables.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(%err, "refusing to start with invalid cookie tables");

            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match run(&mut handle, &config.command, &catalog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "calculation failed");

            ExitCode::FAILURE
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>, TableError> {
    match path {
        Some(path) => Ok(Cow::Owned(Catalog::from_yaml_file(path)?)),
        None => {
            info!("using standard cookie tables");

            Ok(Cow::Borrowed(Catalog::standard()))
        }
    }
}

fn run(out: &mut impl Write, command: &Command, catalog: &Catalog) -> Result<(), ReportError> {
    match command {
        Command::Cost { boxes } => {
            let counts = counts_from_pairs(boxes);
            let total = catalog.to_money(catalog.cost(&counts))?;

            writeln!(out, "{} boxes: {total}", counts.total())?;
        }
        Command::Estimate { total, threshold } => {
            let counts = catalog.distribution(*total);

            write_counts_table(out, catalog, &counts, *threshold)?;
        }
        Command::Cases { boxes, threshold } => {
            let counts = counts_from_pairs(boxes);

            write_counts_table(out, catalog, &counts, *threshold)?;
        }
    }

    Ok(())
}
