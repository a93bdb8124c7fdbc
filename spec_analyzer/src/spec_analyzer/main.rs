//!
//! The SPEC CPU report analyzer executable.
//!

pub(crate) mod arguments;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The identified CPU listing file name.
const IDENTIFIED_FILE_NAME: &str = "identified_cpus.csv";

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => spec_analyzer::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            spec_analyzer::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let config = spec_analyzer::Config::try_from(arguments.config.as_path())?;

    let summary = if arguments.from_tables {
        None
    } else {
        let reports = config.reports()?;
        if !arguments.quiet {
            println!(
                "    {} {} v{} ({} reports)",
                "Starting".bright_green().bold(),
                env!("CARGO_PKG_DESCRIPTION"),
                env!("CARGO_PKG_VERSION"),
                reports.len(),
            );
        }

        let mut summary =
            spec_analyzer::Summary::new(reports.len(), arguments.verbose, arguments.quiet);
        let ingest = spec_analyzer::Ingest::run(reports, &mut summary);
        ingest.write(arguments.output_directory.as_path())?;
        print!("{summary}");
        Some(summary)
    };

    let ingest = spec_analyzer::Ingest::read(arguments.output_directory.as_path())?;
    if arguments.auto_parallel {
        let benches = spec_analyzer::results::group_benches(ingest.benches.clone());
        for metric in spec_analyzer::Metric::ALL.into_iter() {
            println!(
                "{} {} auto-parallel contributions",
                "Analyzing".bright_green().bold(),
                metric,
            );
            for contribution in spec_analyzer::auto_parallel::top_contributions(
                ingest.tests.as_slice(),
                &benches,
                metric,
            ) {
                println!("{contribution}");
            }
        }
    }

    let results = spec_analyzer::results::assemble(
        ingest.tests,
        ingest.benches,
        &config.disqualified_benchmarks,
    );

    let mut database = spec_analyzer::CpuDatabase::default();
    for metric in spec_analyzer::Metric::ALL.into_iter() {
        let run = spec_analyzer::CalibratedRun::new(
            results.as_slice(),
            &mut database,
            metric,
            arguments.anchor,
        );
        if !arguments.quiet {
            for boundary in run.calibration.boundaries.iter() {
                println!(
                    "{} = {:.6} x {} ({} CPUs)",
                    spec_analyzer::model::BenchType::new(metric, boundary.newer),
                    boundary.ratio,
                    spec_analyzer::model::BenchType::new(metric, boundary.older),
                    boundary.candidates,
                );
            }
        }
        if arguments.calibrated {
            let path = arguments
                .output_directory
                .join(format!("calibrated_{}.csv", metric.to_string().to_lowercase()));
            write_listing(
                path.as_path(),
                run.listing(results.as_slice(), &database).as_str(),
            )?;
        }
    }
    if arguments.identified {
        let path = arguments.output_directory.join(IDENTIFIED_FILE_NAME);
        let listing = spec_analyzer::cpu::identified::encode(
            &mut database,
            results.iter().map(|result| &result.record),
        );
        write_listing(path.as_path(), listing.as_str())?;
        if !arguments.quiet {
            for (brand, count) in database.models_by_brand() {
                println!("{brand} x {count}");
            }
        }
    }
    if !arguments.quiet {
        println!(
            "{} {} CPUs across {} results",
            "Resolved".bright_green().bold(),
            database.len(),
            results.len(),
        );
    }

    if let Some(summary) = summary {
        if !summary.is_successful() {
            anyhow::bail!("Reports of an unrecognized variant were found");
        }
    }

    Ok(())
}

///
/// Writes a listing table.
///
fn write_listing(path: &Path, listing: &str) -> anyhow::Result<()> {
    std::fs::write(path, listing)
        .map_err(|error| anyhow::anyhow!("Listing {:?} writing error: {}", path, error))
}
