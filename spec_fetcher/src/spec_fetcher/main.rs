//!
//! The SPEC CPU result report fetcher executable.
//!

pub(crate) mod arguments;

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

use self::arguments::Arguments;

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
    let fetcher = spec_fetcher::CachedFetcher::new(
        spec_fetcher::HttpTransport::default(),
        Duration::from_millis(arguments.initial_delay_ms),
        arguments.quiet,
    );

    let mut targets = Vec::new();
    for generation in config.generations.iter() {
        let index = &generation.index;
        fetcher.fetch(index.url.as_str(), index.path.as_path())?;
        if !arguments.quiet {
            println!(
                "    {} {:?} ...",
                "Scanning".bright_green().bold(),
                index.path,
            );
        }
        let page = std::fs::read(index.path.as_path()).map_err(|error| {
            anyhow::anyhow!("Index page {:?} reading error: {}", index.path, error)
        })?;
        let page = spec_analyzer::scan::decode(page.as_slice());
        targets.extend(spec_fetcher::discovery::discover(
            index,
            generation.directory.as_path(),
            page.as_str(),
        ));
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(arguments.jobs)
        .build_global()
        .map_err(|error| anyhow::anyhow!("Thread pool building error: {}", error))?;

    let total = targets.len();
    let done = AtomicUsize::new(0);
    let errors: Vec<spec_fetcher::FetchError> = targets
        .par_iter()
        .filter_map(|target| {
            let result = fetcher.fetch(target.url.as_str(), target.path.as_path());
            let done = done.fetch_add(1, Ordering::SeqCst) + 1;
            match result {
                Ok(fetched) => {
                    if !arguments.quiet {
                        println!("{done}/{total} ... {fetched} {}", target.url);
                    }
                    None
                }
                Err(error) => {
                    eprintln!("{done}/{total} ... {} {}", "FAILED".bright_red(), error);
                    Some(error)
                }
            }
        })
        .collect();

    if !errors.is_empty() {
        anyhow::bail!("{} of {} files could not be fetched", errors.len(), total);
    }

    Ok(())
}
