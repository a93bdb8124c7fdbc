//!
//! The corpus scan summary.
//!


use std::path::Path;

use colored::Colorize;

use crate::report::Error;
use crate::report::Outcome;

///
/// The corpus scan summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The number of reports to scan.
    total: usize,
    /// The output verbosity.
    verbosity: bool,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The admitted reports counter.
    admitted: usize,
    /// The disqualified reports counter.
    disqualified: usize,
    /// The rate reports counter.
    rate_excluded: usize,
    /// The skipped reports counter.
    skipped: usize,
    /// The reports skipped for an unrecognized benchmark label.
    unrecognized: usize,
}

impl Summary {
    /// The number of reports between two progress lines.
    pub const MILESTONE: usize = 100;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(total: usize, verbosity: bool, quiet: bool) -> Self {
        Self {
            total,
            verbosity,
            quiet,
            admitted: 0,
            disqualified: 0,
            rate_excluded: 0,
            skipped: 0,
            unrecognized: 0,
        }
    }

    ///
    /// Whether every report was of a recognized variant.
    ///
    /// Other skipped reports do not fail the run.
    ///
    pub fn is_successful(&self) -> bool {
        self.unrecognized == 0
    }

    ///
    /// The number of reports processed so far.
    ///
    pub fn processed(&self) -> usize {
        self.admitted + self.disqualified + self.rate_excluded + self.skipped
    }

    ///
    /// The admitted reports counter.
    ///
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    ///
    /// The skipped reports counter.
    ///
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    ///
    /// Records the outcome of a report.
    ///
    pub fn outcome(&mut self, path: &Path, outcome: &Outcome) {
        match outcome {
            Outcome::Admitted { .. } => self.admitted += 1,
            Outcome::Disqualified => {
                self.disqualified += 1;
                if self.verbosity && !self.quiet {
                    println!("{} {:?}", "DISQUALIFIED".bright_black(), path);
                }
            }
            Outcome::RateExcluded => {
                self.rate_excluded += 1;
                if self.verbosity && !self.quiet {
                    println!("{} {:?}", "RATE".bright_black(), path);
                }
            }
        }
        self.milestone();
    }

    ///
    /// Records a report rejected with an error.
    ///
    pub fn error(&mut self, error: &Error) {
        if error.is_unrecognized_variant() {
            self.unrecognized += 1;
        }
        self.skip(error);
    }

    ///
    /// Records a report skipped because its submission identifier was already taken.
    ///
    pub fn duplicate(&mut self, path: &Path, test_id: &str) {
        self.skip(format!("Report {path:?} repeats the submission `{test_id}`"));
    }

    ///
    /// Prints and counts a skipped report.
    ///
    fn skip<S>(&mut self, reason: S)
    where
        S: std::fmt::Display,
    {
        self.skipped += 1;
        eprintln!("{} {}", "SKIPPED".red(), reason);
        self.milestone();
    }

    ///
    /// Prints the progress line every milestone.
    ///
    fn milestone(&self) {
        let processed = self.processed();
        if !self.quiet && processed % Self::MILESTONE == 0 {
            println!(
                "{} {}/{} ...",
                "Analyzing".bright_green().bold(),
                processed,
                self.total
            );
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔══════════════════════╡ CORPUS SCAN ╞═════════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:12}                              {:10}     ║",
            "ADMITTED".green(),
            self.admitted.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:12}                              {:10}     ║",
            "DISQUALIFIED".bright_black(),
            self.disqualified.to_string().bright_black(),
        )?;
        writeln!(
            f,
            "║     {:12}                              {:10}     ║",
            "RATE".bright_black(),
            self.rate_excluded.to_string().bright_black(),
        )?;
        writeln!(
            f,
            "║     {:12}                              {:10}     ║",
            "SKIPPED".bright_red(),
            self.skipped.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║     {:12}                              {:10}     ║",
            "UNRECOGNIZED".red(),
            self.unrecognized.to_string().red(),
        )?;
        writeln!(
            f,
            "║               {:10} REPORTS SCANNED                     ║",
            self.processed(),
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
