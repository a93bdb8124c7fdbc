//!
//! The delimited tables handed to the reporting tools.
//!
//! One table holds a row per submission and the other a row per sub-benchmark,
//! both keyed by the submission identifier.
//!


pub mod csv;
pub mod error;
pub mod row;

use std::path::Path;

use self::error::Error;
use self::row::Row;

/// The submission table file name.
pub const SUMMARIES_FILE_NAME: &str = "summaries.csv";

/// The sub-benchmark table file name.
pub const BENCHMARKS_FILE_NAME: &str = "benchmarks.csv";

///
/// Encodes the rows with a leading header row.
///
pub fn encode<R: Row>(rows: &[R]) -> String {
    let mut content = String::with_capacity((rows.len() + 1) * R::HEADER.len() * 16);
    csv::write_record(&mut content, R::HEADER);
    for row in rows.iter() {
        csv::write_record(&mut content, row.to_fields().as_slice());
    }
    content
}

///
/// Writes the rows to the table at `path`.
///
pub fn write<R: Row>(path: &Path, rows: &[R]) -> Result<(), Error> {
    std::fs::write(path, encode(rows)).map_err(|error| Error::Writing {
        error,
        path: path.to_path_buf(),
    })
}

///
/// Reads the rows of the table at `path`, checking its header.
///
pub fn read<R: Row>(path: &Path) -> Result<Vec<R>, Error> {
    let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
        error,
        path: path.to_path_buf(),
    })?;
    decode(path, text.as_str())
}

///
/// Decodes the table text. The path is used in diagnostics only.
///
pub fn decode<R: Row>(path: &Path, text: &str) -> Result<Vec<R>, Error> {
    let records = csv::parse(text).map_err(|reason| Error::Record {
        path: path.to_path_buf(),
        record: 0,
        reason,
    })?;
    let mut records = records.into_iter();

    let header = records.next().unwrap_or_default();
    if header != R::HEADER {
        return Err(Error::Header {
            path: path.to_path_buf(),
            expected: R::HEADER.join(","),
            found: header.join(","),
        });
    }

    records
        .enumerate()
        .map(|(index, fields)| {
            R::from_fields(fields).map_err(|reason| Error::Record {
                path: path.to_path_buf(),
                record: index + 1,
                reason,
            })
        })
        .collect()
}
