use anyhow::{Context, Result};
use log::{debug, info};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// File holding the project version, relative to the working root.
pub const VERSION_FILE: &str = "version.txt";
pub const SEGMENT_DELIMITER: char = '.';

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Last version segment '{segment}' is not a non-negative integer")]
    InvalidSegment {
        segment: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Last version segment '{segment}' cannot be incremented any further")]
    Overflow { segment: String },
}

/// Bumps the final dot-delimited segment by one, leaving every other segment as-is.
///
/// The input is taken verbatim: surrounding whitespace ends up in the last
/// segment and makes it unparseable.
pub fn increment(version: &str) -> Result<String, VersionError> {
    let (head, last) = match version.rsplit_once(SEGMENT_DELIMITER) {
        Some((head, last)) => (Some(head), last),
        None => (None, version),
    };

    let current: u64 = last.parse().map_err(|source| VersionError::InvalidSegment {
        segment: last.to_string(),
        source,
    })?;
    let next = current
        .checked_add(1)
        .ok_or_else(|| VersionError::Overflow { segment: last.to_string() })?;

    Ok(match head {
        Some(head) => format!("{head}{SEGMENT_DELIMITER}{next}"),
        None => next.to_string(),
    })
}

/// Reads the version file, increments it and overwrites the file in place.
/// Returns the previous and the new version.
pub fn increment_file(path: impl AsRef<Path>) -> Result<(String, String)> {
    let path = path.as_ref();
    debug!("Reading version from '{}'", path.display());
    let current = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read version file {:?}", path))?;

    let next = increment(&current)
        .with_context(|| format!("Failed to increment version in {:?}", path))?;

    std::fs::write(path, &next)
        .with_context(|| format!("Failed to write version file {:?}", path))?;
    info!("Incremented version from {} -> {}", current, next);

    Ok((current, next))
}
