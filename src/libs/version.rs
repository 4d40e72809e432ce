//! Migration version naming.
//!
//! Computes the next version identifier for a new migration file pair. Two
//! mutually exclusive modes exist:
//!
//! - **Sequential**: scans the migrations directory, parses the numeric
//!   prefix of the lexicographically last matching file and increments it,
//!   zero-padded to a fixed digit width
//! - **Time-based**: formats the current instant in a configurable timezone,
//!   either with a strftime pattern or as a unix epoch value
//!
//! Version strings must stay unique within a migrations directory; the
//! collision check itself lives in [`super::writer`] because it runs against
//! the final file name, not the bare version.
//!
//! ## Sequential mode
//!
//! ```rust
//! use migro::libs::version::next_sequential;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("000042_create_users.up.sql"), "").unwrap();
//!
//! let next = next_sequential(dir.path(), ".sql", 6).unwrap();
//! assert_eq!(next, "000043");
//! ```
//!
//! ## Time mode
//!
//! The default pattern (`%Y%m%d%H%M%S`) produces identifiers like
//! `20260804121530`. The literal formats `unix` and `unixNano` yield seconds
//! and nanoseconds since the epoch. Anything else is treated as a custom
//! strftime pattern and validated first; two migrations created within the
//! same formatted instant would collide, which the emitter rejects.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Pattern used for time-based versions when no custom format is given.
pub const DEFAULT_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Errors produced while deriving a new migration version.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("digits must be positive")]
    InvalidSequenceWidth,

    #[error("malformed migration filename: {0}")]
    MalformedFilename(String),

    #[error("cannot parse sequence number from {filename}")]
    SequenceParse {
        filename: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("next sequence number {version} too large. At most {digits} digits are allowed")]
    SequenceOverflow { version: String, digits: usize },

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("invalid time format pattern: {0}")]
    InvalidTimePattern(String),

    #[error("the seq and format options are mutually exclusive")]
    SequentialWithFormat,

    #[error("invalid migrations path pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Computes the next sequential version for `migrations_dir`.
///
/// Scans for files ending in `ext`, takes the lexicographically last match
/// and increments its numeric prefix (everything before the first `_`). An
/// empty directory starts the sequence at 1. The result is zero-padded to
/// `digits`; a value that no longer fits the width is an error rather than a
/// silently widened version, since mixed widths would break lexicographic
/// ordering.
pub fn next_sequential(migrations_dir: &Path, ext: &str, digits: usize) -> Result<String, VersionError> {
    if digits == 0 {
        return Err(VersionError::InvalidSequenceWidth);
    }

    let pattern = migrations_dir.join(format!("*{}", ext));
    let mut matches: Vec<_> = glob::glob(&pattern.to_string_lossy())?.filter_map(Result::ok).collect();
    matches.sort();

    let mut next_seq: u64 = 1;

    if let Some(last) = matches.last() {
        let filename = last.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

        // The version prefix needs at least one digit before the separator.
        let prefix = match filename.find('_') {
            Some(idx) if idx >= 1 => &filename[..idx],
            _ => return Err(VersionError::MalformedFilename(filename)),
        };

        let current: u64 = prefix.parse().map_err(|source| VersionError::SequenceParse {
            filename: filename.clone(),
            source,
        })?;
        next_seq = current + 1;
    }

    let version = format!("{:0width$}", next_seq, width = digits);

    if version.len() > digits {
        return Err(VersionError::SequenceOverflow { version, digits });
    }

    Ok(version)
}

/// Formats the current instant as a time-based version.
///
/// `timezone` is an IANA name such as `Asia/Shanghai`; `None` or an empty
/// string means local time. `format` selects the rendering: `None` or empty
/// for [`DEFAULT_TIME_FORMAT`], the literals `unix`/`unixNano` for epoch
/// values, anything else as a strftime pattern.
pub fn time_version(timezone: Option<&str>, format: Option<&str>) -> Result<String, VersionError> {
    match timezone {
        None | Some("") => render_version(Local::now(), format),
        Some(name) => {
            let tz: Tz = name.parse().map_err(|_| VersionError::UnknownTimezone(name.to_string()))?;
            render_version(Utc::now().with_timezone(&tz), format)
        }
    }
}

fn render_version<T: TimeZone>(now: DateTime<T>, format: Option<&str>) -> Result<String, VersionError>
where
    T::Offset: fmt::Display,
{
    let version = match format {
        None | Some("") => now.format(DEFAULT_TIME_FORMAT).to_string(),
        Some("unix") => now.timestamp().to_string(),
        Some("unixNano") => {
            // Widened to i128 so the conversion can never overflow or panic.
            let nanos = i128::from(now.timestamp()) * 1_000_000_000 + i128::from(now.timestamp_subsec_nanos());
            nanos.to_string()
        }
        Some(pattern) => {
            // chrono defers pattern errors to Display, which panics. Reject
            // bad patterns up front instead.
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(VersionError::InvalidTimePattern(pattern.to_string()));
            }
            now.format(pattern).to_string()
        }
    };

    Ok(version)
}
