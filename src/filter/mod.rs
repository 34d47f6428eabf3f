pub mod code;
pub mod dupes;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::FilterError;

pub use code::{CodeFilter, is_code};
pub use dupes::{DupeFilter, SIGNATURE_MAX_CHARS, signature};

/// Which heuristic to run over the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Drop lines that look like source code.
    Code,
    /// Drop duplicate lines and collapse runs of blank lines.
    #[default]
    Dupes,
}

impl FilterMode {
    /// Create a fresh filter for one pass over a stream.
    pub fn build(self) -> Box<dyn LineFilter> {
        match self {
            FilterMode::Code => Box::new(CodeFilter),
            FilterMode::Dupes => Box::new(DupeFilter::new()),
        }
    }
}

impl FromStr for FilterMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(FilterMode::Code),
            "dupes" => Ok(FilterMode::Dupes),
            other => Err(FilterError::UnrecognizedMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Code => f.write_str("code"),
            FilterMode::Dupes => f.write_str("dupes"),
        }
    }
}

/// Line counts for a single filtering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read from the input.
    pub lines_read: usize,
    /// Lines written to the output, including collapsed blank lines.
    pub lines_written: usize,
}

/// Trait implemented by each line filter.
///
/// A filter sees every input line exactly once, in order, and decides what
/// (if anything) to emit for it.
pub trait LineFilter {
    /// Return the text to emit for `line`, or `None` to drop it.
    ///
    /// `line` has its terminator already removed. The returned text is
    /// written followed by a single newline.
    fn filter_line<'a>(&mut self, line: &'a str) -> Option<&'a str>;
}

/// Stream `reader` through `filter` line by line, writing kept lines to `out`.
///
/// Stops at the first read or write error.
pub fn filter_reader<R: BufRead, W: Write>(
    mut reader: R,
    filter: &mut dyn LineFilter,
    mut out: W,
) -> Result<FilterStats, FilterError> {
    let mut stats = FilterStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines_read += 1;

        let line = String::from_utf8_lossy(strip_terminator(&buf));
        if let Some(kept) = filter.filter_line(&line) {
            out.write_all(kept.as_bytes())?;
            out.write_all(b"\n")?;
            stats.lines_written += 1;
        }
    }

    out.flush()?;
    Ok(stats)
}

/// Open the file at `path` and filter it with a fresh filter for `mode`.
pub fn filter_file<W: Write>(
    path: impl AsRef<Path>,
    mode: FilterMode,
    out: W,
) -> Result<FilterStats, FilterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("filtering {} with mode {mode}", path.display());

    let mut filter = mode.build();
    let stats = filter_reader(BufReader::new(file), filter.as_mut(), out)?;
    debug!(
        "{}: read {} lines, wrote {}",
        path.display(),
        stats.lines_read,
        stats.lines_written
    );
    Ok(stats)
}

/// Filter an in-memory string and return the output text.
pub fn filter_str(input: &str, mode: FilterMode) -> Result<String, FilterError> {
    let mut out = Vec::with_capacity(input.len());
    let mut filter = mode.build();
    filter_reader(input.as_bytes(), filter.as_mut(), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Remove a trailing `\n` and then a trailing `\r`.
fn strip_terminator(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
