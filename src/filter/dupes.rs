use std::collections::HashSet;

use super::LineFilter;

/// Maximum number of characters of a normalized line used for comparison.
pub const SIGNATURE_MAX_CHARS: usize = 255;

/// Drops lines already seen in this pass and collapses runs of blank lines.
///
/// Lines are compared by [`signature`], so case and spacing differences do
/// not make a line new. The first occurrence is emitted as written, minus
/// trailing spaces and tabs.
#[derive(Debug, Default)]
pub struct DupeFilter {
    seen: HashSet<String>,
    was_blank: bool,
}

impl DupeFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineFilter for DupeFilter {
    fn filter_line<'a>(&mut self, line: &'a str) -> Option<&'a str> {
        let trimmed = line.trim_end_matches([' ', '\t']);
        let sig = signature(trimmed);

        if sig.is_empty() {
            let emit = !self.was_blank;
            self.was_blank = true;
            return emit.then_some("");
        }

        // Any non-blank line ends a blank run, even when it is suppressed.
        self.was_blank = false;
        if self.seen.insert(sig) {
            Some(trimmed)
        } else {
            log::trace!("duplicate: {trimmed}");
            None
        }
    }
}

/// Normalize a line into the key used for duplicate detection.
///
/// Lowercases, strips trailing whitespace, removes every space and tab, and
/// keeps at most [`SIGNATURE_MAX_CHARS`] characters.
pub fn signature(line: &str) -> String {
    line.to_lowercase()
        .trim_end()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t'))
        .take(SIGNATURE_MAX_CHARS)
        .collect()
}
