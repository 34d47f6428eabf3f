use std::io::Write;

use tempfile::NamedTempFile;

/// Write `content` to a temporary `.txt` file that lives as long as the handle.
pub fn temp_input(content: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::with_suffix(".txt").unwrap();
    tmp.write_all(content.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}
