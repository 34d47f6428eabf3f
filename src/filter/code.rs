use std::sync::LazyLock;

use regex::Regex;

use super::LineFilter;

/// A whole line wrapped in an HTML or XML tag, e.g. `<div>` or `</p>`.
static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^</?(?-u:\w).*>$").unwrap());
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\pP").unwrap());
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[=;{}]").unwrap());
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?-u:\w)+").unwrap());
static CAMEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z][A-Z]").unwrap());

/// Keeps lines that read like prose and drops lines that look like code.
pub struct CodeFilter;

impl LineFilter for CodeFilter {
    fn filter_line<'a>(&mut self, line: &'a str) -> Option<&'a str> {
        if is_code(line) {
            log::trace!("code: {line}");
            None
        } else {
            Some(line)
        }
    }
}

/// Check whether a line looks like source code.
///
/// A line that is a single tag is always code. Otherwise the line is code
/// when its punctuation outweighs its words:
/// `marks * 2 + specials * 3 > words - camel_pairs`.
pub fn is_code(line: &str) -> bool {
    if TAG_LINE.is_match(line.trim()) {
        return true;
    }

    let marks = PUNCTUATION.find_iter(line).count();
    let specials = SPECIAL.find_iter(line).count();
    let words = WORD.find_iter(line).count();
    let camel_pairs = camel_pairs(line);

    // camelCase pairs can outnumber words, so compare as signed.
    (marks * 2 + specials * 3) as isize > words as isize - camel_pairs as isize
}

/// Count non-overlapping lowercase-uppercase letter pairs anywhere in the line.
fn camel_pairs(line: &str) -> usize {
    CAMEL.find_iter(line).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_code_empty_line() {
        assert!(!is_code(""));
    }

    #[test]
    fn test_is_code_whitespace_only() {
        assert!(!is_code("   \t  "));
    }

    #[test]
    fn test_is_code_plain_prose() {
        assert!(!is_code("Hello world"));
        assert!(!is_code("The quick brown fox jumps over the lazy dog."));
    }

    #[test]
    fn test_is_code_assignment() {
        assert!(is_code("int x = 1;"));
    }

    #[test]
    fn test_is_code_call_statement() {
        assert!(is_code("foo();"));
    }

    #[test]
    fn test_is_code_braces() {
        assert!(is_code("}"));
        assert!(is_code("if (ready) {"));
    }

    #[test]
    fn test_is_code_tag_lines() {
        assert!(is_code("<div>"));
        assert!(is_code("</div>"));
        assert!(is_code("<a href=\"x\">link text</a>"));
        assert!(is_code("<br/>"));
    }

    #[test]
    fn test_is_code_tag_line_is_trimmed() {
        assert!(is_code("    <li>"));
        assert!(is_code("\t</ul>  "));
    }

    #[test]
    fn test_is_code_angle_without_word_is_not_tag() {
        // `<` and `>` are math symbols, not punctuation.
        assert!(!is_code("< div >"));
    }

    #[test]
    fn test_is_code_lone_camel_case_identifier() {
        assert!(is_code("getElementById"));
    }

    #[test]
    fn test_is_code_words_are_ascii_only() {
        // Cyrillic letters are not word characters, so the comma dominates.
        assert!(is_code("Привет, мир"));
        assert!(!is_code("<привет>"));
    }

    #[test]
    fn test_camel_pairs_non_overlapping() {
        assert_eq!(camel_pairs("aBcD"), 2);
        assert_eq!(camel_pairs("aBC"), 1);
        assert_eq!(camel_pairs("ABC abc"), 0);
    }

    #[test]
    fn test_camel_pairs_not_anchored_to_words() {
        assert_eq!(camel_pairs("see iPhone and eBay"), 2);
    }

    #[test]
    fn test_code_filter_keeps_prose() {
        let mut filter = CodeFilter;
        assert_eq!(filter.filter_line("Hello world"), Some("Hello world"));
        assert_eq!(filter.filter_line("int x = 1;"), None);
        assert_eq!(filter.filter_line(""), Some(""));
    }
}
