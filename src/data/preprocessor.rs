// ============================================================
// Layer 4 — Review Text Preprocessor
// ============================================================
// Cleans review text before it reaches the subword encoder.
// The same cleaning runs on training reviews and on text given
// to the predictor, so both see identical input conventions.
//
// IMDB reviews are scraped HTML fragments. They contain:
//   - "<br />" line breaks (often doubled as paragraph breaks)
//   - Non-breaking and zero-width spaces
//   - Windows line endings and stray tabs
//
// Cleaning steps (applied in order):
//   1. Turn <br> tags and CRLF / lone CR into newlines
//   2. Replace Unicode whitespace variants with plain space
//   3. Collapse runs of spaces and trim each line
//   4. Collapse more than one blank line
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

/// Spellings of the HTML line break that occur in the corpus
const BREAK_TAGS: [&str; 4] = ["<br />", "<br/>", "<br>", "<BR>"];

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw review and return an owned String.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Line endings and HTML line breaks ─────────────────────────
        let mut step1 = text.replace("\r\n", "\n");
        for tag in BREAK_TAGS {
            if step1.contains(tag) {
                step1 = step1.replace(tag, "\n");
            }
        }

        // ── Step 2: Normalise individual characters ───────────────────────────
        let step2: String = step1
            .chars()
            .map(|c| match c {
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                '\r' => '\n',
                c if c.is_control() && c != '\n' => ' ',
                c => c,
            })
            .collect();

        // ── Step 3: Clean each line individually ─────────────────────────────
        let step3: Vec<String> = step2
            .lines()
            .map(|line| line.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" "))
            .collect();

        // ── Step 4: At most one blank line between paragraphs ────────────────
        let mut result     = String::with_capacity(step2.len());
        let mut blank_run  = 0usize;

        for line in step3 {
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 1 {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            if !result.is_empty() || !line.is_empty() {
                result.push_str(&line);
                result.push('\n');
            }
        }

        result.trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_br_tags_become_paragraph_breaks() {
        let p = Preprocessor::new();
        assert_eq!(
            p.clean("Great film.<br /><br />Would watch again."),
            "Great film.\n\nWould watch again."
        );
    }

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello   world"), "hello world");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  hello world  "), "hello world");
    }

    #[test]
    fn test_removes_control_chars() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello\x01world"), "hello world");
    }

    #[test]
    fn test_collapses_blank_lines() {
        let p = Preprocessor::new();
        let output = p.clean("line1\n\n\n\n\nline2");
        assert_eq!(output, "line1\n\nline2");
    }

    #[test]
    fn test_windows_line_endings_are_single_breaks() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("line1\r\nline2"), "line1\nline2");
        assert_eq!(p.clean("line1\r\n\r\nline2"), "line1\n\nline2");
        assert_eq!(p.clean("old\rmac"), "old\nmac");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
