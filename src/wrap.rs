// Word wrapping for console output

use textwrap::{Options, WordSeparator, WordSplitter};

/// Column width for console word wrapping
pub const WRAP_WIDTH: usize = 60;

/// Word-wrap a message for console display
///
/// Each source line wraps independently to `WRAP_WIDTH` columns, so explicit
/// newlines act as paragraph breaks. Wrapping only happens at spaces, never
/// inside a hyphenated word; a single word longer than the width is still
/// broken so no output line exceeds it. An empty message yields one empty
/// line.
pub fn wrap_message(message: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for source_line in message.lines() {
        let options = Options::new(WRAP_WIDTH)
            .word_separator(WordSeparator::AsciiSpace)
            .word_splitter(WordSplitter::NoHyphenation);
        for wrapped in textwrap::wrap(source_line, options) {
            lines.push(wrapped.into_owned());
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
