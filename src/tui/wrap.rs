//! Line wrapping shared by the prompt input and the output pane.
//!
//! Two strategies:
//! - `wrap_prose`: word wrapping via `textwrap`, for text that may be reflowed.
//! - `hard_wrap`: column-exact splitting that keeps every character, including
//!   leading and trailing whitespace. Used for dialogue and the prompt editor,
//!   where the cursor has to land on the cell the text actually occupies.

use unicode_width::UnicodeWidthChar;

/// Word-wrapping options; `break_words` so long tokens never overflow.
pub fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width.max(1))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Word-wraps `text`, honouring embedded newlines. Always yields at least one line.
pub fn wrap_prose(text: &str, width: usize) -> Vec<String> {
    let lines: Vec<String> = textwrap::wrap(text.trim(), wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Splits a single line into rows of at most `width` columns.
pub fn hard_wrap(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    rows.push(current);
    rows
}

/// `hard_wrap` applied to each `\n`-separated line. Blank lines stay blank rows.
pub fn hard_wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| hard_wrap(line, width))
        .collect()
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Byte offset of the character boundary before `pos`.
pub fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
