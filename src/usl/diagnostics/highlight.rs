//! Caret highlighting of source lines
//!
//! A highlighted line is rendered as two lines, the second one meant to be printed directly under
//! the first:
//!
//!     2| _indent: 3
//!                 ^
//!
//! The caret column is the match offset plus the width of the `"{n}| "` prefix.

use super::{Diagnostic, DiagnosticKind, TokenizeResult};

/// Width of the `"| "` separator printed after the line number.
const SEPARATOR_WIDTH: usize = 2;

fn prefix_width(line_number: usize) -> usize {
    line_number.to_string().len() + SEPARATOR_WIDTH
}

/// `"{line_number}| {line}"`
pub fn format_code_line(line: &str, line_number: usize) -> String {
    format!("{}| {}", line_number, line)
}

/// Carets under the whole rendered line, prefix included.
pub fn underline_whole(line: &str, line_number: usize) -> String {
    "^".repeat(line.chars().count() + prefix_width(line_number))
}

/// Offsets (in chars) where `target` starts in `line`.
///
/// Target characters that would fall past the end of the line are not held against a match, so a
/// target hanging off the end of the line still matches on its leading part.
fn match_offsets(line: &[char], target: &[char]) -> Vec<usize> {
    (0..line.len())
        .filter(|&start| {
            target
                .iter()
                .enumerate()
                .all(|(j, wanted)| line.get(start + j).map_or(true, |c| c == wanted))
        })
        .collect()
}

/// The occurrence index of the match of `target` that starts at byte `offset` of `line`.
///
/// Matches starting before `offset` are counted, so [highlight] lands on the copy at `offset`
/// instead of an earlier one (`ab` inside `xab`).
pub fn occurrence_at(line: &str, target: &str, offset: usize) -> isize {
    let chars: Vec<char> = line.chars().collect();
    let wanted: Vec<char> = target.chars().collect();
    let start = line
        .get(..offset)
        .map_or(chars.len(), |head| head.chars().count());
    match_offsets(&chars, &wanted)
        .into_iter()
        .filter(|&m| m < start)
        .count() as isize
}

/// Render the caret line for the `occurrence`-th match of `target` in `line`.
///
/// Negative occurrences count from the last match (`-1` is the last one).
pub fn highlight(
    line: &str,
    line_number: usize,
    target: &str,
    occurrence: isize,
) -> TokenizeResult<String> {
    let chars: Vec<char> = line.chars().collect();
    let wanted: Vec<char> = target.chars().collect();

    let matches = if wanted.is_empty() {
        Vec::new()
    } else {
        match_offsets(&chars, &wanted)
    };

    if matches.is_empty() {
        return Err(Box::new(Diagnostic::new(
            DiagnosticKind::Tokenizer,
            "There is no word to match, to be highlighted",
            format!("line={:?}, target={:?}", line, target),
            underline_whole(line, line_number),
        )));
    }

    let index = if occurrence < 0 {
        matches.len().checked_sub(occurrence.unsigned_abs())
    } else {
        Some(occurrence as usize)
    };

    let offset = match index.and_then(|i| matches.get(i)) {
        Some(offset) => *offset,
        None => {
            return Err(Box::new(Diagnostic::new(
                DiagnosticKind::Tokenizer,
                format!(
                    "Occurrence {} of {:?} is out of range, {} found",
                    occurrence,
                    target,
                    matches.len()
                ),
                format_code_line(line, line_number),
                underline_whole(line, line_number),
            )))
        }
    };

    Ok(format!(
        "{}{}",
        " ".repeat(offset + prefix_width(line_number)),
        "^".repeat(wanted.len())
    ))
}
