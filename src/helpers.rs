/*
 * Use this file if you want to extract helpers from your solutions.
 * Example import from this file: `use advent_of_code::helpers::example_fn;`.
 */

use itertools::Itertools as _;

pub mod grid;
pub mod parse;
pub mod range;

/// Splits `input` into its blank-line separated sections, each a list of
/// trimmed lines.
///
/// Runs of blank lines count as one separator, and blank lines at either end
/// are ignored.
pub fn sections(input: &str) -> Vec<Vec<&str>> {
    let groups = input
        .lines()
        .map(str::trim)
        .group_by(|line| line.is_empty());
    let sections = (&groups)
        .into_iter()
        .filter(|(blank, _)| !*blank)
        .map(|(_, section)| section.collect())
        .collect();
    sections
}

/// Normalizes `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(s: &str) -> std::borrow::Cow<'_, str> {
    if s.contains('\r') {
        s.replace("\r\n", "\n").replace('\r', "\n").into()
    } else {
        s.into()
    }
}
