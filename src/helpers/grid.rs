use regex::Regex;
use smallvec::SmallVec;

use super::normalize_newlines;

/// A grid of characters addressed by `(row, col)`.
///
/// Rows may have different lengths, so every lookup has to check the bounds
/// of the row it lands in.
pub type Grid = Vec<Vec<char>>;

/// What to split a string on.
#[derive(Debug, Clone)]
pub enum Splitter {
    Literal(String),
    Pattern(Regex),
}

impl Default for Splitter {
    fn default() -> Self {
        Self::Literal("\n".to_owned())
    }
}

impl From<&str> for Splitter {
    fn from(sep: &str) -> Self {
        Self::Literal(sep.to_owned())
    }
}

impl From<Regex> for Splitter {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl Splitter {
    /// Splits on runs of whitespace.
    pub fn whitespace() -> Self {
        Self::Pattern(Regex::new(r"\s+").unwrap())
    }

    /// Splits `s`, dropping empty pieces.
    pub fn split<'a>(&self, s: &'a str) -> Vec<&'a str> {
        match self {
            Self::Literal(sep) => s.split(sep.as_str()).filter(|p| !p.is_empty()).collect(),
            Self::Pattern(re) => re.split(s).filter(|p| !p.is_empty()).collect(),
        }
    }
}

/// Splits `s` into rows and each row into its characters.
///
/// Line endings are normalized first, and empty rows are dropped.
pub fn string_to_grid(s: &str, splitter: &Splitter) -> Grid {
    let normalized = normalize_newlines(s);
    splitter
        .split(&normalized)
        .into_iter()
        .map(|row| row.chars().collect())
        .collect()
}

/// Returns the cell at `(row, col)`, or `None` if it is off the grid.
#[inline]
pub fn get(grid: &[Vec<char>], row: usize, col: usize) -> Option<char> {
    grid.get(row).and_then(|r| r.get(col)).copied()
}

/// Returns the positions of the (up to 8) cells surrounding `(row, col)`
/// that exist in the grid.
pub fn moore_neighbors(grid: &[Vec<char>], row: usize, col: usize) -> SmallVec<[(usize, usize); 8]> {
    let mut neighbors = SmallVec::new();

    for d_row in [-1_isize, 0, 1] {
        for d_col in [-1_isize, 0, 1] {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let (Some(r), Some(c)) = (
                row.checked_add_signed(d_row),
                col.checked_add_signed(d_col),
            ) else {
                continue;
            };
            if get(grid, r, c).is_some() {
                neighbors.push((r, c));
            }
        }
    }

    neighbors
}
