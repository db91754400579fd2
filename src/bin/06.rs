#![doc = include_str!("../puzzles/06.md")]

use std::fmt;

use advent_of_code::{
    debugln,
    helpers::{
        grid::{string_to_grid, Splitter},
        normalize_newlines,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Operation::Add => '+',
            Operation::Multiply => '*',
        };
        write!(f, "{c}")
    }
}

impl Operation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operation::Add),
            "*" => Some(Operation::Multiply),
            _ => None,
        }
    }

    /// Folds `values` with this operation. There is no answer for an empty
    /// column, or one that doesn't fit in a `u64`.
    pub fn apply(self, values: &[u64]) -> Option<u64> {
        let (&first, rest) = values.split_first()?;
        rest.iter().try_fold(first, |acc, &value| match self {
            Operation::Add => acc.checked_add(value),
            Operation::Multiply => acc.checked_mul(value),
        })
    }
}

/// Applies the operation written as `symbol`, or returns `None` if the symbol
/// isn't an operation.
fn apply_symbol(symbol: &str, values: &[u64]) -> Option<u64> {
    Operation::from_symbol(symbol)?.apply(values)
}

/// The numbers in column `col`. Rows too short to reach the column and
/// tokens that aren't numbers are skipped.
fn column_values(rows: &[Vec<&str>], col: usize) -> Vec<u64> {
    rows.iter()
        .filter_map(|row| row.get(col))
        .filter_map(|token| token.parse().ok())
        .collect()
}

/// Splits the worksheet into whitespace-separated tokens, row by row.
fn tokenize(input: &str) -> Vec<Vec<&str>> {
    let splitter = Splitter::whitespace();
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| splitter.split(line))
        .collect()
}

pub fn part_one(input: &str) -> Option<u64> {
    let normalized = normalize_newlines(input);
    let rows = tokenize(&normalized);
    let Some((operations, numbers)) = rows.split_last() else {
        return Some(0);
    };
    if numbers.is_empty() {
        return Some(0);
    }

    let total = operations
        .iter()
        .enumerate()
        .filter_map(|(col, symbol)| {
            let answer = apply_symbol(symbol, &column_values(numbers, col));
            debugln!("column {col} ({symbol}): {answer:?}");
            answer
        })
        .sum();
    Some(total)
}

/// Reads a problem written in columns `cols`: each character column, top to
/// bottom, is one number.
fn column_numbers(rows: &[Vec<char>], cols: std::ops::Range<usize>) -> Vec<u64> {
    cols.filter_map(|col| {
        let digits: String = rows
            .iter()
            .filter_map(|row| row.get(col))
            .filter(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    })
    .collect()
}

pub fn part_two(input: &str) -> Option<u64> {
    let sheet = string_to_grid(input, &Splitter::default());
    let Some((operations, numbers)) = sheet.split_last() else {
        return Some(0);
    };
    if numbers.is_empty() {
        return Some(0);
    }

    let width = sheet.iter().map(Vec::len).max().unwrap_or(0);
    let is_blank = |col: usize| {
        sheet
            .iter()
            .all(|row| row.get(col).map_or(true, |c| c.is_whitespace()))
    };

    let mut total = 0;
    let mut col = 0;
    while col < width {
        if is_blank(col) {
            col += 1;
            continue;
        }
        let start = col;
        while col < width && !is_blank(col) {
            col += 1;
        }

        let symbol: String = operations
            .get(start..col.min(operations.len()))
            .unwrap_or_default()
            .iter()
            .filter(|c| !c.is_whitespace())
            .collect();
        let values = column_numbers(numbers, start..col);
        let answer = apply_symbol(&symbol, &values);
        debugln!("columns {start}..{col} ({symbol}) {values:?}: {answer:?}");

        total += answer.unwrap_or(0);
    }

    Some(total)
}

fn main() {
    let input = &advent_of_code::read_input(6);
    advent_of_code::solve!(1, part_one, input);
    advent_of_code::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("1 2 3\n4 5 6\n+ * +"),
            [["1", "2", "3"], ["4", "5", "6"], ["+", "*", "+"]]
        );
        assert_eq!(
            tokenize("1   2   3\n4    5"),
            [vec!["1", "2", "3"], vec!["4", "5"]]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n").is_empty());
    }

    #[test]
    fn test_column_values() {
        let rows = vec![vec!["5", "10", "15"], vec!["3", "20", "25"], vec!["7", "30"]];
        assert_eq!(column_values(&rows, 0), [5, 3, 7]);
        assert_eq!(column_values(&rows, 1), [10, 20, 30]);
        assert_eq!(column_values(&rows, 2), [15, 25]);
        assert!(column_values(&[], 0).is_empty());

        let rows = vec![vec!["5", "abc", "15"], vec!["3", "20"]];
        assert_eq!(column_values(&rows, 0), [5, 3]);
        assert_eq!(column_values(&rows, 1), [20]);
    }

    #[test]
    fn test_apply_symbol() {
        assert_eq!(apply_symbol("+", &[1, 2, 3]), Some(6));
        assert_eq!(apply_symbol("+", &[10, 20, 30]), Some(60));
        assert_eq!(apply_symbol("+", &[5]), Some(5));
        assert_eq!(apply_symbol("*", &[2, 3, 4]), Some(24));
        assert_eq!(apply_symbol("*", &[7]), Some(7));

        assert_eq!(apply_symbol("?", &[1, 2, 3]), None);
        assert_eq!(apply_symbol("-", &[1, 2, 3]), None);
        assert_eq!(apply_symbol("+", &[]), None);
        assert_eq!(apply_symbol("*", &[]), None);
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(Operation::Multiply.apply(&[u64::MAX, 2]), None);
        assert_eq!(Operation::Add.apply(&[u64::MAX, 1]), None);
        assert_eq!(Operation::Multiply.apply(&[u64::MAX, 1]), Some(u64::MAX));
        assert_eq!(Operation::Multiply.apply(&[u64::MAX, 0]), Some(0));

        // A column that overflows contributes nothing.
        assert_eq!(part_one("18446744073709551615 3
2 4
* +"), Some(7));
    }

    #[test]
    fn test_unknown_operation_is_skipped() {
        assert_eq!(part_one("1 2 3\n4 5 6\n+ - *"), Some(5 + 18));
        assert_eq!(part_one("1 2\n+ *"), Some(3));
        assert_eq!(part_one("+ *"), Some(0));
        assert_eq!(part_one(""), Some(0));
    }

    #[test]
    fn test_column_numbers() {
        let rows = string_to_grid("123\n 45\n  6", &Splitter::default());
        assert_eq!(column_numbers(&rows, 0..3), [1, 24, 356]);

        let rows = string_to_grid("64 \n23 \n314", &Splitter::default());
        assert_eq!(column_numbers(&rows, 0..3), [623, 431, 4]);
    }

    #[test]
    fn test_part_one() {
        let input = advent_of_code::read_file("examples", 6);
        assert_eq!(part_one(&input), Some(4277556));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code::read_file("examples", 6);
        assert_eq!(part_two(&input), Some(3263827));
    }
}
