#![doc = include_str!("../puzzles/04.md")]

use advent_of_code::{
    debugln,
    helpers::grid::{self, string_to_grid, Grid, Splitter},
};

const ROLL: char = '@';
/// What a cell becomes once it has been marked. Never equal to a target.
const MARKED: char = 'x';
/// A roll is reachable if fewer than this many of its neighbors are rolls.
const CROWDED: usize = 4;

/// Counts the cells around `(row, col)` that hold `target`.
///
/// Cells off the edge of the grid, including past the end of a short row,
/// don't count.
fn count_neighbors(grid: &[Vec<char>], row: usize, col: usize, target: char) -> usize {
    grid::moore_neighbors(grid, row, col)
        .into_iter()
        .filter(|&(r, c)| grid[r][c] == target)
        .count()
}

/// Returns true if `(row, col)` is on the grid and fewer than `threshold` of
/// its neighbors hold `target`. The cell itself isn't looked at.
fn is_sparse(grid: &[Vec<char>], row: usize, col: usize, target: char, threshold: usize) -> bool {
    grid::get(grid, row, col).is_some() && count_neighbors(grid, row, col, target) < threshold
}

/// Marks `(row, col)` if it holds `target` and fewer than `threshold` of its
/// neighbors do. Returns whether the cell was marked.
fn mark_if_sparse(grid: &mut Grid, row: usize, col: usize, target: char, threshold: usize) -> bool {
    if grid::get(grid, row, col) != Some(target) || !is_sparse(grid, row, col, target, threshold) {
        return false;
    }
    grid[row][col] = MARKED;
    true
}

/// Positions of every `target` cell that currently has fewer than
/// `threshold` `target` neighbors, in row-major order.
fn sparse_cells(grid: &[Vec<char>], target: char, threshold: usize) -> Vec<(usize, usize)> {
    grid.iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(move |&(_, &cell)| cell == target)
                .map(move |(col, _)| (row, col))
        })
        .filter(|&(row, col)| is_sparse(grid, row, col, target, threshold))
        .collect()
}

/// Marks sparse `target` cells, returning how many were marked.
///
/// Each pass decides every cell from the grid as it was when the pass
/// started, then marks them all at once. With `repeat_until_fixed_point`,
/// passes continue until one marks nothing.
fn stabilize(
    grid: &mut Grid,
    target: char,
    threshold: usize,
    repeat_until_fixed_point: bool,
) -> usize {
    let mut total = 0;

    for pass in 1.. {
        let cells = sparse_cells(grid, target, threshold);
        for &(row, col) in &cells {
            grid[row][col] = MARKED;
        }
        total += cells.len();
        debugln!("pass {pass}: marked {}, {total} total", cells.len());

        if !repeat_until_fixed_point || cells.is_empty() {
            break;
        }
    }

    debugln!("{}", render(grid));
    total
}

fn render(grid: &[Vec<char>]) -> String {
    grid.iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn part_one(input: &str) -> Option<usize> {
    let mut grid = string_to_grid(input, &Splitter::default());
    Some(stabilize(&mut grid, ROLL, CROWDED, false))
}

pub fn part_two(input: &str) -> Option<usize> {
    let mut grid = string_to_grid(input, &Splitter::default());
    Some(stabilize(&mut grid, ROLL, CROWDED, true))
}

fn main() {
    let input = &advent_of_code::read_input(4);
    advent_of_code::solve!(1, part_one, input);
    advent_of_code::solve!(2, part_two, input);
}
