#![doc = include_str!("../puzzles/05.md")]

use advent_of_code::{
    debugln,
    helpers::{range::IdRange, sections},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Database {
    fresh: Vec<IdRange>,
    available: Vec<u64>,
}

impl Database {
    /// Parses the ranges section, then (if there is one) the IDs section.
    pub fn parse(input: &str) -> Option<Self> {
        let sections = sections(input);
        let section = |i: usize| sections.get(i).map(Vec::as_slice).unwrap_or_default();

        let fresh = section(0)
            .iter()
            .map(|line| IdRange::parse(line).ok())
            .collect::<Option<_>>()?;

        let available = section(1)
            .iter()
            .map(|line| line.parse().ok())
            .collect::<Option<_>>()?;

        Some(Self { fresh, available })
    }

    pub fn is_fresh(&self, id: u64) -> bool {
        self.fresh.iter().any(|range| range.contains(id))
    }
}

/// Sorts `ranges` and merges the ones that overlap or touch, like `1-5` and
/// `6-10`.
fn merge_intervals(ranges: &[IdRange]) -> Vec<IdRange> {
    let mut sorted: Vec<IdRange> = ranges
        .iter()
        .map(|range| IdRange::new(range.low(), range.high()))
        .collect();
    sorted.sort_unstable();

    let mut merged: Vec<IdRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Counts the IDs in `ranges`, which must not overlap.
fn count_in_intervals(ranges: &[IdRange]) -> u64 {
    ranges.iter().map(IdRange::count).sum()
}

pub fn part_one(input: &str) -> Option<usize> {
    let db = Database::parse(input)?;
    let fresh = db
        .available
        .iter()
        .filter(|&&id| db.is_fresh(id))
        .inspect(|id| debugln!("{id} is fresh"))
        .count();
    Some(fresh)
}

pub fn part_two(input: &str) -> Option<u64> {
    let db = Database::parse(input)?;
    let merged = merge_intervals(&db.fresh);
    debugln!("merged: {merged:?}");
    Some(count_in_intervals(&merged))
}

fn main() {
    let input = &advent_of_code::read_input(5);
    advent_of_code::solve!(1, part_one, input);
    advent_of_code::solve!(2, part_two, input);
}
