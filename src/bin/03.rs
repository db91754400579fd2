#![doc = include_str!("../puzzles/03.md")]

use advent_of_code::debugln;

const PART_ONE_BATTERIES: usize = 2;
const PART_TWO_BATTERIES: usize = 12;

/// Converts each ASCII digit of `s` to its value. Anything else is skipped.
fn string_to_digits(s: &str) -> Vec<u8> {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// A partially built number: the digits chosen so far and where the next one
/// may be taken from.
#[derive(Debug, Clone, Copy)]
struct Choice {
    next_index: usize,
    value: u128,
    chosen: usize,
}

/// Returns the largest number that can be made by picking `n` of `digits`
/// without reordering them.
///
/// Returns `0` if there are fewer than `n` digits, or if `n` is `0`. Exact for
/// up to 38 digits; longer numbers saturate at [`u128::MAX`].
fn highest_value(digits: &[u8], n: usize) -> u128 {
    if n == 0 || digits.len() < n {
        return 0;
    }

    // Highest value seen so far for each (next_index, chosen) pair. Reaching
    // the same pair again with a value no larger can't lead anywhere better.
    let width = n + 1;
    let mut best_at: Vec<Option<u128>> = vec![None; (digits.len() + 1) * width];

    let mut best = 0;
    let mut stack = vec![Choice {
        next_index: 0,
        value: 0,
        chosen: 0,
    }];

    while let Some(choice) = stack.pop() {
        if choice.chosen == n {
            best = best.max(choice.value);
            continue;
        }

        let remaining = n - choice.chosen;
        if upper_bound(choice.value, remaining) <= best {
            continue;
        }

        let seen = &mut best_at[choice.next_index * width + choice.chosen];
        if seen.is_some_and(|seen| seen >= choice.value) {
            continue;
        }
        *seen = Some(choice.value);

        // The last `remaining - 1` digits must be left for the rest of the
        // number.
        let last = digits.len() - remaining;
        let mut candidates: Vec<usize> = (choice.next_index..=last).collect();
        // Pop the biggest digit first, leftmost among equals.
        candidates.sort_by_key(|&i| (digits[i], std::cmp::Reverse(i)));

        stack.extend(candidates.into_iter().map(|i| Choice {
            next_index: i + 1,
            value: choice.value.saturating_mul(10).saturating_add(u128::from(digits[i])),
            chosen: choice.chosen + 1,
        }));
    }

    best
}

/// `value` followed by `remaining` nines, or [`u128::MAX`] if that doesn't fit.
#[inline]
fn upper_bound(value: u128, remaining: usize) -> u128 {
    (0..remaining)
        .try_fold(value, |acc, _| acc.checked_mul(10)?.checked_add(9))
        .unwrap_or(u128::MAX)
}

fn total_joltage(input: &str, n: usize) -> u128 {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let joltage = highest_value(&string_to_digits(line), n);
            debugln!("{line} -> {joltage}");
            joltage
        })
        .sum()
}

pub fn part_one(input: &str) -> Option<u128> {
    Some(total_joltage(input, PART_ONE_BATTERIES))
}

pub fn part_two(input: &str) -> Option<u128> {
    Some(total_joltage(input, PART_TWO_BATTERIES))
}

fn main() {
    let input = &advent_of_code::read_input(3);
    advent_of_code::solve!(1, part_one, input);
    advent_of_code::solve!(2, part_two, input);
}
