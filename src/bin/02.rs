#![doc = include_str!("../puzzles/02.md")]

use advent_of_code::{debugln, helpers::range::IdRange};

/// Returns true if the decimal digits of `id` are some sequence written
/// exactly twice, like `6464`.
fn has_equal_halves(id: u64) -> bool {
    let digits = id.to_string();
    let len = digits.len();
    if len % 2 != 0 {
        return false;
    }
    let (front, back) = digits.split_at(len / 2);
    front == back
}

/// Returns true if the decimal digits of `id` are some sequence written at
/// least twice, like `111` or `12341234`.
fn has_repeated_pattern(id: u64) -> bool {
    let digits = id.to_string();
    let digits = digits.as_bytes();
    let len = digits.len();

    (1..=len / 2)
        .filter(|pattern_len| len % pattern_len == 0)
        .any(|pattern_len| {
            let pattern = &digits[..pattern_len];
            digits.chunks(pattern_len).all(|chunk| chunk == pattern)
        })
}

fn parse_ranges(input: &str) -> Option<Vec<IdRange>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|range| !range.is_empty())
        .map(|range| IdRange::parse(range).ok())
        .collect()
}

fn invalid_ids(range: IdRange, is_invalid: fn(u64) -> bool) -> impl Iterator<Item = u64> {
    range.ids().filter(move |&id| is_invalid(id))
}

fn sum_invalid_ids(input: &str, is_invalid: fn(u64) -> bool) -> Option<u64> {
    let ranges = parse_ranges(input)?;
    let sum = ranges
        .into_iter()
        .map(|range| {
            let sum: u64 = invalid_ids(range, is_invalid).sum();
            debugln!("{range}: {sum}");
            sum
        })
        .sum();
    Some(sum)
}

pub fn part_one(input: &str) -> Option<u64> {
    sum_invalid_ids(input, has_equal_halves)
}

pub fn part_two(input: &str) -> Option<u64> {
    sum_invalid_ids(input, has_repeated_pattern)
}

fn main() {
    let input = &advent_of_code::read_input(2);
    advent_of_code::solve!(1, part_one, input);
    advent_of_code::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_equal_halves() {
        for id in [11, 22, 99, 1010, 1212, 1111, 222222, 446446, 38593859, 1188511885] {
            assert!(has_equal_halves(id), "{id}");
        }
        for id in [12, 1213, 1234, 123, 111, 12345, 123123123] {
            assert!(!has_equal_halves(id), "{id}");
        }
    }

    #[test]
    fn test_has_repeated_pattern() {
        for id in [123123123, 1111, 1212, 12341234, 111, 11, 565656, 2121212121] {
            assert!(has_repeated_pattern(id), "{id}");
        }
        for id in [1, 1234, 12345, 123456, 1234567, 1213] {
            assert!(!has_repeated_pattern(id), "{id}");
        }
    }

    #[test]
    fn test_invalid_ids_per_range() {
        #[track_caller]
        fn do_it(range: &str, expected: &[u64]) {
            let range = IdRange::parse(range).unwrap();
            let actual: Vec<u64> = invalid_ids(range, has_repeated_pattern).collect();
            assert_eq!(actual, expected);
        }

        do_it("11-22", &[11, 22]);
        do_it("95-115", &[99, 111]);
        do_it("998-1012", &[999, 1010]);
        do_it("1188511880-1188511890", &[1188511885]);
        do_it("222220-222224", &[222222]);
        do_it("1698522-1698528", &[]);
        do_it("446443-446449", &[446446]);
        do_it("38593856-38593862", &[38593859]);
        do_it("565653-565659", &[565656]);
        do_it("824824821-824824827", &[824824824]);
        do_it("2121212118-2121212124", &[2121212121]);
    }

    #[test]
    fn test_malformed_range() {
        assert_eq!(part_one("11-22,95"), None);
        assert_eq!(part_two("11-22,a-b"), None);
    }

    #[test]
    fn test_part_one() {
        let input = advent_of_code::read_file("examples", 2);
        assert_eq!(part_one(&input), Some(1227775554));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code::read_file("examples", 2);
        assert_eq!(part_two(&input), Some(4174379265));
    }
}
