#![doc = include_str!("../puzzles/01.md")]

use std::fmt;

use advent_of_code::{debugln, helpers::parse};

const DIAL_SIZE: u32 = 100;
const START_POSITION: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rotation {
    direction: Direction,
    clicks: u32,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = match self.direction {
            Direction::Left => 'L',
            Direction::Right => 'R',
        };
        write!(f, "{d}{}", self.clicks)
    }
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{parser::combinator::StrLike, stream::Range, ParseError, Parser, RangeStream};

    impl Rotation {
        // "L68"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: RangeStream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
            Input::Range: Range + StrLike,
        {
            let direction = c::choice((
                c::token('L').map(|_| Direction::Left),
                c::token('R').map(|_| Direction::Right),
            ));

            (direction, parse::decimal_integer())
                .map(|(direction, clicks)| Rotation { direction, clicks })
        }
    }
}

/// Turns the dial from `position`, returning where it ends up and how many
/// clicks along the way (including the last one) land on `0`.
fn rotate(position: u32, rotation: Rotation) -> (u32, u32) {
    let clicks = rotation.clicks;
    match rotation.direction {
        Direction::Right => {
            let end = position + clicks % DIAL_SIZE;
            (end % DIAL_SIZE, clicks / DIAL_SIZE + end / DIAL_SIZE)
        }
        Direction::Left => {
            let end = (position + DIAL_SIZE - clicks % DIAL_SIZE) % DIAL_SIZE;
            let zeros = if position == 0 {
                clicks / DIAL_SIZE
            } else if clicks >= position {
                (clicks - position) / DIAL_SIZE + 1
            } else {
                0
            };
            (end, zeros)
        }
    }
}

fn parse_rotations(input: &str) -> Option<Vec<Rotation>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse::from_str(line.trim(), Rotation::parser()).ok())
        .collect()
}

/// Runs every rotation, returning how many of them end on `0` and how many
/// clicks in total land on `0`.
fn spin(rotations: &[Rotation]) -> (u32, u64) {
    let mut position = START_POSITION;
    let mut ends_at_zero = 0;
    let mut clicks_at_zero = 0;

    for &rotation in rotations {
        let (end, zeros) = rotate(position, rotation);
        debugln!("{position} --{rotation}--> {end} ({zeros} zero clicks)");

        position = end;
        clicks_at_zero += u64::from(zeros);
        if position == 0 {
            ends_at_zero += 1;
        }
    }

    (ends_at_zero, clicks_at_zero)
}

pub fn part_one(input: &str) -> Option<u32> {
    let rotations = parse_rotations(input)?;
    Some(spin(&rotations).0)
}

pub fn part_two(input: &str) -> Option<u64> {
    let rotations = parse_rotations(input)?;
    Some(spin(&rotations).1)
}

fn main() {
    let input = &advent_of_code::read_input(1);
    advent_of_code::solve!(1, part_one, input);
    advent_of_code::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn parse_one(line: &str) -> Rotation {
        parse::from_str(line, Rotation::parser()).unwrap()
    }

    #[test]
    fn test_parse() {
        #[track_caller]
        fn do_it(line: &str, sign: i32, clicks: u32) {
            let rotation = parse_one(line);
            assert_eq!(rotation.direction.sign(), sign);
            assert_eq!(rotation.clicks, clicks);
            assert_eq!(rotation.to_string(), line);
        }

        do_it("R1", 1, 1);
        do_it("L1", -1, 1);
        do_it("R10", 1, 10);
        do_it("L10", -1, 10);

        assert!(parse::from_str("X1", Rotation::parser()).is_err());
        assert!(parse::from_str("R", Rotation::parser()).is_err());
    }

    #[test]
    fn test_rotate() {
        assert_eq!(rotate(95, parse_one("R60")), (55, 1));
        assert_eq!(rotate(50, parse_one("R1000")), (50, 10));
        assert_eq!(rotate(50, parse_one("L68")), (82, 1));
        assert_eq!(rotate(52, parse_one("R48")), (0, 1));
        assert_eq!(rotate(0, parse_one("L5")), (95, 0));
        assert_eq!(rotate(0, parse_one("L100")), (0, 1));
        assert_eq!(rotate(5, parse_one("L5")), (0, 1));
        assert_eq!(rotate(5, parse_one("L4")), (1, 0));
        assert_eq!(rotate(5, parse_one("L205")), (0, 3));
    }

    #[test]
    fn test_rotate_huge() {
        assert_eq!(rotate(99, parse_one("R4294967295")), (94, 42_949_673));
        assert_eq!(rotate(0, parse_one("R4294967295")), (95, 42_949_672));
        assert_eq!(rotate(5, parse_one("L4294967295")), (10, 42_949_673));
        assert_eq!(
            spin(&[parse_one("R4294967295"), parse_one("R4294967295")]),
            (0, 85_899_346)
        );
    }

    #[test]
    fn test_rotate_matches_clicking() {
        for position in 0..DIAL_SIZE {
            for clicks in 0..250 {
                for direction in [Direction::Left, Direction::Right] {
                    let mut p = position as i32;
                    let mut zeros = 0;
                    for _ in 0..clicks {
                        p = (p + direction.sign()).rem_euclid(DIAL_SIZE as i32);
                        if p == 0 {
                            zeros += 1;
                        }
                    }
                    let rotation = Rotation { direction, clicks };
                    assert_eq!(
                        rotate(position, rotation),
                        (p as u32, zeros),
                        "{position} {rotation}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_part_one() {
        let input = advent_of_code::read_file("examples", 1);
        assert_eq!(part_one(&input), Some(3));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code::read_file("examples", 1);
        assert_eq!(part_two(&input), Some(6));
    }
}
