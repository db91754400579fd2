/*
 * This file contains template code.
 * There is no need to edit this file unless you want to change template functionality.
 */
use std::{
    fs::{File, OpenOptions},
    io::Write,
    process,
};

const MODULE_TEMPLATE: &str = r###"#![doc = include_str!("../puzzles/DAY_PADDED.md")]

pub fn part_one(input: &str) -> Option<u64> {
    None
}

pub fn part_two(input: &str) -> Option<u64> {
    None
}

fn main() {
    let input = &advent_of_code::read_input(DAY);
    advent_of_code::solve!(1, part_one, input);
    advent_of_code::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code::read_file("examples", DAY);
        assert_eq!(part_one(&input), None);
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code::read_file("examples", DAY);
        assert_eq!(part_two(&input), None);
    }
}
"###;

const PUZZLE_TEMPLATE: &str = "# Day DAY\n";

fn parse_args() -> Result<u8, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    args.free_from_str()
}

fn safe_create_file(path: &str) -> Result<File, std::io::Error> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

fn create_file(path: &str) -> Result<File, std::io::Error> {
    OpenOptions::new().write(true).create(true).open(path)
}

fn render(template: &str, day: u8) -> String {
    template
        .replace("DAY_PADDED", &format!("{day:02}"))
        .replace("DAY", &day.to_string())
}

fn main() {
    let day = match parse_args() {
        Ok(day) => day,
        Err(_) => {
            eprintln!("Need to specify a day (as integer). example: `cargo scaffold 7`");
            process::exit(1);
        }
    };

    let day_padded = format!("{day:02}");

    let input_path = format!("src/inputs/{day_padded}.txt");
    let example_path = format!("src/examples/{day_padded}.txt");
    let puzzle_path = format!("src/puzzles/{day_padded}.md");
    let module_path = format!("src/bin/{day_padded}.rs");

    let mut file = match safe_create_file(&module_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to create module file: {e}");
            process::exit(1);
        }
    };

    match file.write_all(render(MODULE_TEMPLATE, day).as_bytes()) {
        Ok(_) => {
            println!("Created module file \"{module_path}\"");
        }
        Err(e) => {
            eprintln!("Failed to write module contents: {e}");
            process::exit(1);
        }
    }

    match safe_create_file(&puzzle_path)
        .and_then(|mut file| file.write_all(render(PUZZLE_TEMPLATE, day).as_bytes()))
    {
        Ok(_) => {
            println!("Created puzzle file \"{puzzle_path}\"");
        }
        Err(e) => {
            eprintln!("Failed to create puzzle file: {e}");
            process::exit(1);
        }
    }

    for (kind, path) in [("input", &input_path), ("example", &example_path)] {
        match create_file(path) {
            Ok(_) => {
                println!("Created empty {kind} file \"{path}\"");
            }
            Err(e) => {
                eprintln!("Failed to create {kind} file: {e}");
                process::exit(1);
            }
        }
    }

    println!("---");
    println!("🎄 Type `cargo solve {day_padded}` to run your solution.");
}
