/*
 * This file contains template code.
 * There is no need to edit this file unless you want to change template functionality.
 */
use std::process;

use advent_of_code::input::{FetchConfig, InputLoader};

struct Args {
    day: u8,
    year: Option<u16>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Args {
        year: args.opt_value_from_str(["-y", "--year"])?,
        day: args.free_from_str()?,
    })
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Failed to process arguments: {e}");
            process::exit(1);
        }
    };

    let mut config = FetchConfig::from_env();
    if let Some(year) = args.year {
        config.year = year;
    }
    let loader = InputLoader::new(config);

    println!(
        "Downloading input for {} day {} with aoc-cli...",
        loader.config().year,
        args.day
    );

    match loader.fetch(args.day) {
        Ok(path) => {
            println!("---");
            println!("🎄 Successfully wrote input to \"{}\".", path.display());
        }
        Err(e) => {
            eprintln!("Failed to download input: {e}");
            process::exit(1);
        }
    }
}
