//! u-tour3d CLI - find a short closed tour through the cities in a file.
//!
//! Prints the best fitness followed by the tour, one `x y z` line per city.
//! Set `RUST_LOG=debug` to follow the run generation by generation.

use std::path::PathBuf;
use std::process;

use u_tour3d::ga::{GaConfig, GaRunner};
use u_tour3d::io::{read_cities, render_report};

const DEFAULT_INPUT: &str = "data/input.txt";

struct Args {
    input: PathBuf,
    seed: Option<u64>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [INPUT] [--seed N]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  INPUT       City file: a count line, then one 'x y z' line per city");
    eprintln!("              (default: {DEFAULT_INPUT})");
    eprintln!("  --seed N    Seed the random generator for a reproducible run");
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut input = None;
    let mut seed = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid seed: {value}"))?,
                );
            }
            "-h" | "--help" => return Err(String::new()),
            flag if flag.starts_with('-') => return Err(format!("unknown option: {flag}")),
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument: {extra}")),
        }
    }

    Ok(Args {
        input: input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
        seed,
    })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("u-tour3d", String::as_str);

    let args = parse_args(&args).unwrap_or_else(|message| {
        if !message.is_empty() {
            eprintln!("Error: {message}");
            eprintln!();
        }
        print_usage(program);
        process::exit(1);
    });

    let cities = read_cities(&args.input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", args.input.display());
        process::exit(1);
    });

    let mut config = GaConfig::auto_select(cities.len());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let result = GaRunner::run(&cities, &config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    print!("{}", render_report(&result));
}
