use std::env;
use std::path::PathBuf;
use std::process;

use log::{error, LevelFilter};

struct Args {
    url: String,
    output: PathBuf,
    verbose: bool,
}

fn print_usage() {
    println!("Usage: recipe-scrape [options] URL OUTPUT-FILE");
    println!();
    println!("Options:");
    println!("  -h, --help     produce help message");
    println!("  -v, --verbose  enable diagnostic output");
}

fn parse_args() -> Args {
    let mut verbose = false;
    let mut positionals = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(64);
            }
            "-v" | "--verbose" => verbose = true,
            other if other.starts_with('-') => {
                eprintln!("failed to parse arguments: unknown option {other}");
                process::exit(64);
            }
            _ => positionals.push(arg),
        }
    }

    let Ok([url, output]) = <[String; 2]>::try_from(positionals) else {
        print_usage();
        process::exit(64);
    };

    Args {
        url,
        output: PathBuf::from(output),
        verbose,
    }
}

fn main() {
    let args = parse_args();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    if let Err(err) = recipe_scrape::scrape_to_file(&args.url, &args.output) {
        error!("{err}");
        process::exit(-1);
    }
}
