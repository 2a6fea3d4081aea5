use std::fs::File;
use std::io::{self, BufReader};
use std::{env, process};

use dotenv::dotenv;
use log::error;

use pasticceria::errors::SimulatorError;
use pasticceria::shop;
use pasticceria::utils::init_logger;

fn main() {
    init_logger();
    dotenv().ok();

    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}

/// Reads commands from the path given as the first CLI argument, or from
/// standard input when none is given, and runs the simulation against
/// standard output.
fn run() -> Result<(), SimulatorError> {
    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        Some(path) => {
            let file = BufReader::new(File::open(path)?);
            shop::run(file, io::stdout())
        }
        None => shop::run(io::stdin().lock(), io::stdout()),
    }
}
