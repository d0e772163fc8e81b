use std::path::PathBuf;
use std::process;

use log::error;

mod input;
mod keymap;
mod run;

const USAGE: &str = "usage: chipvm <path to rom>";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 1 {
        error!("expected exactly one ROM path but got {} arguments", args.len());
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    if let Err(err) = run::run(PathBuf::from(&args[0])) {
        eprintln!("error: {:#}", err);
        eprintln!("{}", USAGE);
        process::exit(1);
    }
}
