//! Lexistat CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lexistat::cli::args::LexistatArgs;
use lexistat::cli::commands::execute_command;

fn main() {
    let args = LexistatArgs::parse();

    // -q, default, -v, -vv, -vvv
    let level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(err) = execute_command(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
