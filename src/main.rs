//! Binary entry point for `modreplace`.

use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = modreplace::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
