use rusty_phonebook::prelude::{Notice, run_app};
use std::process::exit;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("{}", Notice::from(&err).message);
        exit(1);
    }
}
