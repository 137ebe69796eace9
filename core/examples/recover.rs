use std::{env, fs, process};

use recover_core::recover;

fn main() {
    let Some(path) = env::args().nth(1) else {
        eprintln!("Usage: recover <testcase.json>");
        process::exit(1);
    };

    let json = fs::read_to_string(&path).unwrap_or_else(|err| {
        eprintln!("cannot read {path}: {err}");
        process::exit(1);
    });

    match recover(&json) {
        Ok(outcome) => {
            println!("Secret: {}", outcome.secret);
            if outcome.wrong.is_empty() {
                println!("Wrong data set points: None");
            } else {
                println!("Wrong data set points: [{}]", outcome.wrong.join(", "));
            }
        }
        Err(err) => {
            eprintln!("recovery failed: {err}");
            process::exit(1);
        }
    }
}
