use std::{env, process::ExitCode};

use linked_structures::sum_of_squares_in_range;

fn parse_bound(arg: Option<String>, default: i32) -> Result<i32, String> {
    match arg {
        Some(s) => s.parse().map_err(|e| format!("invalid bound {s:?}: {e}")),
        None => Ok(default),
    }
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let (start, end) = match (parse_bound(args.next(), 5), parse_bound(args.next(), 10)) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match sum_of_squares_in_range(start, end) {
        Ok(sum) => {
            println!("Sum of squares from {start} to {end} is {sum}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
