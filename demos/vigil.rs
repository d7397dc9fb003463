//! Solve guarded boards from files, or the built-in fixtures.
//!
//! Run: cargo run --bin vigil -- [--strict] [FILE...]
//! Set `RUST_LOG=debug` to trace marking and search.

use std::process::ExitCode;

use clap::Parser;
use vigil_demos::{Args, FIXTURES, report};
use vigil_watch::Solver;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut solver = Solver::new(args.config());
    let mut failed = false;

    if args.files.is_empty() {
        for f in FIXTURES {
            match solver.solve(f.rows) {
                Ok(sol) => println!("{}", report(f.name, &sol)),
                Err(e) => {
                    log::error!("fixture {}: {e}", f.name);
                    failed = true;
                }
            }
        }
    }

    for path in &args.files {
        let name = path.display().to_string();
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                log::error!("{name}: {e}");
                failed = true;
                continue;
            }
        };
        match solver.solve_str(&text) {
            Ok(sol) => println!("{}", report(&name, &sol)),
            Err(e) => {
                log::error!("{name}: {e}");
                failed = true;
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
