//! Command-line arguments, fixture boards and report formatting shared by
//! the `vigil` binary.

use std::path::PathBuf;

use clap::Parser;
use vigil_watch::{SolveConfig, Solution};

const LEGEND: &str = "\
Each FILE holds one board, one row per line:
  .  empty      X  wall      A  agent start
  < > ^ v       guard facing left / right / up / down
The goal is always the bottom-right cell.";

/// Find a route to the bottom-right corner that no guard can see
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = LEGEND)]
pub struct Args {
    /// Reject symbols outside the board alphabet instead of reading them as empty
    #[arg(long)]
    pub strict: bool,

    /// Board files to solve; the built-in fixtures run when none are given
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Solver configuration selected by the flags.
    pub fn config(&self) -> SolveConfig {
        if self.strict {
            SolveConfig::strict()
        } else {
            SolveConfig::default()
        }
    }
}

/// A named board with its known outcome.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    pub reachable: bool,
}

/// Built-in boards, run when no files are given.
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "open",
        rows: &["A....", ".....", ".....", ".....", "....."],
        reachable: true,
    },
    Fixture {
        name: "detour",
        rows: &["A....", "..^..", "..>..", "..X..", "X...."],
        reachable: true,
    },
    Fixture {
        name: "goal-watched",
        rows: &["A....", ".....", "....v", ".....", ".X..."],
        reachable: false,
    },
    Fixture {
        name: "trapped",
        rows: &["AX...", "X....", ".....", ".....", "....."],
        reachable: false,
    },
    Fixture {
        name: "start-watched",
        rows: &["A...<", ".....", ".....", ".....", "....."],
        reachable: false,
    },
    Fixture {
        name: "guard-shields-guard",
        rows: &["A.....", "......", ">.<...", "..X.X.", "......", "....^."],
        reachable: true,
    },
    Fixture {
        name: "corridor",
        rows: &["A.X...", "..X.X.", "..X.X.", "....X.", "XXXXX."],
        reachable: true,
    },
    Fixture {
        name: "corridor-watched",
        rows: &["A.X..<", "..X.X.", "..X.X.", "....X.", "XXXXX."],
        reachable: false,
    },
];

/// Look up a fixture by name.
pub fn fixture(name: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|f| f.name == name)
}

/// Human-readable report: marked board, outcome, and overlay.
pub fn report(name: &str, sol: &Solution) -> String {
    let outcome = if sol.reachable {
        format!(
            "reachable: route of {} cells, {} explored",
            sol.path_len(),
            sol.explored.len()
        )
    } else {
        format!("unreachable: {} explored", sol.explored.len())
    };
    format!("== {name}\n{}\n{outcome}\n{}\n", sol.board, sol.overlay())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_watch::Solver;

    #[test]
    fn fixtures_have_expected_outcomes() {
        let mut solver = Solver::default();
        for f in FIXTURES {
            let sol = solver.solve(f.rows).unwrap();
            assert_eq!(sol.reachable, f.reachable, "fixture {}", f.name);
            assert_eq!(sol.path.is_empty(), !f.reachable, "fixture {}", f.name);
        }
    }

    #[test]
    fn fixture_lookup() {
        assert_eq!(fixture("detour").map(|f| f.rows.len()), Some(5));
        assert!(fixture("missing").is_none());
    }

    #[test]
    fn report_mentions_outcome() {
        let f = fixture("trapped").unwrap();
        let sol = Solver::default().solve(f.rows).unwrap();
        let text = report(f.name, &sol);
        assert!(text.starts_with("== trapped\nAX...\n"));
        assert!(text.contains("unreachable: 1 explored"));
        assert!(text.ends_with("....G\n"));
    }

    #[test]
    fn report_layout() {
        let f = fixture("open").unwrap();
        let sol = Solver::default().solve(f.rows).unwrap();
        let text = report(f.name, &sol);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "== open");
        assert_eq!(&lines[1..6], f.rows);
        assert_eq!(lines[6], "reachable: route of 9 cells, 25 explored");
        assert_eq!(lines[7], "Aoooo");
        assert_eq!(lines.len(), 12);
        assert!(text.ends_with("G\n"));
    }

    #[test]
    fn args_parse_flags_and_files() {
        let args = Args::try_parse_from(["vigil", "--strict", "a.txt", "b.txt"]).unwrap();
        assert!(args.strict);
        assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.config(), SolveConfig::strict());

        let args = Args::try_parse_from(["vigil"]).unwrap();
        assert!(!args.strict);
        assert!(args.files.is_empty());
        assert_eq!(args.config(), SolveConfig::default());
    }

    #[test]
    fn args_reject_unknown_flags() {
        let err = Args::try_parse_from(["vigil", "--strcit", "board.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
