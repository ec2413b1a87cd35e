/*!
A simple CLI interface to the library.

# Use

```sh
otter_mc_cli [--option(=value)]* circuit.aag <bound> <interpolation> [statistics]
```

The three positional flags are integers: the bound to unroll, `1` to prove the property at every depth via interpolation (`0` for a bounded check), and an optional `1` to print per-iteration statistics while interpolating.

The process prints exactly one of `OK` / `FAIL` on its own line --- `OK` meaning the property holds up to the bound (bounded check) or unconditionally (interpolation) --- and exits 0.
Errors are printed as `c `-prefixed lines with a non-zero exit, and no verdict.

## Options

- `--solver` / `--proof-solver` name the external solver binaries.
- `--dimacs` fixes the path queries are written to, which helps when inspecting what a solver was asked.
*/

use std::path::PathBuf;

use clap::Parser;

use otter_mc::{config::Config, context::Checker};

/// Decide whether the bad output of an AIGER circuit is reachable from the all-zero state.
#[derive(Parser)]
#[command(name = "otter_mc_cli", version, about)]
struct Args {
    /// The circuit to check, in ASCII AIGER form.
    input: PathBuf,

    /// Transition steps to unroll for a bounded check.
    bound: u32,

    /// 1 to prove the property at every depth via interpolation, 0 for a bounded check.
    #[arg(value_parser = clap::value_parser!(u8).range(0..=1))]
    interpolation: u8,

    /// 1 to print per-iteration statistics while interpolating.
    #[arg(value_parser = clap::value_parser!(u8).range(0..=1))]
    statistics: Option<u8>,

    /// The plain SAT solver binary.
    #[arg(long, default_value = "minisat_core")]
    solver: PathBuf,

    /// The proof-logging SAT solver binary.
    #[arg(long, default_value = "minisat_proof")]
    proof_solver: PathBuf,

    /// Write each DIMACS query to this fixed path, rather than a temporary file.
    #[arg(long)]
    dimacs: Option<PathBuf>,
}

/// Entrypoint to the CLI.
fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = Config {
        bound: args.bound,
        interpolation: args.interpolation == 1,
        statistics: args.statistics == Some(1),
        solver_path: args.solver,
        proof_solver_path: args.proof_solver,
        dimacs_path: args.dimacs,
    };

    let checker = match Checker::from_path(&args.input, config) {
        Ok(checker) => checker,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    match checker.check() {
        Ok(report) => println!("{report}"),
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    }
}
