/*!
A safety model checker for sequential circuits in the AIGER format.

otter_mc decides whether the designated bad output of a circuit can be asserted in any state reachable from the all-zero latch valuation.
Satisfiability queries are delegated to external SAT solvers; the library builds the queries, reads the verdicts, and --- for unbounded proofs --- mines the resolution refutations the proof-logging solver returns.

Two procedures are available:

- [Bounded model checking](crate::procedures::bmc): the transition relation is unrolled to a fixed bound, encoded to CNF by the Tseitin transformation, and handed to a SAT solver.
  A satisfying assignment is a counterexample trace; unsatisfiability shows the property holds within the bound.
- [Interpolation](crate::procedures::interpolation): following McMillan, reachable states are over-approximated by Craig interpolants extracted from refutation proofs, until either the approximation closes (the property holds at every depth) or a counterexample is found.

# Orientation

The library is designed around the core structure of a [Checker](crate::context::Checker).

A check, at a high level, flows through a handful of cooperating parts:
- A circuit is parsed into a [Model](crate::structures::Model) by the [builder].
- The [encoder] unrolls the model into formulas over the [formula arena](crate::structures::Formulas) and flattens those to [clause](crate::structures::Clause) sets.
- The [solver] writes a DIMACS file and blocks on an external solver process.
- On unsatisfiable proof-logging queries, the [proof] module rebuilds the resolution refutation as a content-addressed DAG.
- The [interpolant] module labels that DAG to produce an interpolant, which the [procedures] fold back into the next query.

Useful starting points, then, may be:
- The [procedures] for the two top-level loops.
- The [encoder] for the unrolling and the Tseitin transformation.
- The [structures] for the formula and clause representations everything else shares.

# Example

```rust,ignore
let config = Config {
    bound: 20,
    interpolation: true,
    ..Config::default()
};

let checker = Checker::from_path("circuit.aag", config)?;

match checker.check()? {
    Report::Safe => println!("OK"),
    Report::Unsafe => println!("FAIL"),
}
```

# Logs

Calls to [log!](log) are made throughout the library, with targets listed in [misc::log] to help narrow output to relevant parts.
No log implementation is provided; the CLI initialises [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::single_match)]
#![allow(unused_labels)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod encoder;
pub mod interpolant;
pub mod proof;
pub mod solver;

pub mod reports;

pub mod misc;
