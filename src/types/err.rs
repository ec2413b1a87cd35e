/*!
Error types used in the library.

- All of these are fatal: the check cannot continue, and no verdict is printed alongside them.
- Most report malformed external input --- a circuit which is not valid ASCII AIGER, solver output with no verdict, or a proof trace whose resolution steps do not reproduce their stated conclusions.

Names of the error enums --- for the most part --- overlap with the modules they arise in.
*/
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error related to parsing a circuit.
    Aiger(AigerError),

    /// An error related to an external SAT solver.
    Solver(SolverError),

    /// An error related to a resolution proof trace.
    Proof(ProofError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aiger(e) => write!(f, "AIGER error: {e}"),
            Self::Solver(e) => write!(f, "Solver error: {e}"),
            Self::Proof(e) => write!(f, "Proof error: {e}"),
        }
    }
}

/// Errors during parsing of an AIGER circuit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AigerError {
    /// No file was found at the given path.
    NoFile,

    /// The input contains no header line.
    MissingHeader,

    /// The header is not of the form `aag M I L O A`.
    MalformedHeader,

    /// Some unspecific problem at a specific (zero-indexed) body line.
    Line(usize),

    /// The body holds fewer lines than the header declares.
    TruncatedBody,

    /// A literal refers to a variable above the declared maximum.
    UndefinedVariable(u64),

    /// A latch or AND gate is defined through a negated or constant literal.
    NegatedDefinition(u64),

    /// The circuit declares no outputs, and so no bad-output monitor.
    NoBadOutput,
}

impl From<AigerError> for ErrorKind {
    fn from(e: AigerError) -> Self {
        ErrorKind::Aiger(e)
    }
}

impl std::fmt::Display for AigerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFile => write!(f, "no file at the given path"),
            Self::MissingHeader => write!(f, "missing header"),
            Self::MalformedHeader => write!(f, "malformed header"),
            Self::Line(n) => write!(f, "malformed body line {n}"),
            Self::TruncatedBody => write!(f, "body ends before the declared counts are met"),
            Self::UndefinedVariable(l) => write!(f, "literal {l} exceeds the maximum variable"),
            Self::NegatedDefinition(l) => write!(f, "literal {l} cannot define a latch or gate"),
            Self::NoBadOutput => write!(f, "the circuit declares no outputs"),
        }
    }
}

/// Errors when delegating a query to an external SAT solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolverError {
    /// The DIMACS file for the query could not be written.
    Dimacs,

    /// The solver process could not be spawned, or did not run to completion.
    Launch(String),

    /// The output of the solver contains neither `SATISFIABLE` nor `UNSATISFIABLE`.
    NoVerdict,
}

impl From<SolverError> for ErrorKind {
    fn from(e: SolverError) -> Self {
        ErrorKind::Solver(e)
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dimacs => write!(f, "failed to write the DIMACS query"),
            Self::Launch(path) => write!(f, "failed to run the solver at {path}"),
            Self::NoVerdict => write!(f, "no verdict in the solver output"),
        }
    }
}

/// Errors when rebuilding a resolution refutation from a proof trace.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProofError {
    /// The trace region, or its terminating sentinel, is missing.
    MissingTrace,

    /// Some unspecific problem at a specific (zero-indexed) trace line.
    Line(usize),

    /// A chain refers to a clause index with no associated clause.
    UnknownClause(usize),

    /// A fresh intermediate index collides with an existing clause index.
    IndexCollision(usize),

    /// The stated conclusion of a chain differs from the computed resolvent.
    ResolventMismatch(usize),

    /// A trivial trace lacks the pair of complementary unit roots.
    MissingTrivialRoots,

    /// The trace does not derive the empty clause.
    MissingEmptyClause,

    /// A clause used by the refutation is neither an input clause nor derived.
    UnexpectedRoot,
}

impl From<ProofError> for ErrorKind {
    fn from(e: ProofError) -> Self {
        ErrorKind::Proof(e)
    }
}

impl std::fmt::Display for ProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTrace => write!(f, "missing or unterminated proof trace"),
            Self::Line(n) => write!(f, "malformed trace line {n}"),
            Self::UnknownClause(n) => write!(f, "unknown clause index {n}"),
            Self::IndexCollision(n) => write!(f, "clause index {n} used twice"),
            Self::ResolventMismatch(n) => {
                write!(f, "conclusion of line {n} differs from its resolvent")
            }
            Self::MissingTrivialRoots => write!(f, "no complementary unit roots in trivial trace"),
            Self::MissingEmptyClause => write!(f, "the trace does not derive the empty clause"),
            Self::UnexpectedRoot => write!(f, "proof clause is neither an input nor derived"),
        }
    }
}
