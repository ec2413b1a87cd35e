/*!
Reports for a check.
*/

/// High-level reports regarding a check.
///
/// The [Display](std::fmt::Display) form is the verdict line of the CLI contract: `OK` when the property holds, `FAIL` when a counterexample exists.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The bad output cannot be asserted --- within the bound for a bounded check, at any depth for interpolation.
    Safe,

    /// Some reachable state asserts the bad output.
    Unsafe,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "OK"),
            Self::Unsafe => write!(f, "FAIL"),
        }
    }
}
