/*!
The context of a check: a circuit together with a configuration.

A [Checker] owns the circuit text rather than a parsed model.
Models are parsed per bound --- their index layout depends on the bound --- so the text is the stable representation to hold between bounds.
*/

use std::path::Path;

use crate::{
    config::Config,
    procedures::{bmc, interpolation},
    reports::Report,
    types::err::{self, AigerError},
};

/// A circuit and the configuration to check it under.
pub struct Checker {
    /// The configuration of the check.
    pub config: Config,

    aiger: String,
}

impl Checker {
    /// A checker over the circuit at the given path.
    pub fn from_path(path: impl AsRef<Path>, config: Config) -> Result<Self, err::ErrorKind> {
        let aiger = std::fs::read_to_string(path)
            .map_err(|_| err::ErrorKind::from(AigerError::NoFile))?;
        Ok(Checker { config, aiger })
    }

    /// A checker over the given circuit text.
    pub fn from_aiger(aiger: impl Into<String>, config: Config) -> Self {
        Checker {
            config,
            aiger: aiger.into(),
        }
    }

    /// Runs the configured procedure to a verdict.
    ///
    /// Interpolation proves or refutes the property at every depth; otherwise the check is bounded by `config.bound`.
    pub fn check(&self) -> Result<Report, err::ErrorKind> {
        match self.config.interpolation {
            true => interpolation::check(&self.aiger, &self.config),
            false => bmc::check(&self.aiger, self.config.bound, &self.config),
        }
    }
}
