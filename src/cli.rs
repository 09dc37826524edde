//! Command-line argument handling.
//!
//! The single positional argument is either a resolution N or the name of a
//! mode. Integers win; anything else must be a known mode.

use thiserror::Error;

pub const USAGE: &str = "Usage: midquad <N|graph>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Integrate once at resolution N and print the report.
    Single(i64),
    /// Sweep N and plot the error.
    Graph,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("missing argument")]
    Missing,
    #[error("unknown mode '{0}'")]
    UnknownMode(String),
}

impl Invocation {
    pub fn parse(arg: Option<&str>) -> Result<Self, ArgError> {
        let arg = arg.ok_or(ArgError::Missing)?;
        if let Ok(n) = arg.trim().parse::<i64>() {
            return Ok(Invocation::Single(n));
        }
        match arg {
            "graph" => Ok(Invocation::Graph),
            other => Err(ArgError::UnknownMode(other.to_string())),
        }
    }
}
