use std::fmt;

/// Errors observable at the covering-array generator's and checker's
/// boundary. Malformed input is a programmer error surfaced immediately —
/// there is no partial generation and no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoveringArrayError {
    /// No parameters were supplied; there is nothing to generate or check.
    EmptyParameters,
    /// The checker was asked to verify an empty covering array.
    EmptyCoveringArray,
    /// An explicit strength fell outside `[1, N]` where `N` is the number
    /// of parameters. The generator clamps instead of erroring here; this
    /// is raised by the checker, which treats an out-of-range strength as a
    /// caller mistake rather than something to silently reinterpret.
    InvalidStrength { strength: i64, num_parameters: usize },
    /// The checker found a required combination of parameter values that no
    /// row in the covering array covers.
    MissingCombination { combination: Vec<String>, values: Vec<String> },
}

impl fmt::Display for CoveringArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoveringArrayError::EmptyParameters => {
                write!(f, "no parameters supplied")
            }
            CoveringArrayError::EmptyCoveringArray => {
                write!(f, "covering array is empty")
            }
            CoveringArrayError::InvalidStrength { strength, num_parameters } => {
                write!(f, "strength {strength} is out of range for {num_parameters} parameters")
            }
            CoveringArrayError::MissingCombination { combination, values } => {
                write!(f, "missing combination={combination:?}, values={values:?}")
            }
        }
    }
}

impl std::error::Error for CoveringArrayError {}
