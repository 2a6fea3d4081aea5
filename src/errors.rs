use std::fmt;
use std::io;

/// Coarse classification of an error, mirroring the distinction the command loop
/// needs to make between "stop with a message" and "stop silently".
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum ErrorKind {
    /// Generic failure with no special handling.
    Generic,

    /// The input stream could not be parsed as a valid command stream.
    MalformedInput,

    /// A structural invariant of the simulator was violated (e.g. an order
    /// scheduled against a recipe with no ingredients). Per the design,
    /// these are not recoverable and the process aborts.
    StructuralViolation,
}

/// Error type used across the simulator. Carries a human-readable message and
/// an [`ErrorKind`] so callers can distinguish ordinary I/O failures from the
/// rarer structural invariant violations that should abort the process.
#[derive(Debug)]
pub struct SimulatorError {
    pub message: String,
    pub kind: ErrorKind,
}

impl SimulatorError {
    /// Creates a generic error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        SimulatorError {
            message: message.into(),
            kind: ErrorKind::Generic,
        }
    }

    /// Creates an error of a specific kind.
    pub fn new_of_kind(message: impl Into<String>, kind: ErrorKind) -> Self {
        SimulatorError {
            message: message.into(),
            kind,
        }
    }
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SimulatorError {}

impl From<io::Error> for SimulatorError {
    fn from(err: io::Error) -> Self {
        SimulatorError::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test1_new_defaults_to_generic_kind() {
        let err = SimulatorError::new("boom");
        assert_eq!(err.kind, ErrorKind::Generic);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test2_new_of_kind_preserves_kind() {
        let err = SimulatorError::new_of_kind("bad recipe", ErrorKind::StructuralViolation);
        assert_eq!(err.kind, ErrorKind::StructuralViolation);
    }
}
