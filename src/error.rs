//! crypto-bmark error definitions.

use std::io;

/// Reasons a subcommand definition is rejected by the dispatcher.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistrationError {
    #[error("command name is empty")]
    EmptyName,
    #[error("command name '{0}' is malformed")]
    MalformedName(String),
    #[error("command '{0}' is already registered")]
    Duplicate(String),
}

/// Every way a crypto-bmark invocation can terminate early.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Couldn't register command {name}: {source}")]
    Registration {
        name: String,
        source: RegistrationError,
    },
    /// Usage text requested by the operator. Not a failure.
    #[error("{0}")]
    Help(String),
    #[error("{0}")]
    Usage(String),
    #[error("Unrecognized arguments passed: {0:?}")]
    UnrecognizedArguments(Vec<String>),
    #[error("no command specified, run with --help for a list of commands")]
    NoCommand,
    #[error("Command not found: {0}")]
    CommandNotFound(String),
    #[error("{algorithm} computation failed: {reason}")]
    Compute { algorithm: String, reason: String },
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Help(_) => 0,
            Error::Usage(_) | Error::UnrecognizedArguments(_) | Error::NoCommand => 2,
            Error::Registration { .. }
            | Error::CommandNotFound(_)
            | Error::Compute { .. }
            | Error::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(Error::Usage("bad flag".into()).exit_code(), 2);
        assert_eq!(Error::UnrecognizedArguments(vec!["x".into()]).exit_code(), 2);
        assert_eq!(Error::NoCommand.exit_code(), 2);
    }

    #[test]
    fn command_failures_exit_with_one() {
        let registration = Error::Registration {
            name: "sha256".into(),
            source: RegistrationError::Duplicate("sha256".into()),
        };
        assert_eq!(registration.exit_code(), 1);
        assert_eq!(Error::CommandNotFound("md5".into()).exit_code(), 1);
        let compute = Error::Compute {
            algorithm: "sha256".into(),
            reason: "boom".into(),
        };
        assert_eq!(compute.exit_code(), 1);
    }

    #[test]
    fn help_is_not_a_failure() {
        assert_eq!(Error::Help("usage".into()).exit_code(), 0);
    }

    #[test]
    fn messages_name_the_offender() {
        let err = Error::Registration {
            name: "sha256".into(),
            source: RegistrationError::Duplicate("sha256".into()),
        };
        assert_eq!(
            err.to_string(),
            "Couldn't register command sha256: command 'sha256' is already registered"
        );
        assert_eq!(
            Error::UnrecognizedArguments(vec!["foo".into()]).to_string(),
            "Unrecognized arguments passed: [\"foo\"]"
        );
    }
}
