//! Error taxonomy for the scaffold pipeline
//!
//! Only two outcomes need a type of their own: user cancellation (exit 0,
//! informational notice) and clone failure (exit 1, optional remediation
//! hint). Everything else propagates as `anyhow::Error` or is contained at
//! its stage as a warning.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user declined a prompt or abandoned an interactive session.
    /// Not a failure: callers map this to exit code 0.
    #[error("Operation cancelled.")]
    Cancelled,

    /// Fetching the template failed. Fatal: the pipeline stops here.
    #[error("Error cloning repository {repo}#{branch}: {message}")]
    Clone {
        repo: String,
        branch: String,
        message: String,
        /// Remediation hint when the failure text points at an
        /// auth or host-verification problem.
        hint: Option<&'static str>,
    },
}

impl ScaffoldError {
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScaffoldError::Clone { hint, .. } => *hint,
            ScaffoldError::Cancelled => None,
        }
    }
}

/// Map a prompt result to the cancellation taxonomy.
///
/// cliclack reports ESC/ctrl-c inside a prompt as `io::ErrorKind::Interrupted`;
/// that is a user decision, not an I/O failure.
pub fn prompt_result<T>(result: std::io::Result<T>) -> anyhow::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {
            Err(ScaffoldError::Cancelled.into())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn interrupted_prompt_becomes_cancellation() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::Interrupted, "esc"));
        let err = prompt_result(result).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::Cancelled)
        ));
    }

    #[test]
    fn other_prompt_errors_pass_through() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        let err = prompt_result(result).unwrap_err();
        assert!(err.downcast_ref::<ScaffoldError>().is_none());
    }
}
