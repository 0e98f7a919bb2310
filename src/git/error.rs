use thiserror::Error;

use crate::shell::ShellError;

#[derive(Error, Debug)]
pub enum GitError {
    /// git exited non-zero; `stderr` is its raw error output
    #[error("{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("invalid argument {argument:?}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error(transparent)]
    Shell(#[from] ShellError),
}

impl From<GitError> for std::io::Error {
    fn from(err: GitError) -> Self {
        match err {
            GitError::Shell(ShellError::Spawn { source, .. }) => source,
            other => std::io::Error::other(other),
        }
    }
}
