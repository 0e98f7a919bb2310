//! Running command lines as child processes
//!
//! - `runner`: the `Shell` runner bound to a working directory
//! - `encoding`: how captured process output is turned into text
//! - `error`: failures that prevent a command from producing a result

pub mod encoding;
pub mod error;
pub mod runner;

use std::path::Path;

pub use encoding::Encoding;
pub use error::ShellError;
pub use runner::Shell;

/// Outcome of a command that ran to completion.
///
/// `output` holds standard output when the command succeeded and standard
/// error otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub output: String,
}

impl CommandOutput {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// Executes a command line against a fixed working directory.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, ShellError>;

    fn working_directory(&self) -> &Path;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str) -> Result<CommandOutput, ShellError> {
        (**self).run(command)
    }

    fn working_directory(&self) -> &Path {
        (**self).working_directory()
    }
}
