use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use super::{CommandOutput, CommandRunner, Encoding, ShellError};

/// Runs command lines as child processes inside one working directory.
///
/// Command lines are split with POSIX shell-word rules and handed straight
/// to process creation: no globbing, pipes, redirection or variable
/// expansion happen.
#[derive(Debug, Clone)]
pub struct Shell {
    working_directory: PathBuf,
    encoding: Encoding,
}

impl Shell {
    pub fn new<P: AsRef<Path>>(working_directory: P) -> Self {
        Self::with_encoding(working_directory, Encoding::default())
    }

    pub fn with_encoding<P: AsRef<Path>>(working_directory: P, encoding: Encoding) -> Self {
        Self {
            working_directory: working_directory.as_ref().to_path_buf(),
            encoding,
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl CommandRunner for Shell {
    #[instrument(skip(self), fields(cwd = %self.working_directory.display()))]
    fn run(&self, command: &str) -> Result<CommandOutput, ShellError> {
        let tokens = shlex::split(command).ok_or_else(|| ShellError::Tokenize {
            command: command.to_string(),
        })?;
        let (program, args) = tokens.split_first().ok_or(ShellError::EmptyCommand)?;

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ShellError::Spawn {
                program: program.clone(),
                source,
            })?;

        let success = output.status.success();
        debug!(success, status = %output.status, "command finished");

        let bytes = if success { output.stdout } else { output.stderr };
        Ok(CommandOutput {
            success,
            output: self.encoding.decode(bytes)?,
        })
    }

    fn working_directory(&self) -> &Path {
        &self.working_directory
    }
}
