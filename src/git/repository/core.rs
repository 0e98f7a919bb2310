use std::path::{Path, PathBuf};

use tracing::debug;

use crate::git::error::GitError;
use crate::shell::{CommandRunner, Shell};

/// Facade over the `git` command line for a single working directory
pub struct GitRepo<R: CommandRunner = Shell> {
    runner: R,
}

impl GitRepo<Shell> {
    /// Bind a repository facade to `path`, spawning git through a [`Shell`]
    ///
    /// Relative paths are anchored at the current directory. The directory
    /// does not need to be a repository yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_runner(Shell::new(absolute(path.as_ref())))
    }
}

impl<R: CommandRunner> GitRepo<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.runner.working_directory()
    }

    /// Run a git command line, turning a non-zero exit into an error
    pub(crate) fn run_git(&self, command: &str) -> Result<String, GitError> {
        let out = self.runner.run(command)?;
        if out.success {
            Ok(out.output)
        } else {
            debug!(command, stderr = %out.output.trim_end(), "git command failed");
            Err(GitError::CommandFailed {
                command: command.to_string(),
                stderr: out.output,
            })
        }
    }

    /// Run `git init` and return what git printed
    pub fn init(&self) -> Result<String, GitError> {
        self.run_git("git init")
    }

    /// Switch to `branch`, creating it first when `new_branch` is set
    ///
    /// git reports the switch itself on stderr, so the returned text is
    /// usually empty.
    pub fn checkout(&self, branch: &str, new_branch: bool) -> Result<String, GitError> {
        let branch = shlex::try_quote(branch).map_err(|e| GitError::InvalidArgument {
            argument: branch.to_string(),
            reason: e.to_string(),
        })?;

        let command = if new_branch {
            format!("git checkout -b {branch}")
        } else {
            format!("git checkout {branch}")
        };

        self.run_git(&command)
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
