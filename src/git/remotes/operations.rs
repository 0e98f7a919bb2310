use crate::git::{error::GitError, repository::core::GitRepo, types::Remote};
use crate::shell::CommandRunner;

impl<R: CommandRunner> GitRepo<R> {
    /// List configured remotes in the order git reports them
    pub fn remote(&self) -> Result<Vec<Remote>, GitError> {
        let out = self.run_git("git remote")?;

        Ok(out
            .trim()
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Remote::new)
            .collect())
    }
}
