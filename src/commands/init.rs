use anyhow::{Context, Result};
use git_api::{CommandRunner, GitRepo};

pub fn handle_init<R: CommandRunner>(repo: &GitRepo<R>) -> Result<()> {
    let out = repo
        .init()
        .with_context(|| format!("Failed to initialize repository in {}", repo.path().display()))?;
    print!("{out}");
    Ok(())
}
