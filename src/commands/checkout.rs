use anyhow::{Context, Result};
use console::style;
use git_api::{CommandRunner, GitRepo};

pub fn handle_checkout<R: CommandRunner>(
    repo: &GitRepo<R>,
    branch: &str,
    new_branch: bool,
) -> Result<()> {
    let out = repo
        .checkout(branch, new_branch)
        .with_context(|| format!("Error switching to branch '{branch}'"))?;
    print!("{out}");

    let verb = if new_branch {
        "Switched to a new branch"
    } else {
        "Switched to branch"
    };
    println!("{} {}: {}", style("✓").green().bold(), verb, style(branch).cyan());
    Ok(())
}
