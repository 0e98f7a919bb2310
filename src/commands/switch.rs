use anyhow::{Context, Result};
use console::style;
use git_api::{CommandRunner, GitRepo};
use inquire::Select;

use super::checkout::handle_checkout;

/// Pick a branch from the list and check it out
pub fn handle_switch<R: CommandRunner>(repo: &GitRepo<R>) -> Result<()> {
    let branches = repo.branch().context("Error getting branches")?;

    if branches.is_empty() {
        println!("No branches found");
        return Ok(());
    }

    match Select::new("Select a branch:", branches).prompt() {
        Ok(chosen_branch) => handle_checkout(repo, &chosen_branch, false),
        Err(err) => {
            eprintln!(
                "{} Selection cancelled: {}",
                style("⚠").yellow().bold(),
                style(err).yellow()
            );
            Ok(())
        }
    }
}
