use anyhow::{Context, Result};
use git_api::{CommandRunner, GitRepo};

use crate::tui::branch_display;

pub fn handle_remote<R: CommandRunner>(repo: &GitRepo<R>, json: bool) -> Result<()> {
    let remotes = repo.remote().context("Error getting remotes")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&remotes)?);
    } else {
        branch_display::display_remotes(&remotes);
    }
    Ok(())
}
