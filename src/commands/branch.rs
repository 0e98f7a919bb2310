use anyhow::{Context, Result};
use git_api::{CommandRunner, GitRepo};

use crate::tui::branch_display;

pub fn handle_branch<R: CommandRunner>(repo: &GitRepo<R>, json: bool) -> Result<()> {
    let listing = repo.branch_listing().context("Error getting branches")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing.into_branches())?);
    } else {
        branch_display::display_branches(&listing);
    }
    Ok(())
}
