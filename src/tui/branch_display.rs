use console::style;
use git_api::{BranchListing, Remote};

/// Print branches one per line, marking the checked-out one
pub fn display_branches(listing: &BranchListing) {
    if listing.is_empty() {
        println!("{} No branches found", style("⚠").yellow());
        return;
    }

    match &listing.current {
        Some(current) => println!("{}{}", style("● ").green().bold(), style(current).cyan().bold()),
        None => println!("{} No branch checked out", style("⚠").yellow()),
    }

    for branch in &listing.others {
        println!("{}{}", style("  ").dim(), branch);
    }
}

pub fn display_remotes(remotes: &[Remote]) {
    if remotes.is_empty() {
        println!("{} No remotes configured", style("⚠").yellow());
        return;
    }

    for remote in remotes {
        println!("{}", style(remote).cyan());
    }
}
