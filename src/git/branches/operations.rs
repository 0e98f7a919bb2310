use serde::Serialize;
use tracing::debug;

use crate::git::{error::GitError, repository::core::GitRepo, types::Branch};
use crate::shell::CommandRunner;

// Colors and columns from the user's config would break line parsing
const LIST_BRANCHES: &str = "git branch --no-color --no-column";

const CURRENT_MARKER: &str = "* ";
// git marks branches checked out in a linked worktree with "+ "
const WORKTREE_MARKER: &str = "+ ";

/// Parsed `git branch` output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchListing {
    /// The entry git marked with `"* "`; `None` on an unborn or orphan HEAD
    pub current: Option<Branch>,
    /// Every other branch, ordered by name
    pub others: Vec<Branch>,
}

impl BranchListing {
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.others.is_empty()
    }

    /// Current branch (if any) followed by the rest
    pub fn into_branches(self) -> Vec<Branch> {
        self.current.into_iter().chain(self.others).collect()
    }
}

impl<R: CommandRunner> GitRepo<R> {
    /// List local branches, current branch first and the rest by name
    pub fn branch(&self) -> Result<Vec<Branch>, GitError> {
        Ok(self.branch_listing()?.into_branches())
    }

    /// List local branches keeping track of which one is checked out
    pub fn branch_listing(&self) -> Result<BranchListing, GitError> {
        let out = self.run_git(LIST_BRANCHES)?;
        let listing = parse_branch_listing(&out);
        debug!(
            current = ?listing.current,
            others = listing.others.len(),
            "listed branches"
        );
        Ok(listing)
    }

    /// Get the current branch, if git marks one as checked out
    pub fn current_branch(&self) -> Result<Option<Branch>, GitError> {
        Ok(self.branch_listing()?.current)
    }
}

/// Parse `git branch` output
///
/// The entry marked with `"* "` becomes `current`; everything else is
/// ordered by its trimmed name.
pub fn parse_branch_listing(output: &str) -> BranchListing {
    let mut current = None;
    let mut others: Vec<&str> = Vec::new();

    for line in output.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match line.strip_prefix(CURRENT_MARKER) {
            Some(name) if current.is_none() => current = Some(name.trim()),
            Some(name) => others.push(name.trim()),
            None => others.push(line.trim_start_matches(WORKTREE_MARKER).trim()),
        }
    }

    others.sort_unstable();

    BranchListing {
        current: current.map(Branch::new),
        others: others.into_iter().map(Branch::new).collect(),
    }
}
