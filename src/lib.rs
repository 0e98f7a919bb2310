//! A thin facade over the `git` command line
//!
//! [`shell::Shell`] runs shell-word-split command lines in a fixed working
//! directory; [`git::GitRepo`] builds `init`, `checkout`, `branch` and
//! `remote` on top of it and parses git's text output.

pub mod git;
pub mod shell;

mod test_utils;

pub use git::{Branch, BranchListing, GitError, GitRepo, Remote};
pub use shell::{CommandOutput, CommandRunner, Encoding, Shell, ShellError};
