use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use git_api::{Encoding, Shell};

#[derive(Parser)]
#[command(name = "gapi")]
#[command(about = "A thin facade over the git command line")]
pub struct Cli {
    /// Repository working directory
    #[arg(short = 'C', long = "repo", env = "GAPI_REPO", default_value = ".", global = true)]
    pub repo: PathBuf,

    /// Replace invalid UTF-8 in command output instead of failing
    #[arg(long, global = true)]
    pub lossy: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn encoding(&self) -> Encoding {
        if self.lossy {
            Encoding::Utf8Lossy
        } else {
            Encoding::Utf8
        }
    }

    pub fn shell(&self) -> Shell {
        Shell::with_encoding(&self.repo, self.encoding())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a repository (runs git init)
    Init,
    /// Switch to a branch
    Checkout {
        /// Branch to switch to
        branch: String,
        /// Create the branch first
        #[arg(short = 'b', long)]
        new_branch: bool,
    },
    /// List branches, current branch first
    Branch {
        /// Print a JSON array instead of a list
        #[arg(long)]
        json: bool,
    },
    /// List remotes
    Remote {
        /// Print a JSON array instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Pick a branch interactively and switch to it
    Switch,
    /// Run a command line in the repository directory
    Run {
        /// Command line, split with shell-word rules
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
}
