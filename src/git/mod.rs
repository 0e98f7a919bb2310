//! Git operations module
//!
//! Every operation shells out to the `git` binary through a
//! [`CommandRunner`](crate::shell::CommandRunner) and parses its text output.
//!
//! - `repository`: The facade type, `init` and `checkout`
//! - `branches`: Branch listing and ordering
//! - `remotes`: Remote listing

pub mod branches;
pub mod error;
pub mod remotes;
pub mod repository;
pub mod types;

// Re-export the main types
pub use branches::operations::BranchListing;
pub use error::GitError;
pub use repository::core::GitRepo;
pub use types::{Branch, Remote};
