#[cfg(test)]
pub mod canned_runner;

#[cfg(test)]
pub mod repo_extensions;

#[cfg(test)]
pub use canned_runner::CannedRunner;

#[cfg(test)]
pub use repo_extensions::{create_test_repo_with_branches, RepoAssertions, RepoTestOperations};
