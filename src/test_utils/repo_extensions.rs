use assert_fs::prelude::*;
use git2::{Repository, Signature};

use crate::git::GitRepo;
use crate::shell::CommandRunner;

/// Create a repository on `master` with one commit holding three files,
/// plus a branch per name in `branches` pointing at that commit
///
/// The fixture is built with libgit2 so it does not depend on the code under
/// test or on the user's git configuration.
pub fn create_test_repo_with_branches(branches: &[&str]) -> (assert_fs::TempDir, GitRepo) {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    for name in ["file-01", "file-02", "file-03"] {
        temp_dir.child(name).touch().unwrap();
    }

    let repo = Repository::init(temp_dir.path()).unwrap();
    repo.set_head("refs/heads/master").unwrap();

    let mut index = repo.index().unwrap();
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let signature = Signature::now("Test User", "test@example.com").unwrap();
    let commit_id = repo
        .commit(
            Some("HEAD"),
            &signature,
            &signature,
            "Initial commit",
            &tree,
            &[],
        )
        .unwrap();
    let commit = repo.find_commit(commit_id).unwrap();

    for branch in branches {
        repo.branch(branch, &commit, false).unwrap();
    }

    let git_repo = GitRepo::open(temp_dir.path());
    (temp_dir, git_repo)
}

/// Test-only trait that adds assertion methods to GitRepo
pub trait RepoAssertions {
    /// Assert that HEAD points at `refs/heads/<branch_name>`
    fn assert_current_branch(&self, branch_name: &str) -> &Self;
}

/// Test-only trait that adds fixture operations to GitRepo
pub trait RepoTestOperations {
    /// Configure a remote directly through libgit2 (fluent)
    fn add_remote(&self, name: &str, url: &str) -> &Self;

    /// Set a repository-local config value through libgit2 (fluent)
    fn set_config(&self, key: &str, value: &str) -> &Self;
}

impl<R: CommandRunner> RepoAssertions for GitRepo<R> {
    fn assert_current_branch(&self, branch_name: &str) -> &Self {
        let repo = Repository::open(self.path()).unwrap();
        let head = repo.find_reference("HEAD").unwrap();
        let expected_target = format!("refs/heads/{branch_name}");

        match head.symbolic_target() {
            Some(actual_target) if actual_target == expected_target => {}
            Some(actual_target) => panic!(
                "HEAD symbolic target mismatch. Expected: '{expected_target}', Found: '{actual_target}'"
            ),
            None => panic!("HEAD is not a symbolic reference"),
        }
        self
    }
}

impl<R: CommandRunner> RepoTestOperations for GitRepo<R> {
    fn add_remote(&self, name: &str, url: &str) -> &Self {
        let repo = Repository::open(self.path()).unwrap();
        repo.remote(name, url).unwrap();
        self
    }

    fn set_config(&self, key: &str, value: &str) -> &Self {
        let repo = Repository::open(self.path()).unwrap();
        let mut config = repo
            .config()
            .unwrap()
            .open_level(git2::ConfigLevel::Local)
            .unwrap();
        config.set_str(key, value).unwrap();
        self
    }
}
