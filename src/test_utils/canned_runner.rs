use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::shell::{CommandOutput, CommandRunner, ShellError};

/// Test runner that records every command line and replays queued outputs
pub struct CannedRunner {
    working_directory: PathBuf,
    responses: RefCell<VecDeque<CommandOutput>>,
    commands: RefCell<Vec<String>>,
}

impl CannedRunner {
    pub fn new() -> Self {
        Self {
            working_directory: PathBuf::from("/canned/repo"),
            responses: RefCell::new(VecDeque::new()),
            commands: RefCell::new(Vec::new()),
        }
    }

    /// Queue the output for the next command (fluent)
    pub fn respond(self, output: CommandOutput) -> Self {
        self.responses.borrow_mut().push_back(output);
        self
    }

    /// Command lines received so far, oldest first
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl Default for CannedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for CannedRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, ShellError> {
        self.commands.borrow_mut().push(command.to_string());

        match self.responses.borrow_mut().pop_front() {
            Some(output) => Ok(output),
            None => panic!("No canned output left for command '{command}'"),
        }
    }

    fn working_directory(&self) -> &Path {
        &self.working_directory
    }
}

#[cfg(test)]
mod tests {
    use super::CannedRunner;
    use crate::shell::{CommandOutput, CommandRunner};

    #[test]
    fn default_replays_queued_output() {
        let runner = CannedRunner::default().respond(CommandOutput::success("ok"));

        assert_eq!(runner.run("echo ok").unwrap(), CommandOutput::success("ok"));
        assert_eq!(runner.commands(), vec!["echo ok"]);
        assert_eq!(runner.working_directory(), std::path::Path::new("/canned/repo"));
    }
}
