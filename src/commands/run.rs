use anyhow::{anyhow, Context, Result};
use git_api::CommandRunner;

/// Run a command line through the runner, echoing its output
///
/// A single argument is taken as a complete command line; several arguments
/// are quoted and joined first. A non-zero exit becomes an error carrying
/// the command's stderr.
pub fn handle_run<R: CommandRunner>(runner: &R, command: &[String]) -> Result<()> {
    let command_line = command_line(command)?;
    let out = runner
        .run(&command_line)
        .with_context(|| format!("Error running '{command_line}'"))?;

    if !out.success {
        return Err(anyhow!("{}", out.output.trim_end()))
            .with_context(|| format!("Command '{command_line}' failed"));
    }

    print!("{}", out.output);
    Ok(())
}

fn command_line(command: &[String]) -> Result<String> {
    match command {
        [single] => Ok(single.clone()),
        parts => shlex::try_join(parts.iter().map(String::as_str))
            .map_err(|e| anyhow!("Cannot quote command: {e}")),
    }
}
