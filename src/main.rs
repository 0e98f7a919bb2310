mod cli;
mod commands;
mod logging;
mod tui;

use clap::Parser;
use cli::{Cli, Commands};
use console::style;
use git_api::GitRepo;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!(repo = %cli.repo.display(), encoding = ?cli.encoding(), "starting");

    let shell = cli.shell();
    let repo = GitRepo::with_runner(&shell);

    let result = match &cli.command {
        Commands::Init => commands::init::handle_init(&repo),
        Commands::Checkout { branch, new_branch } => {
            commands::checkout::handle_checkout(&repo, branch, *new_branch)
        }
        Commands::Branch { json } => commands::branch::handle_branch(&repo, *json),
        Commands::Remote { json } => commands::remote::handle_remote(&repo, *json),
        Commands::Switch => commands::switch::handle_switch(&repo),
        Commands::Run { command } => commands::run::handle_run(&shell, command),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("✗").red().bold(), e);
        std::process::exit(1);
    }
}
