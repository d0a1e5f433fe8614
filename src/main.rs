//! branchpilot - interactive branching/PR workflow assistant.
//!
//! Each subcommand gathers its inputs through prompts, compiles them into an
//! ordered list of git/gh invocations, and executes the list sequentially,
//! aborting on the first failure.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod command;
mod config;
mod exec;
mod git;
mod naming;
mod plan;
mod prompt;
mod spinner;
mod workflow;

use config::Settings;
use exec::ProcessRunner;
use prompt::TerminalPrompter;

#[derive(Parser)]
#[command(name = "branchpilot")]
#[command(about = "Compile branching, sync, and PR workflows into ordered git/gh commands")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a working branch off an updated master
    WorkingBranch,
    /// Push a branch and open a pull request against develop/staging/master
    Pr,
    /// Push a branch and sync its dev/stg integration branches
    Push,
    /// Promote release through master, staging, and develop after a release
    PostRelease,
    /// Open the release PR (release into master)
    ReleasePr,
    /// Push a dated stable branch and open its PR
    StableReleasePr,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The only ambient read: everything downstream gets Settings explicitly.
    let project_dir_override = std::env::var_os("BRANCHPILOT_PROJECT_DIR").map(PathBuf::from);
    let settings = Settings::new(project_dir_override);
    let prompter = TerminalPrompter;
    let runner = ProcessRunner;

    let result = match cli.command {
        Commands::WorkingBranch => command::working_branch::run(&settings, &prompter, &runner),
        Commands::Pr => command::pull_request::run(&settings, &prompter, &runner),
        Commands::Push => command::push_sync::run(&settings, &prompter, &runner),
        Commands::PostRelease => command::post_release::run(&settings, &prompter, &runner),
        Commands::ReleasePr => command::release_pr::run(&settings, &prompter, &runner),
        Commands::StableReleasePr => command::stable_release_pr::run(&settings, &prompter, &runner),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
