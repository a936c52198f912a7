// Kiss - Keep It Simple Scripting
// Main entry point

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use kiss::cli::commands;
use kiss::config::load_config;
use kiss::github::GithubClient;

#[derive(Parser)]
#[command(name = "kiss")]
#[command(about = "Keep It Simple Scripting - run shell recipes stored as GitHub gists")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show all kisses, optionally filtered by a character sequence
    Ls(SelectArgs),

    /// Run a kiss, prompting for which one when several match
    Run(SelectArgs),

    /// Show kiss details (README, files, timestamps, URL)
    Show(SelectArgs),

    /// Clone a kiss into the current directory to edit it
    Edit(SelectArgs),
}

#[derive(Args)]
struct SelectArgs {
    /// Characters expected to appear, in order, in a kiss name
    seq: Vec<String>,

    /// GitHub account to search
    #[arg(long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration
    let config = load_config()?;

    // Create GitHub client
    let client = GithubClient::new(config.token.clone())?;

    match cli.command {
        Command::Ls(args) => commands::ls(&client, &config, args.user.as_deref(), &args.seq).await,
        Command::Run(args) => {
            commands::run(&client, &config, args.user.as_deref(), &args.seq).await
        }
        Command::Show(args) => {
            commands::show(&client, &config, args.user.as_deref(), &args.seq).await
        }
        Command::Edit(args) => {
            commands::edit(&client, &config, args.user.as_deref(), &args.seq).await
        }
    }
}
