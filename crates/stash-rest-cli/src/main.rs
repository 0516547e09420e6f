#![forbid(unsafe_code)]

mod commands;
mod connection_args;
mod logger;

use clap::{Parser, Subcommand};
use stash_rest::Method;

use crate::{
    commands::{
        completions::CompletionsCommand,
        create_tag::CreateTagCommand,
        find_performers::FindPerformersCommand,
        find_scenes::FindScenesCommand,
        find_tag::FindTagCommand,
        request::{GetCommand, SendCommand},
        scan::ScanCommand,
    },
    connection_args::ConnectionArgs,
};

#[derive(Parser)]
#[command(name = "stash-rest")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn exec(self) -> anyhow::Result<()> {
        let Self {
            connection,
            command,
        } = self;
        match command {
            Commands::Get(cmd) => cmd.exec(&connection.client()?)?,
            Commands::Post(cmd) => cmd.exec(&connection.client()?, Method::POST)?,
            Commands::Put(cmd) => cmd.exec(&connection.client()?, Method::PUT)?,
            Commands::Patch(cmd) => cmd.exec(&connection.client()?, Method::PATCH)?,
            Commands::Delete(cmd) => cmd.exec(&connection.client()?, Method::DELETE)?,
            Commands::FindTag(cmd) => cmd.exec(&connection.client()?)?,
            Commands::CreateTag(cmd) => cmd.exec(&connection.client()?)?,
            Commands::FindScenes(cmd) => cmd.exec(&connection.client()?)?,
            Commands::FindPerformers(cmd) => cmd.exec(&connection.client()?)?,
            Commands::Scan(cmd) => cmd.exec(&connection.client()?)?,
            Commands::Completions(cmd) => cmd.exec::<Self>()?,
        }
        Ok(())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Send a GET request to a path below `/api/v1`
    Get(GetCommand),
    /// Send a POST request to a path below `/api/v1`
    Post(SendCommand),
    /// Send a PUT request to a path below `/api/v1`
    Put(SendCommand),
    /// Send a PATCH request to a path below `/api/v1`
    Patch(SendCommand),
    /// Send a DELETE request to a path below `/api/v1`
    Delete(SendCommand),
    /// Print the id of the tag with exactly this name, or `null`
    FindTag(FindTagCommand),
    /// Create a tag
    CreateTag(CreateTagCommand),
    /// Query scenes
    FindScenes(FindScenesCommand),
    /// Query performers
    FindPerformers(FindPerformersCommand),
    /// Start a metadata scan
    Scan(ScanCommand),
    /// Print a completion file for the given shell.
    ///
    /// Example: `stash-rest completions zsh | source /dev/stdin`.
    Completions(CompletionsCommand),
}

fn main() -> anyhow::Result<()> {
    let mut guard = logger::init();
    Cli::parse().exec()?;
    guard.disarm();
    Ok(())
}
