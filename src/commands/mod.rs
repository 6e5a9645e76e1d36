pub mod init;
pub mod menu;
pub mod statuses;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "List available statuses")]
    Statuses,
    #[command(about = "Run the interactive menu")]
    Menu,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init) => init::cmd(),
            Some(Commands::Task(args)) => task::cmd(args),
            Some(Commands::Statuses) => statuses::cmd(),
            // No subcommand drops into the interactive menu
            Some(Commands::Menu) | None => menu::cmd(),
        }
    }
}
