use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod init;
pub mod migrate;
pub mod seed;
pub mod serve;
pub mod user;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Initialize the database
    Init {},
    /// Migrate the db schema
    Migrate {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2424")]
        port: String,
    },
    /// Create demo users and fill an empty book with fake appointments
    Seed {},
    /// Create a user account
    AddUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run(&config).await?;
        }
        Some(Command::Migrate {}) => {
            migrate::run(&config).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await;
        }
        Some(Command::Seed {}) => {
            seed::run(&config).await?;
        }
        Some(Command::AddUser { username, password }) => {
            user::run(&config, &username, &password).await?;
        }
        None => {}
    }

    Ok(())
}
