//! Command implementations for the Generate Reports CLI.
//!
//! Provides subcommands for listing employees and categories and for
//! generating a report from the same filter the web form builds.

use clap::Subcommand;

pub mod connection;
pub mod generate;
pub mod listing;

pub use connection::ConnectionArgs;
pub use generate::GenerateArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Print the employee directory
    Employees {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Generate a report and print it as a table
    Generate {
        #[command(flatten)]
        connection: ConnectionArgs,

        #[command(flatten)]
        filter: GenerateArgs,

        /// Also write the rows to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print the configured category catalog
    Categories {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Employees { connection } => {
            let config = connection.resolve()?;
            listing::run_employees(&config).await
        }
        Command::Generate {
            connection,
            filter,
            csv,
        } => {
            let config = connection.resolve()?;
            generate::run_generate(&config, &filter, csv.as_deref()).await
        }
        Command::Categories { connection } => {
            let config = connection.resolve()?;
            listing::print_categories(&config);
            Ok(())
        }
    }
}
