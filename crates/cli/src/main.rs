use crate::{
    commands::{Commands, ConnectionArgs},
    conn::ConnectionSettings,
    env::EnvManager,
    error::CliError,
};
use clap::Parser;
use connectors::file::csv::{settings::CsvSettings, source::read_frame};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod conn;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "proceset",
    version,
    about = "Query, load and automate a Proceset analytics platform"
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so tables and JSON on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut env = EnvManager::new();
    if let Some(path) = &cli.connection.env_file {
        env.load_from_file(path)?;
    }
    let settings = ConnectionSettings::resolve(&cli.connection, &env)?;
    let connector = conn::connect(&settings).await?;

    match cli.command {
        Commands::Guid => {
            println!("{}", connector.guid());
        }
        Commands::Extract { sql, output } => {
            let frame = connector.extract_data(&sql).await?;
            output::write_table(&frame, output.as_deref()).await?;
        }
        Commands::Upload {
            database,
            table,
            file,
        } => {
            let text = tokio::fs::read_to_string(&file).await?;
            let frame = read_frame(&text, &CsvSettings::default())?;
            info!("Read {} rows from {}", frame.height(), file.display());
            let reply = connector.upload_data(&database, &table, &frame).await?;
            output::print_json(&reply)?;
        }
        Commands::Execute { script_id } => {
            let reply = connector.execute_script(script_id).await?;
            output::print_json(&reply)?;
        }
        Commands::Request { query } => {
            let reply = connector.send_request(&query).await?;
            output::print_json(&reply)?;
        }
    }

    Ok(())
}
