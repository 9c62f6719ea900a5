use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    #[arg(long, global = true, help = "Platform base URL (env: PROCESET_BASE_URL)")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "API key (env: PROCESET_API_KEY)")]
    pub api_key: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Request timeout in seconds (env: PROCESET_TIMEOUT_SECS)"
    )]
    pub timeout_secs: Option<u64>,

    #[arg(long, global = true, help = "Load variables from a .env file")]
    pub env_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the GUID of the ClickHouse connection the platform lists first
    Guid,
    /// Run SQL on the platform and print the result as semicolon CSV
    Extract {
        #[arg(long, help = "SQL script to run")]
        sql: String,

        #[arg(
            long,
            help = "If specified, writes the table to this file instead of stdout"
        )]
        output: Option<PathBuf>,
    },
    /// Upload a local semicolon CSV file into an existing table
    Upload {
        #[arg(long, help = "Target database")]
        database: String,

        #[arg(long, help = "Target table")]
        table: String,

        #[arg(long, help = "Semicolon-delimited CSV file with a header row")]
        file: PathBuf,
    },
    /// Start an automation script
    Execute {
        #[arg(long, help = "Automation script id")]
        script_id: i64,
    },
    /// Send a raw GraphQL document and print the JSON reply
    Request {
        #[arg(long, help = "GraphQL query or mutation text")]
        query: String,
    },
}
