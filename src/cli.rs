use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fastcalls")]
#[command(about = "Fast CLI tool for downloading and archiving earnings-call transcripts")]
#[command(version)]
pub struct Cli {
    /// Without a subcommand, starts the interactive prompt loop
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download all available transcripts for a ticker
    Download {
        /// Company ticker symbol
        #[arg(short, long)]
        ticker: String,

        /// Output directory (defaults to the configured transcript directory)
        #[arg(short, long)]
        output: Option<String>,
    },
}
