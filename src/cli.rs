use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "pickleball ranking-points backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the scoring server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Score a completed match from a JSON file ("-" reads stdin)
    Score {
        /// Path to the match request JSON
        input: String,
        /// Pretty-print the report
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print the active multiplier and constant tables
    Multipliers,
}
