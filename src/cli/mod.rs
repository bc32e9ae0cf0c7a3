use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flowchat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging, including per-call diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive multi-turn chat; prior turns are sent as context
    Chat {
        /// Cap the context window to the N most recent turns per request
        #[arg(long)]
        max_history: Option<usize>,
    },

    /// Send one message without conversational context and print the reply
    Ask {
        message: String,
    },
}
