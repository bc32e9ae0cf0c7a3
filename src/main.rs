mod cli;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use flowchat::{Conversation, FlowError, FlowSettings, LangflowClient, SendMessageUseCase};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = FlowSettings::from_env();
    if !settings.has_token() {
        // Non-fatal: the call is still attempted and the service's 401
        // becomes the user-visible outcome.
        eprintln!("⚠️ {}", FlowError::MissingCredential);
    }

    let send_message = SendMessageUseCase::new(Arc::new(LangflowClient::new(&settings)));

    match cli.command {
        Commands::Ask { message } => run_ask(&send_message, &message).await,
        Commands::Chat { max_history } => run_chat(&send_message, max_history).await,
    }
}

async fn run_ask(send_message: &SendMessageUseCase, message: &str) -> Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!("Please enter a message");
    }

    let reply = send_message.send(message.trim(), None).await;
    println!("{reply}");
    Ok(())
}

async fn run_chat(send_message: &SendMessageUseCase, max_history: Option<usize>) -> Result<()> {
    println!("What can I help with?");
    println!("(/clear resets the conversation, /quit exits)");

    let mut conversation = Conversation::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.is_empty() {
            eprintln!("⚠️ Please enter a message");
            continue;
        }
        match message {
            "/quit" | "/exit" => break,
            "/clear" => {
                conversation.clear();
                println!("Conversation cleared.");
                continue;
            }
            _ => {}
        }

        let context = match max_history {
            Some(cap) => conversation.recent(cap),
            None => conversation.all(),
        };
        let reply = send_message.send(message, Some(context)).await;
        println!("{reply}");

        conversation.append(message, reply);
    }

    Ok(())
}
