use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use disaster_chatbot_client::{
    ChatClient, ChatPreferences, ChatScreen, ClientConfig, Language, screen::terminal,
};

#[derive(Parser)]
#[command(name = "disaster-chat")]
#[command(author, version, about = "Terminal chat with the disaster management chatbot", long_about = None)]
struct Cli {
    /// Chatbot service root, overrides CHATBOT_BASE_URL
    #[arg(short, long)]
    base_url: Option<String>,

    /// Reply language: english or hinglish
    #[arg(short, long, default_value = "english")]
    language: Language,

    /// City or state to get location-specific advice for
    #[arg(long)]
    location: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.base_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    let client = ChatClient::new(config)?;
    tracing::info!(base_url = %client.config().base_url, "starting chat");
    let preferences = ChatPreferences::new(cli.language, cli.location.as_deref());
    let (screen, events) = ChatScreen::new(Arc::new(client), preferences);

    println!("🚀 Disaster chat ready, type /help for commands");
    terminal::run(
        screen,
        events,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    )
    .await
}
