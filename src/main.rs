//! Colloquy - chat with an OpenAI-compatible endpoint from the terminal.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use colloquy::config::Config;
use colloquy::conversation::Conversation;
use colloquy::history::ChatHistory;
use colloquy::llm::LlmConfig;

const HELP: &str = "\
commands:
  /system <text>  set or replace the system message
  /history        print the conversation so far
  /clear          forget the conversation, including the system message
  /help           show this help
  /quit           exit";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::load();
    let llm = LlmConfig::from_env_and_config(Some(&config.llm));
    if !llm.is_configured() {
        anyhow::bail!(
            "no API key configured; set OPENAI_API_KEY or add api_key to the config file"
        );
    }

    let history = ChatHistory::with_max_length(config.history.max_length);
    let mut conversation = Conversation::new(llm).with_history(history);

    println!("colloquy - chatting with {} (/help for commands)", conversation.model());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/help" => println!("{HELP}"),
            "/clear" => {
                conversation.clear_history();
                println!("history cleared");
            }
            "/history" => {
                for msg in conversation.get_history() {
                    println!("{}{}", msg.role.prefix(), msg.content);
                }
            }
            _ if input.starts_with("/system ") => {
                let content = input["/system ".len()..].trim();
                conversation.add_system_message(content);
                println!("system message set");
            }
            _ => match conversation.generate(input, true, None).await {
                Ok(reply) => println!("{reply}"),
                Err(err) => eprintln!("error: {err}"),
            },
        }
    }

    Ok(())
}
