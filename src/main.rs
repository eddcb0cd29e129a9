//! Genquest - Entry Point
//!
//! Runs the question-generation HTTP service, or generates questions for
//! a single passage from the command line.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use genquest::core::config::{config, set_config, ServiceConfig};
use genquest::core::error::{GenquestError, Result};
use genquest::grammar::QuestionGenerator;
use genquest::server;
use genquest::RemoteAnnotator;

#[derive(Parser)]
#[command(name = "genquest", about = "WH-question generation from declarative text")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
    /// Generate questions for one passage and print them
    Gen {
        /// Passage text; read from stdin when omitted
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genquest=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        let loaded = ServiceConfig::from_file(path)?;
        if set_config(loaded).is_err() {
            tracing::warn!("configuration already initialized, ignoring --config");
        }
    }

    match cli.command {
        Command::Serve { addr } => {
            let annotator = Arc::new(RemoteAnnotator::from_env()?);
            let addr = addr.unwrap_or(config().bind_addr);
            server::serve(addr, annotator).await
        }
        Command::Gen { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            let limit = config().max_passage_chars;
            let chars = text.chars().count();
            if chars > limit {
                return Err(GenquestError::PassageTooLarge { chars, limit });
            }

            let annotator = RemoteAnnotator::from_env()?;
            let generator = QuestionGenerator::generate(&annotator, &text).await?;
            for question in generator.questions() {
                println!("{}", question);
            }
            Ok(())
        }
    }
}
