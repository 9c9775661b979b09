//! CLI command definitions for the mentor gateway.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::MentorConfig;
use crate::export::{write_artifact, DocumentArtifact};
use crate::gateway::PromptGateway;
use crate::llm::ChatClient;
use crate::model::{Opportunity, UserProfile};

/// Default directory for exported document artifacts.
const DEFAULT_EXPORT_DIR: &str = "./exports";

/// Mentor generation gateway: opportunities, plans, documents and lessons.
#[derive(Parser)]
#[command(name = "nextwave-mentor")]
#[command(about = "Generate business opportunities, execution plans and investor documents")]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate business opportunities from a profile JSON file.
    Opportunities {
        /// Path to a UserProfile JSON file.
        #[arg(long)]
        profile: PathBuf,
    },

    /// Generate a 90-day plan for a selected opportunity.
    Plan {
        /// Path to a UserProfile JSON file.
        #[arg(long)]
        profile: PathBuf,

        /// Path to the selected Opportunity JSON file.
        #[arg(long)]
        idea: PathBuf,
    },

    /// Generate a training lesson for a topic.
    Lesson {
        /// Lesson topic, e.g. "pricing".
        topic: String,
    },

    /// Ask the voice mentor a single question.
    Voice {
        /// The question to ask.
        message: String,
    },

    /// Generate and export an investor document for an opportunity.
    Export {
        /// Path to the selected Opportunity JSON file.
        #[arg(long)]
        idea: PathBuf,

        /// Which document to generate.
        #[arg(long, value_enum)]
        kind: DocumentKind,

        /// Output directory for the artifact.
        #[arg(long, default_value = DEFAULT_EXPORT_DIR)]
        output: PathBuf,
    },
}

/// Exportable document kinds.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DocumentKind {
    ConceptNote,
    PitchDeck,
    Financials,
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parse arguments and run.
pub async fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run with already-parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let gateway = build_gateway()?;

    match cli.command {
        Commands::Opportunities { profile } => {
            let profile: UserProfile = read_json(&profile)?;
            let opportunities = gateway.generate_opportunities(&profile).await?;
            info!(count = opportunities.len(), "Generated opportunities");
            print_json(&opportunities)?;
        }
        Commands::Plan { profile, idea } => {
            let profile: UserProfile = read_json(&profile)?;
            let idea: Opportunity = read_json(&idea)?;
            let plan = gateway.generate_plan(&profile, &idea).await?;
            info!(weeks = plan.weeks.len(), "Generated plan");
            print_json(&plan)?;
        }
        Commands::Lesson { topic } => {
            let lesson = gateway.generate_training_lesson(&topic).await?;
            print_json(&lesson)?;
        }
        Commands::Voice { message } => {
            let reply = gateway.voice_reply(&[], &message).await?;
            println!("{}", reply.reply_text);
            println!("{}", reply.follow_up_question);
        }
        Commands::Export { idea, kind, output } => {
            let idea: Opportunity = read_json(&idea)?;
            let artifact = match kind {
                DocumentKind::ConceptNote => {
                    DocumentArtifact::ConceptNote(gateway.generate_concept_note(&idea).await?)
                }
                DocumentKind::PitchDeck => {
                    DocumentArtifact::PitchDeck(gateway.generate_pitch_deck(&idea).await?)
                }
                DocumentKind::Financials => {
                    DocumentArtifact::Financials(gateway.generate_financials(&idea).await?)
                }
            };
            let path = write_artifact(&output, &idea.title, &artifact)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn build_gateway() -> anyhow::Result<PromptGateway> {
    let config = MentorConfig::from_env()?;
    let client = ChatClient::new(config.api_base, config.api_key, config.model.clone());
    Ok(PromptGateway::new(Arc::new(client)).with_model(config.model))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
