//! `dank` - command-line front end for the Dank Reddit client core.
//!
//! Classifies inbox listings and previews submission headers from Reddit API
//! JSON dumps.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dank_core::{
    Classifier, ConsistencyPolicy, InboxMessage, InboxMessageType, InboxSummary, PendingVotes,
    Settings, StandardSwipeActions, Submission, SubmissionHeader, parse_listing, try_classify,
};

const DEFAULT_LOG_FILTER: &str = "dank=info,dank_core=info";

#[derive(Parser, Debug)]
#[command(name = "dank")]
#[command(version, about = "Classify Reddit inbox messages and preview submission headers")]
struct Cli {
    /// Settings file (defaults to <config dir>/dank/settings.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every message in an inbox listing
    Classify {
        /// Inbox listing JSON file, or `-` for stdin
        #[arg(default_value = "-", value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// How to handle messages whose shape contradicts the classification rules
        #[arg(long, value_name = "POLICY")]
        policy: Option<ConsistencyPolicy>,
    },

    /// Render the header shown above a submission's comments
    Header {
        /// Submission JSON file (`t3` thing or `/comments` response), or `-` for stdin
        #[arg(default_value = "-", value_name = "FILE")]
        input: PathBuf,

        /// Replies posted locally that have not synced yet
        #[arg(long, default_value_t = 0, value_name = "N")]
        pending_replies: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One classified message in JSON output.
#[derive(Debug, Serialize)]
struct ClassifiedMessage<'a> {
    name: Option<&'a str>,
    #[serde(rename = "type")]
    message_type: InboxMessageType,
    subject: &'a str,
    author: Option<&'a str>,
    unread: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyReport<'a> {
    messages: Vec<ClassifiedMessage<'a>>,
    summary: InboxSummary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref()).await?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            settings
                .log_filter
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILTER)
                .into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(?settings, "Loaded settings");

    match cli.command {
        Command::Classify {
            input,
            format,
            policy,
        } => {
            let policy = policy.unwrap_or_else(|| settings.consistency_policy());
            classify(&input, format, policy).await
        }
        Command::Header {
            input,
            pending_replies,
            format,
        } => header(&input, pending_replies, format).await,
    }
}

async fn classify(input: &Path, format: OutputFormat, policy: ConsistencyPolicy) -> Result<()> {
    let json = read_input(input).await?;
    let messages = parse_listing(&json).context("Failed to decode inbox listing")?;
    info!(count = messages.len(), policy = policy.as_str(), "Classifying inbox");

    let types = classify_messages(&messages, policy)?;
    let summary = InboxSummary::from_classified(&messages, &types);

    match format {
        OutputFormat::Text => {
            for (message, ty) in messages.iter().zip(&types) {
                println!(
                    "{:<18} {:<12} {:<20} {}",
                    ty.display_name(),
                    message.name.as_deref().unwrap_or("-"),
                    message.author.as_deref().unwrap_or("-"),
                    message.subject
                );
            }
            println!();
            for ty in InboxMessageType::ALL {
                println!("{:<18} {}", ty.display_name(), summary.count(ty));
            }
            println!("{:<18} {}", "Unread", summary.unread);
        }
        OutputFormat::Json => {
            let report = ClassifyReport {
                messages: messages
                    .iter()
                    .zip(types)
                    .map(|(message, message_type)| ClassifiedMessage {
                        name: message.name.as_deref(),
                        message_type,
                        subject: &message.subject,
                        author: message.author.as_deref(),
                        unread: message.unread,
                    })
                    .collect(),
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Classifies all messages.
///
/// A strict policy reports the first violation as an error instead of
/// panicking, so the CLI exits cleanly with a message.
fn classify_messages(
    messages: &[InboxMessage],
    policy: ConsistencyPolicy,
) -> Result<Vec<InboxMessageType>> {
    match policy {
        ConsistencyPolicy::Strict => messages
            .iter()
            .map(|message| {
                try_classify(message)
                    .map_err(dank_core::Error::from)
                    .with_context(|| {
                        format!(
                            "Message {} failed consistency checks",
                            message.name.as_deref().unwrap_or("<unnamed>")
                        )
                    })
            })
            .collect(),
        ConsistencyPolicy::Lenient => Ok(Classifier::new(policy).classify_all(messages)),
    }
}

async fn header(input: &Path, pending_replies: usize, format: OutputFormat) -> Result<()> {
    let json = read_input(input).await?;
    let submission = Submission::from_json(&json).context("Failed to decode submission")?;

    let header = SubmissionHeader::bind(
        &submission,
        &PendingVotes::new(),
        &StandardSwipeActions,
        chrono::Utc::now(),
    )
    .with_pending_replies(pending_replies);

    match format {
        OutputFormat::Text => {
            println!("{}", header.title_line);
            println!("{}", header.byline);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&header)?),
    }
    Ok(())
}

/// Reads a file, or stdin when the path is `-`.
async fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut contents = String::new();
        tokio::io::stdin()
            .read_to_string(&mut contents)
            .await
            .context("Failed to read stdin")?;
        return Ok(contents);
    }

    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))
}

/// Load settings from file. A missing file yields defaults.
async fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings_path = path.map_or_else(
        || {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("dank")
                .join("settings.json")
        },
        Path::to_path_buf,
    );

    if !settings_path.exists() {
        return Ok(Settings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .with_context(|| format!("Failed to read {}", settings_path.display()))?;

    Settings::from_json(&contents)
        .with_context(|| format!("Invalid settings in {}", settings_path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lenient_summary_reuses_computed_types() {
        let messages = vec![
            InboxMessage::thread("something else", Some("t3_abc")),
            InboxMessage::thread("re: hi", Some("t4_abc")),
        ];
        let types = classify_messages(&messages, ConsistencyPolicy::Lenient).unwrap();
        assert_eq!(types, vec![InboxMessageType::PostReply, InboxMessageType::Unknown]);

        let summary = InboxSummary::from_classified(&messages, &types);
        assert_eq!(summary.count(InboxMessageType::PostReply), 1);
        assert_eq!(summary.count(InboxMessageType::Unknown), 1);
    }

    #[test]
    fn strict_reports_violation_as_error() {
        let messages = vec![InboxMessage::thread("re: hi", Some("t4_abc"))];
        assert!(classify_messages(&messages, ConsistencyPolicy::Strict).is_err());
    }
}
