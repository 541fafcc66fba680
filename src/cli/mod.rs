// src/cli/mod.rs — CLI definition (clap derive)

pub mod ask;
pub mod load;
pub mod models;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "papertalk", about = "Chat with your PDFs from the terminal", version)]
pub struct Cli {
    /// Model to use (configured label or wire id, or "?" to pick interactively)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Interactively select a model from the configured set
    #[arg(long, visible_alias = "select-model")]
    pub select_model: bool,

    /// Backend base URL (overrides config)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat TUI (default when no subcommand is given)
    Chat,
    /// Upload a PDF and print its summary plus the backend session id
    Load {
        /// Path to the PDF file
        file: PathBuf,
    },
    /// Ask a one-shot question in an existing backend session
    Ask {
        /// Backend session id printed by `load`
        session_id: String,
        /// The question text
        question: String,
    },
    /// List the configured models
    Models,
}
