// src/main.rs — papertalk entry point

use clap::Parser;

use papertalk::backend::BackendClient;
use papertalk::cli::{Cli, Commands};
use papertalk::infra::config::{Config, ModelsConfig};
use papertalk::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    let base_url = cli
        .backend_url
        .as_deref()
        .unwrap_or(&config.backend.base_url);
    let backend = BackendClient::new(base_url)?;

    // Determine the model: --select-model or -m ? > CLI flag > config default.
    // Unknown names pass through verbatim; the backend owns final validation.
    let model = if cli.select_model || cli.model.as_deref() == Some("?") {
        Some(select_model_interactive(&config.models)?)
    } else if let Some(ref name) = cli.model {
        Some(
            config
                .models
                .resolve(name)
                .unwrap_or(name.as_str())
                .to_string(),
        )
    } else {
        None
    };

    match cli.command {
        Some(Commands::Load { ref file }) => {
            papertalk::cli::load::run_load(&backend, file, model.as_deref()).await?;
        }
        Some(Commands::Ask {
            ref session_id,
            ref question,
        }) => {
            papertalk::cli::ask::run_ask(&backend, session_id, question, model.as_deref()).await?;
        }
        Some(Commands::Models) => {
            papertalk::cli::models::run_models(&config.models);
        }
        Some(Commands::Chat) | None => {
            papertalk::tui::run_chat(&backend, &config, model.as_deref()).await?;
        }
    }

    Ok(())
}

/// Interactive model selection via `inquire::Select`.
///
/// Lists the configured models so the user doesn't have to remember wire
/// ids. Invoked by `--select-model` or `-m ?`.
fn select_model_interactive(models: &ModelsConfig) -> anyhow::Result<String> {
    if models.available.is_empty() {
        anyhow::bail!("No models configured. Add [[models.available]] entries to config.toml.");
    }

    let display_list: Vec<String> = models
        .available
        .iter()
        .map(|e| format!("{:<12} {}", e.label, e.id))
        .collect();

    let choice = inquire::Select::new("Select a model:", display_list.clone())
        .with_help_message("Use arrow keys to browse, type to filter")
        .with_page_size(15)
        .prompt()
        .map_err(|_| anyhow::anyhow!("Model selection cancelled"))?;

    let idx = display_list.iter().position(|d| d == &choice).unwrap_or(0);
    let id = models.available[idx].id.clone();

    eprintln!("  Using: {id}");
    Ok(id)
}
