// src/cli/models.rs — List the configured models

use crate::infra::config::ModelsConfig;

pub fn run_models(models: &ModelsConfig) {
    if models.available.is_empty() {
        println!("No models configured. Add [[models.available]] entries to config.toml.");
        return;
    }

    for entry in &models.available {
        let marker = if entry.id == models.default { "*" } else { " " };
        println!("{} {:<12} {}", marker, entry.label, entry.id);
    }
    println!();
    println!("* default");
}
