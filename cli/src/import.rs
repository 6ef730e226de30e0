use anyhow::{Context, Result};
use recetario_core::import_draft;
use std::path::Path;

use crate::client;

/// Imports a recipe JSON file, validates it locally, and stores it via the
/// server. The file can use the same lenient shapes the web import accepts
/// (camelCase keys, persistence-style "create" wrappers around the video).
pub async fn import(file: &Path, server: &str, token: &str) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let draft = import_draft(&raw)
        .with_context(|| format!("Could not parse {}", file.display()))?;

    // Validate before going to the network so an incomplete file gets
    // field-level feedback instead of a rejected request.
    if let Err(errors) = draft.validate() {
        eprintln!("The imported recipe is incomplete:");
        for field_error in &errors.errors {
            eprintln!("  {}: {}", field_error.field, field_error.message);
        }
        anyhow::bail!("fill in the missing fields and retry");
    }

    client::verify_token(server, token)
        .await
        .context("Token rejected; check --token")?;

    let created = client::create_recipe(server, token, &draft).await?;
    println!("Created: {} ({})", created.title, created.id);

    Ok(())
}
