//! Thin reqwest wrappers around the server endpoints the CLI talks to.

use anyhow::{Context, Result};
use recetario_core::RecipeDraft;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatedRecipe {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    count: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pulls the server's error message out of a failed response, falling back
/// to the raw body when it isn't the usual {"error": ...} shape.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) => format!("{}: {}", status, err.error),
        Err(_) => format!("{}: {}", status, body),
    }
}

/// Checks the token against the authed ping endpoint so a bad token fails
/// fast instead of midway through a batch of writes.
pub async fn verify_token(server: &str, token: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/api/test/ping", server))
        .bearer_auth(token)
        .send()
        .await
        .context("Failed to reach server")?;

    if !response.status().is_success() {
        anyhow::bail!("Token check failed ({})", error_message(response).await);
    }

    Ok(())
}

pub async fn count_recipes(server: &str) -> Result<usize> {
    let response = reqwest::get(format!("{}/api/recipes", server))
        .await
        .context("Failed to reach server")?;

    if !response.status().is_success() {
        anyhow::bail!("Listing recipes failed ({})", error_message(response).await);
    }

    let list: ListResponse = response.json().await?;
    Ok(list.count)
}

pub async fn create_recipe(
    server: &str,
    token: &str,
    draft: &RecipeDraft,
) -> Result<CreatedRecipe> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/recipes", server))
        .bearer_auth(token)
        .json(draft)
        .send()
        .await
        .context("Failed to reach server")?;

    if !response.status().is_success() {
        anyhow::bail!("Create failed ({})", error_message(response).await);
    }

    let created: CreatedRecipe = response.json().await?;
    Ok(created)
}
