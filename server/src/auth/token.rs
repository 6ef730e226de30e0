use sha2::{Digest, Sha256};
use std::collections::HashSet;

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// The API tokens allowed to mutate the catalog, provisioned out of band.
/// Only their hashes stay in memory; who holds a token is not this server's
/// business.
#[derive(Debug, Clone, Default)]
pub struct ApiTokens {
    hashes: HashSet<String>,
}

impl ApiTokens {
    /// Reads `RECETARIO_API_TOKENS` (comma-separated). An empty set makes
    /// the deployment read-only: every mutation is rejected with 401.
    pub fn from_env() -> Self {
        let raw = std::env::var("RECETARIO_API_TOKENS").unwrap_or_default();
        Self::from_tokens(raw.split(',').map(str::trim).filter(|t| !t.is_empty()))
    }

    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        ApiTokens {
            hashes: tokens.into_iter().map(hash_token).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn verify(&self, token: &str) -> bool {
        self.hashes.contains(&hash_token(token))
    }
}
