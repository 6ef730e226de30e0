mod extractor;
mod token;

pub use extractor::AuthPrincipal;
pub use token::{hash_token, ApiTokens};
