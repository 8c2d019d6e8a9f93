use std::fmt;

use crate::error::{OrchestraError, Result};

/// An opaque Orchestra API bearer token.
///
/// The token value never appears in `Debug` output so it cannot leak
/// through logs or error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Resolves the API credential at call time.
///
/// The client depends only on this trait, so the token can come from a
/// caller-supplied string, the process environment, or any external
/// secret store without touching request logic.
pub trait CredentialProvider: Send + Sync {
    /// Look up the credential stored under `key`.
    ///
    /// Fails with [`OrchestraError::SecretNotFound`] when no secret
    /// exists under that key.
    fn resolve(&self, key: &str) -> Result<Token>;
}

/// Credential provider backed by a token supplied up front.
///
/// The key name is ignored; every lookup returns the same token.
pub struct StaticCredential {
    token: Token,
}

impl StaticCredential {
    pub fn new(token: Token) -> Self {
        Self { token }
    }
}

impl CredentialProvider for StaticCredential {
    fn resolve(&self, _key: &str) -> Result<Token> {
        Ok(self.token.clone())
    }
}

/// Credential provider backed by the process environment.
///
/// `resolve("API_KEY")` reads the `API_KEY` environment variable.
#[derive(Default)]
pub struct EnvCredential;

impl CredentialProvider for EnvCredential {
    fn resolve(&self, key: &str) -> Result<Token> {
        std::env::var(key)
            .map(Token::from)
            .map_err(|_| OrchestraError::SecretNotFound(key.to_owned()))
    }
}
