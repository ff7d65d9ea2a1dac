use std::fmt;

/// Caller credentials, handed explicitly to every upstream call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    bearer_token: String,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self { bearer_token: token.into() }
    }

    pub fn token(&self) -> &str {
        &self.bearer_token
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("bearer_token", &"<redacted>").finish()
    }
}
