use thiserror::Error;

/// Top-level error type for the `parkdash-api` crate.
///
/// Covers every failure mode of the REST surface: transport failures
/// (no response at all), non-2xx responses, and malformed bodies.
/// `parkdash-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    /// The server was never reached or never answered.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Backend ─────────────────────────────────────────────────────
    /// Non-2xx response from the backend.
    #[error("Backend error (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the transport never got a response from the server.
    pub fn is_network(&self) -> bool {
        match self {
            Self::Transport(e) => e.status().is_none(),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the backend rejected the payload.
    pub fn is_validation_rejection(&self) -> bool {
        self.status() == Some(400)
    }

    /// The HTTP status code, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
