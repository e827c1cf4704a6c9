// ── Core error types ──
//
// User-facing errors from parkdash-core. Consumers never see raw reqwest
// failures or JSON parse errors directly; the `From<parkdash_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    // ── Operation errors ─────────────────────────────────────────────
    /// Client-side pre-submission check failed. The request was never sent.
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Backend error: {message}")]
    Api { status: Option<u16>, message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Translate an API error for an operation on a specific entity, so
    /// a 404 becomes "space not found: {id}" instead of a bare status.
    pub(crate) fn for_entity(
        err: parkdash_api::Error,
        entity: &'static str,
        id: impl ToString,
    ) -> Self {
        if err.is_not_found() {
            Self::NotFound {
                entity,
                id: id.to_string(),
            }
        } else {
            Self::from(err)
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<parkdash_api::Error> for CoreError {
    fn from(err: parkdash_api::Error) -> Self {
        match err {
            parkdash_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else if e.status().map(|s| s.as_u16()) == Some(404) {
                    CoreError::NotFound {
                        entity: "resource",
                        id: e.url().map(|u| u.path().to_owned()).unwrap_or_default(),
                    }
                } else {
                    CoreError::Api {
                        status: e.status().map(|s| s.as_u16()),
                        message: e.to_string(),
                    }
                }
            }
            parkdash_api::Error::Http { status: 404, .. } => CoreError::NotFound {
                entity: "resource",
                id: String::new(),
            },
            parkdash_api::Error::Http { status, message } => CoreError::Api {
                status: Some(status),
                message,
            },
            parkdash_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            parkdash_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
