// Parking backend HTTP client
//
// Wraps `reqwest::Client` with base-URL construction and uniform status
// handling. The endpoint modules (zones, spaces, health) are implemented
// as inherent methods via separate files to keep this module focused on
// transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Async client for the parking administration REST backend.
///
/// All operations are plain request/response: no retries, no request
/// de-duplication, no cancellation of in-flight calls. Every failure is
/// returned to the caller unswallowed.
pub struct ParkingClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ParkingClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Create a client from an API base URL (e.g. `http://localhost:8090/api`)
    /// and a transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (used by tests to point at a
    /// mock server without building transport defaults twice).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// The API base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ensure the base URL ends with exactly one `/` so relative joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Join a relative path (e.g. `"zones"` or `"spaces/"`) onto the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// The server origin with the `/api` base path stripped — the health
    /// endpoint lives outside the API base.
    pub(crate) fn origin_url(&self, path: &str) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    /// Raw GET that only reports whether the response was 2xx.
    pub(crate) async fn probe(&self, url: Url) -> bool {
        debug!("GET {url} (probe)");
        match self.http.get(url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Build an `Error::Http` from a non-2xx response, pulling the backend's
    /// `message` field out of the body when it sent one.
    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            #[serde(default)]
            message: Option<String>,
        }

        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                }
            });

        Error::Http {
            status: status.as_u16(),
            message,
        }
    }
}
