// ── Session abstraction ──
//
// Lifecycle management for one backend connection: owns the HTTP client
// and the view store, routes CRUD through validation, and runs the
// periodic refresh / connection probe in the background.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use parkdash_api::{ParkingClient, TransportConfig};

use crate::codegen;
use crate::error::CoreError;
use crate::model::{Space, SpaceDraft, Zone, ZoneDraft};
use crate::store::ViewStore;
use crate::validate;

/// Default dashboard refresh cadence, matching the original 30-second timer.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

// ── Configuration ────────────────────────────────────────────────

/// How to reach the backend and how often to refresh.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// API base URL, e.g. `http://localhost:8090/api`.
    pub api_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Periodic refresh cadence. `Duration::ZERO` disables the timer.
    pub refresh_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8090/api".into(),
            timeout: Duration::from_secs(30),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

// ── ConnectionState ──────────────────────────────────────────────

/// Backend reachability as last observed by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No probe has completed yet.
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

// ── Session ──────────────────────────────────────────────────────

/// The main entry point for consumers. Cheaply cloneable.
///
/// Refreshes replace whole collections; overlapping refreshes are
/// tolerated and the last response to land wins. No call is retried —
/// callers surface failures and decide whether to re-invoke.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: ParkingClient,
    store: ViewStore,
    connection: watch::Sender<ConnectionState>,
    refresh_interval: Duration,
    cancel: CancellationToken,
    task_handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Session {
    /// Build a session from config. Performs no I/O — call a refresh (or
    /// [`spawn_refresh_task`](Self::spawn_refresh_task)) to load data.
    pub fn new(config: &SessionConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = ParkingClient::new(&config.api_url, &transport)?;
        Ok(Self::with_client(client, config.refresh_interval))
    }

    /// Wrap a pre-built client (used by tests against a mock server).
    pub fn with_client(client: ParkingClient, refresh_interval: Duration) -> Self {
        let (connection, _) = watch::channel(ConnectionState::Unknown);
        Self {
            inner: Arc::new(SessionInner {
                client,
                store: ViewStore::new(),
                connection,
                refresh_interval,
                cancel: CancellationToken::new(),
                task_handles: Mutex::new(Vec::new()),
            }),
        }
    }

    /// The view store backing this session.
    pub fn store(&self) -> &ViewStore {
        &self.inner.store
    }

    /// The backend base URL this session talks to.
    pub fn api_url(&self) -> String {
        self.inner.client.base_url().to_string()
    }

    // ── Refresh ──────────────────────────────────────────────────

    /// Reload the zone collection, replacing it wholesale.
    pub async fn refresh_zones(&self) -> Result<(), CoreError> {
        let raw = self.inner.client.list_zones().await?;
        self.inner
            .store
            .apply_zones(raw.into_iter().map(Zone::from).collect());
        Ok(())
    }

    /// Reload the space collection, replacing it wholesale.
    pub async fn refresh_spaces(&self) -> Result<(), CoreError> {
        let raw = self.inner.client.list_spaces().await?;
        self.inner
            .store
            .apply_spaces(raw.into_iter().map(Space::from).collect());
        Ok(())
    }

    /// Reload both collections in parallel. Whichever fetch succeeds is
    /// applied even when the other fails; the first error is returned.
    pub async fn refresh_all(&self) -> Result<(), CoreError> {
        let (zones_res, spaces_res) = tokio::join!(
            self.inner.client.list_zones(),
            self.inner.client.list_spaces(),
        );

        let mut first_err = None;

        match zones_res {
            Ok(raw) => self
                .inner
                .store
                .apply_zones(raw.into_iter().map(Zone::from).collect()),
            Err(e) => first_err = Some(CoreError::from(e)),
        }
        match spaces_res {
            Ok(raw) => self
                .inner
                .store
                .apply_spaces(raw.into_iter().map(Space::from).collect()),
            Err(e) => {
                if first_err.is_none() {
                    first_err = Some(CoreError::from(e));
                }
            }
        }

        match first_err {
            None => {
                debug!(
                    zones = self.inner.store.zone_count(),
                    spaces = self.inner.store.space_count(),
                    "data refresh complete"
                );
                Ok(())
            }
            Some(e) => Err(e),
        }
    }

    // ── Single-entity fetches ────────────────────────────────────

    pub async fn fetch_zone(&self, id: Uuid) -> Result<Zone, CoreError> {
        let raw = self
            .inner
            .client
            .get_zone(id)
            .await
            .map_err(|e| CoreError::for_entity(e, "zone", id))?;
        Ok(raw.into())
    }

    pub async fn fetch_space(&self, id: Uuid) -> Result<Space, CoreError> {
        let raw = self
            .inner
            .client
            .get_space(id)
            .await
            .map_err(|e| CoreError::for_entity(e, "space", id))?;
        Ok(raw.into())
    }

    // ── Zone CRUD ────────────────────────────────────────────────

    /// Validate and create a zone, then refresh the zone collection.
    pub async fn create_zone(&self, draft: &ZoneDraft) -> Result<Zone, CoreError> {
        validate::zone(draft)?;
        let created = self.inner.client.create_zone(&draft.into()).await?;
        self.refresh_zones().await?;
        Ok(created.into())
    }

    /// Validate and update a zone, then refresh the zone collection.
    pub async fn update_zone(&self, id: Uuid, draft: &ZoneDraft) -> Result<Zone, CoreError> {
        validate::zone(draft)?;
        let updated = self
            .inner
            .client
            .update_zone(id, &draft.into())
            .await
            .map_err(|e| CoreError::for_entity(e, "zone", id))?;
        self.refresh_zones().await?;
        Ok(updated.into())
    }

    /// Delete a zone. The cached collection is only touched by the refresh
    /// that follows success — a 404 for a stale id leaves it as it was.
    pub async fn delete_zone(&self, id: Uuid) -> Result<(), CoreError> {
        self.inner
            .client
            .delete_zone(id)
            .await
            .map_err(|e| CoreError::for_entity(e, "zone", id))?;
        self.refresh_zones().await
    }

    // ── Space CRUD ───────────────────────────────────────────────

    /// Validate and create a space, then refresh the space collection.
    /// The returned entity carries the server's canonical code, which may
    /// differ from the suggestion in the draft.
    pub async fn create_space(&self, draft: &SpaceDraft) -> Result<Space, CoreError> {
        validate::space(draft)?;
        let created = self.inner.client.create_space(&draft.into()).await?;
        self.refresh_spaces().await?;
        Ok(created.into())
    }

    /// Validate and update a space, then refresh the space collection.
    pub async fn update_space(&self, id: Uuid, draft: &SpaceDraft) -> Result<Space, CoreError> {
        validate::space(draft)?;
        let updated = self
            .inner
            .client
            .update_space(id, &draft.into())
            .await
            .map_err(|e| CoreError::for_entity(e, "space", id))?;
        self.refresh_spaces().await?;
        Ok(updated.into())
    }

    /// Delete a space. Same stale-id semantics as [`delete_zone`](Self::delete_zone).
    pub async fn delete_space(&self, id: Uuid) -> Result<(), CoreError> {
        self.inner
            .client
            .delete_space(id)
            .await
            .map_err(|e| CoreError::for_entity(e, "space", id))?;
        self.refresh_spaces().await
    }

    /// Suggest the next code for a space in `zone_id`, based on the cached
    /// space collection (refresh first for an up-to-date suggestion).
    pub async fn suggest_space_code(&self, zone_id: Uuid) -> Result<String, CoreError> {
        let zone = match self.inner.store.zone_by_id(zone_id) {
            Some(z) => z,
            None => self.fetch_zone(zone_id).await?,
        };
        let spaces = self.inner.store.spaces_snapshot();
        Ok(codegen::next_code(zone.prefix_letter(), &spaces))
    }

    // ── Connection status ────────────────────────────────────────

    /// Run the health probe once and record the result.
    pub async fn check_connection(&self) -> bool {
        let ok = self.inner.client.check_health().await;
        let state = if ok {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        };
        let _ = self.inner.connection.send(state);
        ok
    }

    /// Subscribe to connection state changes.
    pub fn connection_state(&self) -> watch::Receiver<ConnectionState> {
        self.inner.connection.subscribe()
    }

    // ── Background refresh ───────────────────────────────────────

    /// Start the periodic refresh / connection probe.
    ///
    /// Each tick spawns an independent refresh: a slow response does not
    /// delay the next tick, so overlapping refreshes can race — the last
    /// response to land wins, which the store tolerates by design of
    /// whole-snapshot replacement. Errors are logged and dropped; the next
    /// tick simply tries again.
    pub async fn spawn_refresh_task(&self) {
        if self.inner.refresh_interval.is_zero() {
            return;
        }

        let session = self.clone();
        let cancel = self.inner.cancel.clone();
        let interval = self.inner.refresh_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // consume the immediate first tick

            loop {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        let session = session.clone();
                        tokio::spawn(async move {
                            session.check_connection().await;
                            if let Err(e) = session.refresh_all().await {
                                warn!(error = %e, "periodic refresh failed");
                            }
                        });
                    }
                }
            }
        });

        self.inner.task_handles.lock().await.push(handle);
    }

    /// Cancel background tasks and wait for them to finish.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        let mut handles = self.inner.task_handles.lock().await;
        for handle in handles.drain(..) {
            let _ = handle.await;
        }
        debug!("session shut down");
    }
}
