//! API client and the cooldown-synchronized action pipeline
//!
//! Every mutating action flows through [`ArtifactsClient::perform_action`]:
//! send the POST, classify a non-success status, refresh the character
//! snapshot unconditionally on success, then suspend until the
//! server-reported cooldown has elapsed. The suspension is what serializes
//! actions: a sequential caller cannot dispatch the next action before the
//! wait resolves. Read-only queries bypass the refresh and the wait
//! entirely.

use std::sync::Arc;

use artifacts_domain::{
    classify_status, ApiError, CharacterSnapshot, ErrorKind, Result, StatusOutcome,
};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::actions::Actions;
use crate::config::ClientConfig;
use crate::http::HttpTransport;
use crate::queries::accounts::Accounts;
use crate::queries::achievements::Achievements;
use crate::queries::characters::Characters;
use crate::queries::events::Events;
use crate::queries::grand_exchange::GrandExchange;
use crate::queries::items::Items;
use crate::queries::leaderboard::Leaderboard;
use crate::queries::maps::Maps;
use crate::queries::monsters::Monsters;
use crate::queries::my_account::MyAccount;
use crate::queries::resources::Resources;
use crate::queries::tasks::Tasks;
use crate::snapshot::SnapshotStore;
use crate::transport::{Method, Transport, WireResponse};

/// Client for one character session against the Artifacts API.
///
/// The design assumes at most one in-flight mutating action at a time per
/// character; the blocking cooldown wait enforces non-overlap within a
/// sequential caller. Issuing concurrent actions for the same character
/// from independent tasks is not serialized here; the server rejects the
/// overlapping call with a cooldown error.
pub struct ArtifactsClient {
    transport: Arc<dyn Transport>,
    snapshot: SnapshotStore,
}

impl ArtifactsClient {
    /// Create a client with the reqwest-backed transport.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the transport cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self { transport: Arc::new(HttpTransport::new(&config)?), snapshot: SnapshotStore::new() })
    }

    /// Create a builder for fluent configuration.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Bind the session to a character with an initial fetch.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error if the character does not exist.
    pub async fn bind_character(&self, name: &str) -> Result<CharacterSnapshot> {
        let snapshot = self.refresh_as(Some(name)).await?;
        info!(character = %snapshot.name, position = %snapshot.position, "character bound");
        Ok(snapshot)
    }

    /// Re-fetch the bound character's record and replace the snapshot.
    ///
    /// # Errors
    ///
    /// Fails if no character is bound or the fetch fails.
    pub async fn refresh_character(&self) -> Result<CharacterSnapshot> {
        self.refresh_as(None).await
    }

    /// The cached snapshot, without a network call.
    ///
    /// # Errors
    ///
    /// Fails if no character has been bound yet.
    pub fn character(&self) -> Result<CharacterSnapshot> {
        self.snapshot.current()
    }

    /// The session's snapshot store.
    #[must_use]
    pub fn snapshot_store(&self) -> &SnapshotStore {
        &self.snapshot
    }

    /// Action endpoints (move, fight, craft, bank, GE, tasks, ...).
    #[must_use]
    pub fn actions(&self) -> Actions<'_> {
        Actions::new(self)
    }

    /// Map queries.
    #[must_use]
    pub fn maps(&self) -> Maps<'_> {
        Maps::new(self)
    }

    /// Item queries.
    #[must_use]
    pub fn items(&self) -> Items<'_> {
        Items::new(self)
    }

    /// Monster queries.
    #[must_use]
    pub fn monsters(&self) -> Monsters<'_> {
        Monsters::new(self)
    }

    /// Resource queries.
    #[must_use]
    pub fn resources(&self) -> Resources<'_> {
        Resources::new(self)
    }

    /// Event queries.
    #[must_use]
    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }

    /// Grand Exchange queries.
    #[must_use]
    pub fn grand_exchange(&self) -> GrandExchange<'_> {
        GrandExchange::new(self)
    }

    /// Task queries.
    #[must_use]
    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(self)
    }

    /// Achievement queries.
    #[must_use]
    pub fn achievements(&self) -> Achievements<'_> {
        Achievements::new(self)
    }

    /// Leaderboard queries.
    #[must_use]
    pub fn leaderboard(&self) -> Leaderboard<'_> {
        Leaderboard::new(self)
    }

    /// Account-scoped queries (other accounts' achievements).
    #[must_use]
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    /// Authenticated account queries (bank, GE orders, details).
    #[must_use]
    pub fn my_account(&self) -> MyAccount<'_> {
        MyAccount::new(self)
    }

    /// Character management (create, delete).
    #[must_use]
    pub fn characters(&self) -> Characters<'_> {
        Characters::new(self)
    }

    /// Run one mutating action through the pipeline.
    ///
    /// Sequence: POST the action, classify a non-success status (490 is an
    /// advisory and continues as success), refresh the snapshot, then wait
    /// out the refreshed cooldown before handing the response payload back.
    /// On a classified error the snapshot is left untouched and no wait is
    /// performed; the server state is presumed unchanged.
    #[instrument(skip(self, body), fields(action = %action))]
    pub(crate) async fn perform_action(&self, action: &str, body: Option<Value>) -> Result<Value> {
        let name = self.snapshot.current()?.name;
        let path = format!("my/{name}/action/{action}");

        let response = self.transport.send(Method::Post, &path, body.as_ref()).await?;
        self.check_status(&response, &name)?;

        // The response payload's shape varies by action and is not trusted
        // as the new authoritative state; the character-fetch endpoint is.
        let refreshed = self.refresh_as(None).await?;
        if refreshed.cooldown > 0 {
            debug!(character = %name, cooldown = refreshed.cooldown, "waiting for cooldown");
            tokio::time::sleep(refreshed.cooldown_duration()).await;
        }

        Ok(response.body)
    }

    /// Issue a read-only GET and return the whole body.
    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self.transport.send(Method::Get, path, None).await?;
        self.check_status(&response, &self.context_name())?;
        Ok(response.body)
    }

    /// Issue a read-only GET and return the body's `data` field.
    pub(crate) async fn get_data(&self, path: &str) -> Result<Value> {
        let body = self.get_json(path).await?;
        body.get("data").cloned().ok_or_else(|| {
            ApiError::new(ErrorKind::Decode, self.context_name(), "response has no data field")
        })
    }

    /// Issue a POST outside the action pipeline (account-scoped endpoints
    /// without cooldown semantics).
    pub(crate) async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        let response = self.transport.send(Method::Post, path, Some(&body)).await?;
        self.check_status(&response, &self.context_name())?;
        Ok(response.body)
    }

    #[instrument(skip(self))]
    async fn refresh_as(&self, name_override: Option<&str>) -> Result<CharacterSnapshot> {
        let name = match name_override {
            Some(name) => name.to_string(),
            None => self.snapshot.current()?.name,
        };

        let response = self.transport.send(Method::Get, &format!("characters/{name}"), None).await?;
        self.check_status(&response, &name)?;

        let record = response.body.get("data").cloned().ok_or_else(|| {
            ApiError::new(ErrorKind::Decode, &name, "character record has no data field")
        })?;
        let snapshot: CharacterSnapshot = serde_json::from_value(record)
            .map_err(|err| ApiError::new(ErrorKind::Decode, &name, err.to_string()))?;

        self.snapshot.replace(snapshot.clone());
        Ok(snapshot)
    }

    /// Classify a non-success status; 490 is surfaced as a log line and
    /// the call continues as a success.
    fn check_status(&self, response: &WireResponse, character: &str) -> Result<()> {
        if response.status == 200 {
            return Ok(());
        }
        match classify_status(response.status) {
            StatusOutcome::Advisory => {
                info!(character, message = %response.server_message(), "server advisory");
                Ok(())
            }
            StatusOutcome::Failed(kind) => {
                Err(ApiError::new(kind, character, response.server_message()))
            }
        }
    }

    fn context_name(&self) -> String {
        self.snapshot.name().unwrap_or_else(|| "-".to_string())
    }
}

/// Builder for [`ArtifactsClient`].
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<ClientConfig>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Set the client configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Substitute a custom transport (tests, instrumentation).
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when neither a transport nor a
    /// configuration was provided, or when the transport cannot be built.
    pub fn build(self) -> Result<ArtifactsClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let config = self
                    .config
                    .ok_or_else(|| ApiError::config("either a config or a transport is required"))?;
                Arc::new(HttpTransport::new(&config)?) as Arc<dyn Transport>
            }
        };
        Ok(ArtifactsClient { transport, snapshot: SnapshotStore::new() })
    }
}
