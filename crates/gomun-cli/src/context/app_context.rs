use anyhow::{Context, bail};
use gomun_client::{ApiClient, ApiError};
use gomun_config::GomunConfig;
use gomun_core::Session;
use gomun_router::Router;
use gomun_session::{FileStorage, SessionState, SessionStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: GomunConfig,
    pub sessions: SessionStore<FileStorage>,
    pub router: Router,
}

impl AppContext {
    /// Resolve the storage directory and open the session store.
    pub fn init(config: GomunConfig) -> anyhow::Result<Self> {
        let dir = config
            .storage
            .resolved_dir()
            .context("no home directory found; set GOMUN_STORAGE__DIR")?;
        tracing::debug!(dir = %dir.display(), "session storage");

        Ok(Self {
            config,
            sessions: SessionStore::new(FileStorage::new(dir)),
            router: Router::new(),
        })
    }

    /// Whether a backend base URL has been configured.
    pub fn has_api(&self) -> bool {
        self.config.api.is_configured()
    }

    /// Build an API client, refusing the same-origin default which a
    /// terminal has no origin for.
    pub fn api(&self) -> anyhow::Result<ApiClient> {
        if !self.has_api() {
            bail!(
                "no backend configured: set GOMUN_API__BASE_URL or api.base_url in .gomun/config.toml"
            );
        }
        ApiClient::from_config(&self.config.api).context("failed to build HTTP client")
    }

    /// Classify the stored session, clearing it if it has expired.
    pub fn session_state(&self) -> SessionState {
        let state = self.sessions.state();
        if matches!(state, SessionState::Expired(_)) {
            tracing::debug!("clearing expired session");
            if let Err(error) = self.sessions.clear() {
                tracing::warn!(%error, "failed to clear expired session");
            }
        }
        state
    }

    /// The active session, or an error telling the user to log in.
    pub fn require_session(&self) -> anyhow::Result<Session> {
        match self.session_state() {
            SessionState::Active(session) => Ok(session),
            SessionState::Expired(_) => bail!("session expired; run `gomun auth login` again"),
            SessionState::Absent => bail!("not logged in; run `gomun auth login` first"),
        }
    }

    /// Attach `action` to an API failure. A 401 means the backend no longer
    /// accepts the stored token, so the session is dropped as well.
    pub fn api_failure(&self, error: ApiError, action: &str) -> anyhow::Error {
        if error.is_unauthorized() {
            if let Err(clear_error) = self.sessions.clear() {
                tracing::warn!(error = %clear_error, "failed to clear rejected session");
            }
            return anyhow::anyhow!("{action}: {error} (stored session cleared; log in again)");
        }
        anyhow::Error::new(error).context(action.to_string())
    }
}
