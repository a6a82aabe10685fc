use anyhow::Context;
use rapport_client::ApiClient;
use rapport_config::RapportConfig;
use rapport_session::{SessionContext, SessionStore};

/// Shared resources for one invocation.
pub struct AppContext {
    pub config: RapportConfig,
    pub client: ApiClient,
    pub store: SessionStore,
    pub session: SessionContext,
}

impl AppContext {
    /// Build the HTTP client and load the session file.
    pub fn init(config: RapportConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to build the API client")?;
        let store = SessionStore::resolve(config.session.path_override())
            .context("failed to locate the session file")?;
        let state = store.load()?;
        tracing::debug!(path = %store.path().display(), ?state, "session loaded");

        Ok(Self {
            config,
            client,
            store,
            session: SessionContext::new(state),
        })
    }

    /// Write the session back if a command changed it.
    pub fn persist_session(&self) -> anyhow::Result<()> {
        if self.session.is_dirty() {
            self.store.save(self.session.state())?;
        }
        Ok(())
    }

    /// Delete the session file and start over empty.
    pub fn reset_session(&mut self) -> anyhow::Result<()> {
        self.store.clear()?;
        self.session = SessionContext::default();
        Ok(())
    }
}
