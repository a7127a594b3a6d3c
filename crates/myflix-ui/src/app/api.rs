//! API client context shared through the component tree.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - The session store travels inside the client; components reach it there.

use std::rc::Rc;

use crate::config::ClientConfig;
use crate::core::session::SessionStore;
use crate::services::api::ApiClient;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Build the client from the compiled-in configuration and browser storage.
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        let client = ApiClient::new(&config, SessionStore::browser())?;
        Ok(Self {
            client: Rc::new(client),
        })
    }

    pub(crate) fn session(&self) -> &SessionStore {
        self.client.session()
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
