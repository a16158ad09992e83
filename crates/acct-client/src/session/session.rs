use crate::LogoutHandler;

use std::sync::{Arc, PoisonError, RwLock};

use log::{info, warn};

/// Holds the bearer credential for the signed-in user.
///
/// Shared behind `Arc` by everything that issues authorized calls. `login`
/// starts a session and `logout` ends it; the logout handler fires once per
/// signed-in to signed-out transition, however many callers race to end it.
pub struct Session {
    token: RwLock<Option<String>>,
    handler: Option<Arc<dyn LogoutHandler>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            token: RwLock::new(None),
            handler: None,
        }
    }

    pub fn with_handler(handler: Arc<dyn LogoutHandler>) -> Self {
        Self {
            token: RwLock::new(None),
            handler: Some(handler),
        }
    }

    pub fn login(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token.into());
        info!("Session started");
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// End the session. Returns true if a session was actually ended.
    pub fn logout(&self) -> bool {
        let previous = {
            let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
            guard.take()
        };

        if previous.is_none() {
            return false;
        }

        warn!("Session ended");
        if let Some(ref handler) = self.handler {
            handler.on_logout();
        }
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
