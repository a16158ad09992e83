use crate::CliResult;
use crate::session_store;

use acct_client::Session;

use std::path::Path;
use std::sync::Arc;

use log::{error, info, warn};

/// Where the bearer token for this invocation came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token` or `ACCT_TOKEN`; never touches the session file
    Explicit(String),
    /// The session file written by `session login`
    Stored(String),
    Anonymous,
}

/// Pick the token: an explicit one wins over the stored session.
///
/// A corrupted session file is moved aside and treated as signed out.
pub fn resolve(explicit: Option<String>, session_path: &Path) -> CliResult<TokenSource> {
    if let Some(token) = explicit {
        return Ok(TokenSource::Explicit(token));
    }

    let loaded = session_store::load(session_path)?;
    if loaded.corruption_error.is_some() {
        session_store::backup_corrupted(session_path)?;
    }

    Ok(match loaded.session {
        Some(stored) => TokenSource::Stored(stored.token),
        None => TokenSource::Anonymous,
    })
}

/// Build the session for this invocation.
///
/// Only a token read from the session file is removed from it when the
/// server rejects the credential.
pub fn session_for(source: TokenSource, session_path: &Path) -> Arc<Session> {
    match source {
        TokenSource::Stored(token) => {
            let store_path = session_path.to_path_buf();
            let session = Session::with_handler(Arc::new(move || {
                warn!("Server rejected the stored credential, removing {store_path:?}");
                if let Err(e) = session_store::clear(&store_path) {
                    error!("{e}");
                }
            }));
            session.login(token);
            Arc::new(session)
        }
        TokenSource::Explicit(token) => {
            let session = Session::with_handler(Arc::new(|| {
                warn!("Server rejected the --token credential; stored session left in place");
            }));
            session.login(token);
            Arc::new(session)
        }
        TokenSource::Anonymous => {
            info!("No credential; only public commands will succeed");
            Arc::new(Session::new())
        }
    }
}
