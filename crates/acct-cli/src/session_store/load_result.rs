use crate::session_store::stored_session::StoredSession;

/// Result of loading the session - distinguishes "not found" from errors.
#[derive(Debug)]
pub struct LoadResult {
    pub session: Option<StoredSession>,
    /// Present if the file exists but is corrupted
    pub corruption_error: Option<String>,
}
